//! Identifier generation for person records.
//!
//! Every person admitted to the store is keyed by an identifier allocated by the server. This
//! crate owns how those identifiers are produced.
//!
//! Identifiers use a *canonical* UUID representation: **32 lowercase hexadecimal characters**
//! (no hyphens), the same value you would get from `Uuid::new_v4().simple().to_string()`.
//!
//! This crate provides:
//! - [`PersonId`], a wrapper that guarantees the canonical format once constructed.
//! - [`IdGenerator`], the seam the core uses to allocate identifiers.
//! - [`UuidIdGenerator`] for production and [`SequentialIdGenerator`] for deterministic runs.
//!
//! Callers outside this crate treat identifiers as opaque strings. Nothing else should depend on
//! their shape.

mod service;

pub use service::{IdGenerator, PersonId, SequentialIdGenerator, UuidIdGenerator};
