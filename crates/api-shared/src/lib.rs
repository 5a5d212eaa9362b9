//! # API Shared
//!
//! Shared wire types and services for the persons API.
//!
//! Contains:
//! - JSON request/response shapes (`Person`, `PersonReq`, `ListPersonsQuery`, `HealthRes`)
//! - Shared services like `HealthService`
//!
//! Used by `persons-core` (as its record type) and `api-rest` (as its payloads).

pub mod health;
pub mod persons;

pub use health::{HealthRes, HealthService};
pub use persons::{ListPersonsQuery, Person, PersonReq};
