//! # Persons Core
//!
//! Core business logic for the persons service.
//!
//! This crate contains pure data operations over an in-memory record store:
//! - Person creation, lookup, replacement and listing (`persons`)
//! - Field validation (`validation`)
//! - Deterministic ordering and page windows (`pagination`, `page`)
//! - The lock-guarded store itself (`store`)
//!
//! **No API concerns**: HTTP servers, routing and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod page;
pub mod pagination;
pub mod persons;
pub mod store;
pub mod validation;

pub use api_shared::{Person, PersonReq};
pub use config::CoreConfig;
pub use constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_REST_ADDR};
pub use error::{ErrorKind, PersonError, PersonResult};
pub use page::Page;
pub use pagination::{paginate, SortOrder};
pub use persons::PersonService;
pub use store::PersonStore;
pub use validation::{validate_person, ValidationError};
