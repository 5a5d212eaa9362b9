//! Constants used throughout the persons core crate.

/// Page returned when `pageNumber` is missing or unparseable.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Page length used when `pageSize` is missing or unparseable and no override is configured.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Address the REST server binds to when no override is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:9000";
