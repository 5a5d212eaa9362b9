//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads process-wide environment variables.

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::pagination::SortOrder;
use crate::{PersonError, PersonResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    default_page_size: i64,
    sort_order: SortOrder,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            sort_order: SortOrder::default(),
        }
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `PersonError::InvalidInput` if `default_page_size` is not positive.
    pub fn new(default_page_size: i64, sort_order: SortOrder) -> PersonResult<Self> {
        if default_page_size <= 0 {
            return Err(PersonError::InvalidInput(format!(
                "default page size must be positive, got {}",
                default_page_size
            )));
        }

        Ok(Self {
            default_page_size,
            sort_order,
        })
    }

    pub fn default_page_size(&self) -> i64 {
        self.default_page_size
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the default page size from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_PAGE_SIZE`].
pub fn default_page_size_from_env_value(value: Option<String>) -> PersonResult<i64> {
    match non_empty(value) {
        None => Ok(DEFAULT_PAGE_SIZE),
        Some(v) => v.parse::<i64>().map_err(|e| {
            PersonError::InvalidInput(format!("invalid default page size '{}': {}", v, e))
        }),
    }
}

/// Parse the listing sort order from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`SortOrder::AgeDesc`].
pub fn sort_order_from_env_value(value: Option<String>) -> PersonResult<SortOrder> {
    let parsed = non_empty(value).map(|v| v.parse::<SortOrder>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_positive_page_size() {
        for size in [0, -1, i64::MIN] {
            let err = CoreConfig::new(size, SortOrder::AgeDesc).expect_err("should reject");
            assert!(matches!(err, PersonError::InvalidInput(msg) if msg.contains("positive")));
        }
    }

    #[test]
    fn test_new_keeps_values() {
        let cfg = CoreConfig::new(25, SortOrder::NameAsc).expect("valid config");
        assert_eq!(cfg.default_page_size(), 25);
        assert_eq!(cfg.sort_order(), SortOrder::NameAsc);
    }

    #[test]
    fn test_default_matches_constants() {
        let cfg = CoreConfig::default();
        assert_eq!(cfg.default_page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(cfg.sort_order(), SortOrder::AgeDesc);
    }

    #[test]
    fn test_default_page_size_from_env_value() {
        assert_eq!(default_page_size_from_env_value(None).unwrap(), 100);
        assert_eq!(
            default_page_size_from_env_value(Some("  ".into())).unwrap(),
            100
        );
        assert_eq!(
            default_page_size_from_env_value(Some(" 20 ".into())).unwrap(),
            20
        );
        assert!(default_page_size_from_env_value(Some("many".into())).is_err());
    }

    #[test]
    fn test_sort_order_from_env_value() {
        assert_eq!(sort_order_from_env_value(None).unwrap(), SortOrder::AgeDesc);
        assert_eq!(
            sort_order_from_env_value(Some("".into())).unwrap(),
            SortOrder::AgeDesc
        );
        assert_eq!(
            sort_order_from_env_value(Some("name-asc".into())).unwrap(),
            SortOrder::NameAsc
        );
        assert!(sort_order_from_env_value(Some("random".into())).is_err());
    }
}
