//! Input validation for person records.
//!
//! A record is only admitted to the store once it passes [`validate_person`].

use api_shared::Person;

/// Every rule a person record failed.
///
/// Displays as the reasons joined with `", "`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", .reasons.join(", "))]
pub struct ValidationError {
    reasons: Vec<String>,
}

impl ValidationError {
    pub fn new(reasons: Vec<String>) -> Self {
        Self { reasons }
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}

/// Validates that a person record may be stored.
///
/// Both rules are always checked, so the error lists every violation rather than the first:
/// - `id` must be non-empty after trimming whitespace
/// - `name` must be non-empty after trimming whitespace
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying one reason per failed rule.
pub fn validate_person(person: &Person) -> Result<(), ValidationError> {
    let mut reasons = Vec::new();

    if person.id.trim().is_empty() {
        reasons.push("id cannot be empty".to_string());
    }

    if person.name.trim().is_empty() {
        reasons.push("name cannot be empty".to_string());
    }

    if reasons.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(reasons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: id.into(),
            name: name.into(),
            age: 30,
        }
    }

    #[test]
    fn test_validate_person_accepts_valid_record() {
        assert!(validate_person(&person("x", "Ada")).is_ok());
        assert!(validate_person(&person(" x ", "  Ada Lovelace ")).is_ok());
    }

    #[test]
    fn test_validate_person_rejects_empty_id() {
        let err = validate_person(&person("", "x")).expect_err("should reject empty id");
        assert_eq!(err.reasons(), ["id cannot be empty"]);
    }

    #[test]
    fn test_validate_person_rejects_empty_name() {
        let err = validate_person(&person("x", "")).expect_err("should reject empty name");
        assert_eq!(err.reasons(), ["name cannot be empty"]);
    }

    #[test]
    fn test_validate_person_rejects_whitespace_only_fields() {
        let err = validate_person(&person(" \t", "x")).expect_err("should reject blank id");
        assert_eq!(err.reasons(), ["id cannot be empty"]);

        let err = validate_person(&person("x", "\n  ")).expect_err("should reject blank name");
        assert_eq!(err.reasons(), ["name cannot be empty"]);
    }

    #[test]
    fn test_validate_person_reports_every_violation() {
        let err = validate_person(&person("", "")).expect_err("should reject both fields");
        assert_eq!(err.reasons().len(), 2);
        assert_eq!(err.to_string(), "id cannot be empty, name cannot be empty");
    }

    #[test]
    fn test_validation_error_is_a_std_error() {
        let err = validate_person(&person("x", "")).expect_err("should reject empty name");
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        assert_eq!(boxed.to_string(), "name cannot be empty");
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_age_is_not_constrained() {
        let mut p = person("x", "Ada");
        p.age = -5;
        assert!(validate_person(&p).is_ok());
        p.age = i64::MAX;
        assert!(validate_person(&p).is_ok());
    }
}
