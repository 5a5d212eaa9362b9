//! Mapping of core failures onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use persons_core::{ErrorKind, PersonError};

/// An error response: status code plus a plain-text message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Builds the response for a core error, logging it with `context`.
    ///
    /// Client errors are logged at `warn`, internal failures at `error`. Internal failures get a
    /// generic message; their detail only goes to the log.
    pub fn from_person_error(context: &str, err: PersonError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => {
                tracing::warn!("{}: {}", context, err);
                Self::new(StatusCode::NOT_FOUND, err.to_string())
            }
            ErrorKind::InvalidInput => {
                tracing::warn!("{}: {}", context, err);
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            ErrorKind::InternalFailure => {
                tracing::error!("{}: {:?}", context, err);
                Self::internal()
            }
        }
    }

    pub fn invalid_json(err: serde_json::Error) -> Self {
        tracing::warn!("Invalid json in request: {}", err);
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid json in request: {}", err),
        )
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something wicked happened, please try again",
        )
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persons_core::ValidationError;

    #[test]
    fn test_status_follows_error_kind() {
        let not_found = ApiError::from_person_error("get", PersonError::NotFound("x".into()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = ApiError::from_person_error(
            "create",
            PersonError::Validation(ValidationError::new(vec!["name cannot be empty".into()])),
        );
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.message, "name cannot be empty");

        let internal = ApiError::from_person_error("list", PersonError::LockPoisoned("read"));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!internal.message.contains("poisoned"));
    }
}
