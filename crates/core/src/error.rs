use crate::validation::ValidationError;

/// Coarse classification of a [`PersonError`], used at the API boundary to pick a status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    InternalFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    #[error("Person with id {0} does not exist")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("person store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl PersonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PersonError::NotFound(_) => ErrorKind::NotFound,
            PersonError::InvalidInput(_) | PersonError::Validation(_) => ErrorKind::InvalidInput,
            PersonError::LockPoisoned(_) => ErrorKind::InternalFailure,
        }
    }
}

pub type PersonResult<T> = std::result::Result<T, PersonError>;
