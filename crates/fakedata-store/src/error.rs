//! Store-specific error types
//!
//! Lookups never fail; these errors only arise while generating or
//! assembling a dataset.

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while building a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Generator parameters cannot be satisfied
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    /// Password hashing failed
    #[error("Credential error: {0}")]
    Credentials(String),

    /// An entity references a parent that does not exist
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Duplicate identifier or email
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),
}

impl From<argon2::password_hash::Error> for StoreError {
    fn from(err: argon2::password_hash::Error) -> Self {
        StoreError::Credentials(err.to_string())
    }
}

impl From<argon2::Error> for StoreError {
    fn from(err: argon2::Error) -> Self {
        StoreError::Credentials(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::ForeignKeyViolation("album 3 references missing user 9".to_string());
        assert_eq!(
            err.to_string(),
            "Foreign key violation: album 3 references missing user 9"
        );

        let err: StoreError = argon2::password_hash::Error::Password.into();
        assert!(matches!(err, StoreError::Credentials(_)));
    }
}
