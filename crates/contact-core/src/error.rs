//! Error types for the submission store

use thiserror::Error;

/// Errors raised while persisting or reading submissions
///
/// Validation failures are not store errors: the store only ever receives
/// records that already passed [`crate::validate_contact`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing collection can no longer be used
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        StoreError::Unavailable(msg.into())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::unavailable("lock poisoned");
        assert_eq!(err.to_string(), "Store unavailable: lock poisoned");
    }
}
