//! Unified error handling for the cart store.
//!
//! Usage errors (consuming the cart outside an active provider) are
//! programming-time bugs and fail loudly. Storage errors are operational:
//! the in-memory cart stays usable even when persistence degrades.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by the cart store and its context handles.
#[derive(Debug, Error)]
pub enum CartError {
    /// A context handle was used after its provider was dropped.
    #[error("cart context must be used within an active CartProvider")]
    OutsideProvider,

    /// A storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Snapshot encoding failed.
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The persistence writer has stopped; in-memory changes still apply
    /// but are no longer mirrored to storage.
    #[error("persistence writer is not running; cart changes are not being saved")]
    PersistenceUnavailable,
}

/// Result type alias for [`CartError`].
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_provider_names_the_precondition() {
        let err = CartError::OutsideProvider;
        assert_eq!(
            err.to_string(),
            "cart context must be used within an active CartProvider"
        );
    }

    #[test]
    fn test_storage_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CartError::from(StorageError::from(io));
        assert!(err.to_string().starts_with("storage error:"));
    }
}
