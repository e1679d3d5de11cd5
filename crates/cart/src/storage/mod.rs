//! Local key-value persistence for cart snapshots.
//!
//! The cart mirrors its state into an asynchronous key-value store and
//! reads it back at startup. The store is a collaborator, not a second
//! writer: the in-memory cart is the source of truth and the persisted
//! snapshot is an eventually-consistent mirror of it.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage error types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be mapped to a storage location.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Asynchronous key-value persistence service.
///
/// `get` returns the previously stored serialized blob or absence;
/// `set` overwrites the blob at `key`. Implementations must be safe to
/// share across tasks.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns the blob stored at `key`, or `None` if nothing was stored.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the blob at `key`.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
