//! File-backed storage backend.
//!
//! One file per key under a base directory. Keys are sanitized to safe
//! filenames, so the fixed cart key `"@GoMarket:Cart"` lands on disk as
//! `_GoMarket_Cart.json`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{Storage, StorageError, StorageResult};

/// Storage backend persisting each key as a JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a file store rooted at `base_dir`.
    ///
    /// The directory is created on the first write, not here, so opening
    /// a store against a never-used directory is not an error.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory this store writes under.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if sanitized.is_empty() {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }

        Ok(self.base_dir.join(format!("{sanitized}.json")))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.base_dir).await?;
        fs::write(&path, value).await?;
        Ok(())
    }
}
