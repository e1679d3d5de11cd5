//! Cart store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GOMARKET_DATA_DIR` - Directory for persisted cart snapshots
//!   (default: `.gomarket`)
//!
//! The storage key the snapshot is persisted under is a fixed format
//! constant ([`crate::STORAGE_KEY`]) and is deliberately not configurable.

use std::path::PathBuf;

use thiserror::Error;

/// Default snapshot directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".gomarket";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart store configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory where cart snapshots are stored.
    pub data_dir: PathBuf,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = get_env_or_default("GOMARKET_DATA_DIR", DEFAULT_DATA_DIR);
        if data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "GOMARKET_DATA_DIR".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
