//! Error type for the `portfolio` CLI library.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading configuration or writing the rendered site.
///
/// Rendering itself cannot fail; every variant comes from the filesystem
/// or from user-supplied configuration.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Config file exists but could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has unknown keys
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Output directory or file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Project listing could not be serialized
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PortfolioError>;
