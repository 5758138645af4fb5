//! Error types for s3publish
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for s3publish operations
pub type PublishResult<T> = Result<T, PublishError>;

/// Main error type for publish operations
///
/// Every variant is fatal and raised before the first upload. Per-file
/// upload failures are reported through `UploadResult` instead.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Configuration could not be resolved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The build output directory does not exist
    #[error("source directory not found: {path} (run the build first)")]
    SourceNotFound { path: PathBuf },

    /// The source directory could not be walked
    #[error("failed to scan {path}: {message}")]
    Discovery { path: PathBuf, message: String },
}
