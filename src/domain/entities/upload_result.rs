//! UploadResult entity - the outcome of publishing one file

use std::path::{Path, PathBuf};

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    /// Object was written to the bucket
    Uploaded,
    /// Dry run: everything but the upload was performed
    DryRun,
    /// Reading, encoding or uploading failed
    Failed(String),
}

/// Per-file publish result, consumed only for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    destination_key: String,
    source_path: PathBuf,
    status: UploadStatus,
    /// Size on disk in bytes
    size: usize,
    /// Size after encoding in bytes (0 when encoding never happened)
    encoded_size: usize,
}

impl UploadResult {
    pub fn uploaded(
        destination_key: impl Into<String>,
        source_path: impl Into<PathBuf>,
        size: usize,
        encoded_size: usize,
    ) -> Self {
        Self {
            destination_key: destination_key.into(),
            source_path: source_path.into(),
            status: UploadStatus::Uploaded,
            size,
            encoded_size,
        }
    }

    pub fn dry_run(
        destination_key: impl Into<String>,
        source_path: impl Into<PathBuf>,
        size: usize,
        encoded_size: usize,
    ) -> Self {
        Self {
            destination_key: destination_key.into(),
            source_path: source_path.into(),
            status: UploadStatus::DryRun,
            size,
            encoded_size,
        }
    }

    pub fn failed(
        destination_key: impl Into<String>,
        source_path: impl Into<PathBuf>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            destination_key: destination_key.into(),
            source_path: source_path.into(),
            status: UploadStatus::Failed(error.into()),
            size: 0,
            encoded_size: 0,
        }
    }

    pub fn destination_key(&self) -> &str {
        &self.destination_key
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    /// `false` only for failed files; a dry run counts as success
    pub fn success(&self) -> bool {
        !matches!(self.status, UploadStatus::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            UploadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn encoded_size(&self) -> usize {
        self.encoded_size
    }
}
