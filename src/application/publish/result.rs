//! Publish Report
//!
//! Aggregated result of a publish operation.

use crate::domain::entities::{UploadResult, UploadStatus};

/// Per-file results in discovery order
#[derive(Debug, Clone, Default)]
pub struct PublishReport {
    results: Vec<UploadResult>,
}

impl PublishReport {
    pub fn new(results: Vec<UploadResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[UploadResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn uploaded(&self) -> usize {
        self.count(|s| matches!(s, UploadStatus::Uploaded))
    }

    pub fn dry_run(&self) -> usize {
        self.count(|s| matches!(s, UploadStatus::DryRun))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, UploadStatus::Failed(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = &UploadResult> {
        self.results.iter().filter(|r| !r.success())
    }

    /// Bytes read from disk
    pub fn total_size(&self) -> usize {
        self.results.iter().map(UploadResult::size).sum()
    }

    /// Bytes after encoding
    pub fn total_encoded_size(&self) -> usize {
        self.results.iter().map(UploadResult::encoded_size).sum()
    }

    pub fn is_success(&self) -> bool {
        self.results.iter().all(UploadResult::success)
    }

    fn count(&self, pred: impl Fn(&UploadStatus) -> bool) -> usize {
        self.results.iter().filter(|r| pred(r.status())).count()
    }
}
