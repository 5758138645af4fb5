//! Publish Options
//!
//! Configuration types for publish operations.

use std::path::PathBuf;

use crate::domain::value_objects::ObjectAcl;

/// Build output directory, relative to the working directory
pub const DEFAULT_SOURCE_DIR: &str = "build/static";

/// Uploads in flight at once
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Options for the publish use case
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Directory whose contents are published
    pub source: PathBuf,
    /// Encode and derive keys, but don't upload
    pub dry_run: bool,
    /// Maximum concurrent uploads (at least 1)
    pub concurrency: usize,
    /// ACL applied to every object
    pub acl: ObjectAcl,
    /// Appended to every destination key (e.g. `.gz`)
    pub key_suffix: Option<String>,
}

impl PublishOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dry_run: false,
            concurrency: DEFAULT_CONCURRENCY,
            acl: ObjectAcl::default(),
            key_suffix: None,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_acl(mut self, acl: ObjectAcl) -> Self {
        self.acl = acl;
        self
    }

    pub fn with_key_suffix(mut self, suffix: Option<String>) -> Self {
        self.key_suffix = suffix.filter(|s| !s.is_empty());
        self
    }
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_DIR)
    }
}
