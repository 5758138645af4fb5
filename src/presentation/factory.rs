//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::PublishUseCase;
use crate::config::DeployConfig;
use crate::infrastructure::{FsAssetSource, GzipEncoder, S3ObjectStore};

/// Type alias for the concrete PublishUseCase with all dependencies
pub type ConcretePublishUseCase = PublishUseCase<FsAssetSource, S3ObjectStore>;

/// Create a publish use case targeting the configured bucket
///
/// Builds the S3 client from `config`; no request is sent until the first upload.
pub fn create_publish_use_case(config: &DeployConfig) -> ConcretePublishUseCase {
    PublishUseCase::new(
        FsAssetSource::new(),
        S3ObjectStore::new(config),
        Box::new(GzipEncoder::default()),
    )
}
