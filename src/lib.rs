//! s3publish - publish static build assets to S3
//!
//! Walks `build/static`, gzips every file and uploads it to
//! `{app}/{env}/{relative path}` with long-lived cache headers.
//!
//! ## Layers
//!
//! - `domain` - keys, headers, entities and the ports the pipeline depends on
//! - `application` - the publish use case (bounded concurrent upload pool)
//! - `infrastructure` - filesystem, gzip, S3 and event sink implementations
//! - `presentation` - CLI definitions and dependency wiring
//! - `config` - one-shot configuration resolution from env and `~/.aws-creds.json`

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PublishOptions, PublishReport, PublishUseCase};
pub use config::{ConfigError, DeployConfig};
pub use domain::entities::{UploadResult, UploadStatus};
pub use domain::value_objects::{DestinationKey, ObjectAcl};
pub use error::{PublishError, PublishResult};
