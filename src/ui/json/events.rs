//! Shared JSON event types for CLI output not produced by the publish pipeline.

use s3publish::config::DeployConfig;
use serde::Serialize;

/// Emitted when a command fails before or outside the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
        }
    }
}

/// Result of `s3publish check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub version: &'static str,
    pub bucket: &'a str,
    pub prefix: String,
    pub region: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<&'a str>,
    pub source: String,
    pub file_count: usize,
}

impl<'a> CheckEvent<'a> {
    pub fn new(config: &'a DeployConfig, source: String, file_count: usize) -> Self {
        Self {
            event: "check",
            command: "check",
            version: env!("CARGO_PKG_VERSION"),
            bucket: config.bucket_name(),
            prefix: config.destination_prefix(),
            region: config.region(),
            endpoint: config.endpoint(),
            source,
            file_count,
        }
    }
}
