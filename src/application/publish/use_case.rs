//! Publish Use Case
//!
//! Orchestrates the publish flow:
//! 1. Discover files under the source directory
//! 2. Derive each file's destination key
//! 3. Encode (gzip) the contents
//! 4. Upload with the fixed cache headers
//! 5. Aggregate per-file results into a report
//!
//! Steps 2-4 run per file on a bounded worker pool. A failure in any of them
//! only fails that file.

use std::path::Path;
use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::config::DeployConfig;
use crate::domain::entities::{AssetPath, UploadResult};
use crate::domain::ports::{
    AssetSource, ContentEncoder, NoopEventSink, ObjectStore, PublishEvent, PublishEventSink,
    PutObject,
};
use crate::domain::value_objects::{DestinationKey, ObjectHeaders};
use crate::error::{PublishError, PublishResult};

use super::options::PublishOptions;
use super::result::PublishReport;

/// Publish use case - orchestrates the publish flow
///
/// Parameterized by its ports so tests can swap in in-memory sources and
/// stores.
pub struct PublishUseCase<AS, OS>
where
    AS: AssetSource,
    OS: ObjectStore,
{
    asset_source: AS,
    store: OS,
    encoder: Box<dyn ContentEncoder>,
}

impl<AS, OS> PublishUseCase<AS, OS>
where
    AS: AssetSource,
    OS: ObjectStore,
{
    pub fn new(asset_source: AS, store: OS, encoder: Box<dyn ContentEncoder>) -> Self {
        Self {
            asset_source,
            store,
            encoder,
        }
    }

    pub fn store(&self) -> &OS {
        &self.store
    }

    /// List the files that would be published from `source`
    pub fn discover(&self, source: &Path) -> PublishResult<Vec<AssetPath>> {
        self.asset_source
            .discover(source)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => PublishError::SourceNotFound {
                    path: source.to_path_buf(),
                },
                _ => PublishError::Discovery {
                    path: source.to_path_buf(),
                    message: e.to_string(),
                },
            })
    }

    /// Execute the publish use case
    pub async fn execute(
        &self,
        config: &DeployConfig,
        options: &PublishOptions,
    ) -> PublishResult<PublishReport> {
        self.execute_with_events(config, options, Arc::new(NoopEventSink))
            .await
    }

    /// Execute the publish use case with event reporting
    pub async fn execute_with_events(
        &self,
        config: &DeployConfig,
        options: &PublishOptions,
        event_sink: Arc<dyn PublishEventSink>,
    ) -> PublishResult<PublishReport> {
        let assets = self.discover(&options.source)?;

        tracing::info!(
            source = %options.source.display(),
            bucket = self.store.bucket(),
            prefix = %config.destination_prefix(),
            files = assets.len(),
            dry_run = options.dry_run,
            "publish started"
        );

        event_sink.on_event(PublishEvent::Started {
            source: options.source.clone(),
            bucket: self.store.bucket().to_string(),
            prefix: config.destination_prefix(),
            file_count: assets.len(),
            dry_run: options.dry_run,
        });

        let sink: &dyn PublishEventSink = event_sink.as_ref();
        let mut indexed: Vec<(usize, UploadResult)> = stream::iter(assets.into_iter().enumerate())
            .map(move |(index, asset)| async move {
                let result = self.publish_one(index, asset, config, options, sink).await;
                (index, result)
            })
            .buffer_unordered(options.concurrency.max(1))
            .collect()
            .await;

        // Completion order is arbitrary; report in discovery order.
        indexed.sort_by_key(|(index, _)| *index);
        let report = PublishReport::new(indexed.into_iter().map(|(_, r)| r).collect());

        tracing::info!(
            uploaded = report.uploaded(),
            dry_run = report.dry_run(),
            failed = report.failed(),
            "publish finished"
        );

        event_sink.on_event(PublishEvent::Completed {
            uploaded_count: report.uploaded(),
            skipped_count: report.dry_run(),
            failed_count: report.failed(),
        });

        Ok(report)
    }

    /// Derive key, read, encode and upload a single file
    async fn publish_one(
        &self,
        index: usize,
        asset: AssetPath,
        config: &DeployConfig,
        options: &PublishOptions,
        sink: &dyn PublishEventSink,
    ) -> UploadResult {
        let source_path = asset.source_path().to_path_buf();

        let key = match DestinationKey::derive(
            config.application_name(),
            config.deploy_environment(),
            asset.relative_path(),
        ) {
            Ok(key) => key.with_suffix(options.key_suffix.as_deref().unwrap_or("")),
            Err(e) => {
                let label = asset.relative_path().display().to_string();
                return fail(sink, index, label, source_path, e.to_string());
            }
        };

        let file = match self.asset_source.load(asset) {
            Ok(file) => file,
            Err(e) => {
                return fail(
                    sink,
                    index,
                    key.into_string(),
                    source_path,
                    format!("read failed: {}", e),
                )
            }
        };

        let body = match self.encoder.encode(file.contents()) {
            Ok(body) => body,
            Err(e) => {
                return fail(
                    sink,
                    index,
                    key.into_string(),
                    source_path,
                    format!("compression failed: {}", e),
                )
            }
        };

        let size = file.len();
        let encoded_size = body.len();
        let headers = ObjectHeaders::for_path(file.relative_path(), self.encoder.encoding());
        drop(file);

        if options.dry_run {
            tracing::debug!(key = %key, size, encoded_size, "dry run, upload skipped");
            sink.on_event(PublishEvent::FileSkipped {
                index,
                key: key.to_string(),
                reason: "dry run".to_string(),
            });
            return UploadResult::dry_run(key.into_string(), source_path, size, encoded_size);
        }

        let request = PutObject {
            key: key.clone(),
            body,
            headers,
            acl: options.acl,
        };

        match self.store.put_object(request).await {
            Ok(()) => {
                tracing::debug!(key = %key, size, encoded_size, "uploaded");
                sink.on_event(PublishEvent::FileUploaded {
                    index,
                    key: key.to_string(),
                    size,
                    encoded_size,
                });
                UploadResult::uploaded(key.into_string(), source_path, size, encoded_size)
            }
            Err(e) => fail(sink, index, key.into_string(), source_path, e.to_string()),
        }
    }
}

fn fail(
    sink: &dyn PublishEventSink,
    index: usize,
    key: String,
    source_path: std::path::PathBuf,
    error: String,
) -> UploadResult {
    tracing::warn!(key = %key, error = %error, "file failed");
    sink.on_event(PublishEvent::FileFailed {
        index,
        key: key.clone(),
        error: error.clone(),
    });
    UploadResult::failed(key, source_path, error)
}
