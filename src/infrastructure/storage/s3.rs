//! S3 Object Store
//!
//! Implements the ObjectStore port with `aws-sdk-s3`.

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;

use crate::config::DeployConfig;
use crate::domain::ports::{ObjectStore, PutObject, UploadError};
use crate::domain::value_objects::ObjectAcl;

/// Tracing target for storage operations.
pub const TRACING_TARGET: &str = "s3publish::storage";

/// Provider name attached to the static credentials
const CREDENTIALS_PROVIDER: &str = "aws-creds-file";

/// S3 (or S3-compatible) bucket
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    region: String,
}

impl S3ObjectStore {
    /// Build a client from resolved configuration
    ///
    /// No network call happens here; the first request is the first upload.
    pub fn new(config: &DeployConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id(),
            config.secret_access_key(),
            None,
            None,
            CREDENTIALS_PROVIDER,
        );

        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region().to_string()))
            .credentials_provider(credentials);

        if let Some(endpoint) = config.endpoint() {
            // MinIO and most S3-compatible stores need path-style addressing.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        tracing::info!(
            target: TRACING_TARGET,
            bucket = config.bucket_name(),
            region = config.region(),
            endpoint = config.endpoint().unwrap_or("default"),
            "S3 client initialized"
        );

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket_name().to_string(),
            region: config.region().to_string(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put_object(&self, request: PutObject) -> Result<(), UploadError> {
        let PutObject {
            key,
            body,
            headers,
            acl,
        } = request;

        tracing::debug!(
            target: TRACING_TARGET,
            key = %key,
            size = body.len(),
            content_type = %headers.content_type,
            acl = %acl,
            "Writing object"
        );

        let content_length = body.len() as i64;
        let mut put = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .body(ByteStream::from(body))
            .content_length(content_length)
            .cache_control(headers.cache_control)
            .content_type(headers.content_type);

        if let Some(encoding) = headers.content_encoding {
            put = put.content_encoding(encoding);
        }

        if acl == ObjectAcl::PublicRead {
            put = put.acl(ObjectCannedAcl::PublicRead);
        }

        put.send().await.map_err(classify_error)?;

        tracing::debug!(
            target: TRACING_TARGET,
            key = %key,
            "Object write complete"
        );

        Ok(())
    }
}

fn classify_error<E, R>(err: SdkError<E, R>) -> UploadError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            UploadError::Connection(message)
        }
        _ => UploadError::Rejected(message),
    }
}

impl std::fmt::Debug for S3ObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ObjectStore")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .finish()
    }
}
