//! Object Store Port
//!
//! Abstracts the bucket that assets are published to, so the pipeline can
//! run against S3 in production and an in-memory store in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::value_objects::{DestinationKey, ObjectAcl, ObjectHeaders};

/// Error from a single upload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The backend rejected the request (auth, ACL, missing bucket, ...)
    #[error("upload rejected: {0}")]
    Rejected(String),

    /// The request never got a response
    #[error("connection error: {0}")]
    Connection(String),
}

/// A single object write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObject {
    pub key: DestinationKey,
    pub body: Vec<u8>,
    pub headers: ObjectHeaders,
    pub acl: ObjectAcl,
}

/// Trait for object storage backends
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Bucket name, for display
    fn bucket(&self) -> &str;

    /// Write one object, overwriting any existing object at the key
    async fn put_object(&self, request: PutObject) -> Result<(), UploadError>;
}
