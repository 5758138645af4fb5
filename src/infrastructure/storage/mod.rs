//! Object Storage Implementations
//!
//! Concrete implementations of the ObjectStore port.

mod s3;

pub use s3::{S3ObjectStore, TRACING_TARGET};
