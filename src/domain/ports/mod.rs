//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_source;
pub mod content_encoder;
pub mod object_store;
pub mod publish_events;

pub use asset_source::AssetSource;
pub use content_encoder::{ContentEncoder, IdentityEncoder};
pub use object_store::{ObjectStore, PutObject, UploadError};
pub use publish_events::{NoopEventSink, PublishEvent, PublishEventSink};
