//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Build directory walking, home directory lookup
//! - `encoding` - Gzip content encoder
//! - `storage/` - S3 object store
//! - `events/` - Console and JSON event sinks

pub mod encoding;
pub mod events;
pub mod fs;
pub mod storage;

// Re-export for convenience
pub use encoding::GzipEncoder;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{home_dir, FsAssetSource};
pub use storage::S3ObjectStore;
