//! Publish Event Port
//!
//! Provides an observable interface for publish operations.
//! Enables the per-file reporter, JSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during a publish
#[derive(Debug, Clone)]
pub enum PublishEvent {
    /// Files discovered, uploads about to start
    Started {
        source: PathBuf,
        bucket: String,
        prefix: String,
        file_count: usize,
        dry_run: bool,
    },

    /// Object written to the bucket
    FileUploaded {
        index: usize,
        key: String,
        size: usize,
        encoded_size: usize,
    },

    /// Upload skipped (dry run)
    FileSkipped {
        index: usize,
        key: String,
        reason: String,
    },

    /// Reading, encoding or uploading failed
    FileFailed {
        index: usize,
        key: String,
        error: String,
    },

    /// Every file has been attempted
    Completed {
        uploaded_count: usize,
        skipped_count: usize,
        failed_count: usize,
    },
}

/// Trait for receiving publish events
///
/// Implementations:
/// - ConsoleEventSink: one reporter line per file
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait PublishEventSink: Send + Sync {
    fn on_event(&self, event: PublishEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PublishEventSink for NoopEventSink {
    fn on_event(&self, _event: PublishEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingEventSink {
        events: Arc<Mutex<Vec<PublishEvent>>>,
    }

    impl PublishEventSink for RecordingEventSink {
        fn on_event(&self, event: PublishEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_event(PublishEvent::Started {
            source: PathBuf::from("build/static"),
            bucket: "assets".to_string(),
            prefix: "myapp/prod/".to_string(),
            file_count: 2,
            dry_run: false,
        });
        sink.on_event(PublishEvent::FileUploaded {
            index: 0,
            key: "myapp/prod/app.js".to_string(),
            size: 10,
            encoded_size: 8,
        });

        assert_eq!(events.lock().unwrap().len(), 2);
    }
}
