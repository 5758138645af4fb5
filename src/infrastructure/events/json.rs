//! JSON Event Sink
//!
//! Outputs publish events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PublishEvent, PublishEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PublishEventSink for JsonEventSink {
    fn on_event(&self, event: PublishEvent) {
        let json = match event {
            PublishEvent::Started {
                source,
                bucket,
                prefix,
                file_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "publish",
                    "source": source.display().to_string(),
                    "bucket": bucket,
                    "prefix": prefix,
                    "file_count": file_count,
                    "dry_run": dry_run,
                })
            }

            PublishEvent::FileUploaded {
                index,
                key,
                size,
                encoded_size,
            } => {
                serde_json::json!({
                    "event": "item_uploaded",
                    "command": "publish",
                    "index": index,
                    "key": key,
                    "size": size,
                    "encoded_size": encoded_size,
                })
            }

            PublishEvent::FileSkipped { index, key, reason } => {
                serde_json::json!({
                    "event": "item_skipped",
                    "command": "publish",
                    "index": index,
                    "key": key,
                    "reason": reason,
                })
            }

            PublishEvent::FileFailed { index, key, error } => {
                serde_json::json!({
                    "event": "item_error",
                    "command": "publish",
                    "index": index,
                    "key": key,
                    "error": error,
                })
            }

            PublishEvent::Completed {
                uploaded_count,
                skipped_count,
                failed_count,
            } => {
                let status = if failed_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "publish",
                    "status": status,
                    "uploaded": uploaded_count,
                    "skipped": skipped_count,
                    "errors": failed_count,
                })
            }
        };

        self.write_event(json);
    }
}
