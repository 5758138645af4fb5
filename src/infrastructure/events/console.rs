//! Console Event Sink
//!
//! Prints one reporter line per file as it finishes:
//!
//! ```text
//! [create] myapp/prod/css/main.css
//! [dry-run] myapp/prod/js/app.js
//! [error] myapp/prod/media/logo.svg: upload rejected: Access Denied
//! ```

use crate::domain::ports::{PublishEvent, PublishEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Reporter writing to stderr, keeping stdout for the summary
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl PublishEventSink for ConsoleEventSink {
    fn on_event(&self, event: PublishEvent) {
        match event {
            PublishEvent::FileUploaded { key, .. } => self.line(format!("[create] {}", key)),
            PublishEvent::FileSkipped { key, .. } => self.line(format!("[dry-run] {}", key)),
            PublishEvent::FileFailed { key, error, .. } => {
                self.line(format!("[error] {}: {}", key, error))
            }
            // Header and summary are rendered by the command.
            PublishEvent::Started { .. } | PublishEvent::Completed { .. } => {}
        }
    }
}
