//! Event Sink Implementations
//!
//! Provides concrete implementations of PublishEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: per-file reporter lines for humans

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
