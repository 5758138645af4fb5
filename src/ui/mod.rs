//! Terminal output for the CLI
//!
//! Text views render to strings; `json` writes NDJSON lines for `--json`.

pub mod error;
pub mod json;
pub mod views;
