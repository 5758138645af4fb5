//! Command handlers
//!
//! Each handler resolves configuration first, so configuration errors are
//! reported before any client is built or any file is read.

pub mod check;
pub mod publish;
