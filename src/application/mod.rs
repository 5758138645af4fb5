//! Application Layer
//!
//! Use cases that orchestrate domain ports. No direct I/O happens here.

pub mod publish;

pub use publish::{PublishOptions, PublishReport, PublishUseCase};
