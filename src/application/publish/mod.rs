//! Publish Module
//!
//! Orchestrates uploading the build directory to the bucket.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`PublishOptions`)
//! - `result` - Result types (`PublishReport`)
//! - `use_case` - Core use case logic (`PublishUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use s3publish::application::publish::{PublishOptions, PublishUseCase};
//!
//! let use_case = PublishUseCase::new(asset_source, store, encoder);
//! let report = use_case.execute(&config, &PublishOptions::default()).await?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{PublishOptions, DEFAULT_CONCURRENCY, DEFAULT_SOURCE_DIR};
pub use result::PublishReport;
pub use use_case::PublishUseCase;
