//! Domain Entities
//!
//! - `AssetPath` / `AssetFile` - A file under the build directory
//! - `UploadResult` - Outcome of publishing one file

mod asset_file;
mod upload_result;

pub use asset_file::{AssetFile, AssetPath};
pub use upload_result::{UploadResult, UploadStatus};
