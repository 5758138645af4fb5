//! File System Implementations
//!
//! Local disk access: the AssetSource port and home directory lookup.

mod asset_source;
mod home;

pub use asset_source::FsAssetSource;
pub use home::{home_dir, TEST_HOME_VAR};
