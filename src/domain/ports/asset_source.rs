//! Asset Source Port
//!
//! Discovers and reads the files to publish.

use std::io;
use std::path::Path;

use crate::domain::entities::{AssetFile, AssetPath};

/// Source of publishable files
pub trait AssetSource: Send + Sync {
    /// List every regular file under `root`, sorted by relative path
    ///
    /// Fails with `io::ErrorKind::NotFound` when `root` is not a directory.
    fn discover(&self, root: &Path) -> io::Result<Vec<AssetPath>>;

    /// Read a discovered file's contents
    fn load(&self, path: AssetPath) -> io::Result<AssetFile>;
}
