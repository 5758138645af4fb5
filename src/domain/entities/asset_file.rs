//! AssetFile entity - a file under the build directory
//!
//! Discovery yields `AssetPath`s (cheap, no content). Contents are read into
//! an `AssetFile` just before the file is encoded and uploaded, and dropped
//! once its upload finishes.

use std::path::{Path, PathBuf};

/// A discovered file, not yet read
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AssetPath {
    /// Path relative to the source root
    relative_path: PathBuf,
    /// Path on disk
    source_path: PathBuf,
}

impl AssetPath {
    pub fn new(source_path: impl Into<PathBuf>, relative_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            relative_path: relative_path.into(),
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Attach file contents
    pub fn with_contents(self, contents: Vec<u8>) -> AssetFile {
        AssetFile {
            path: self,
            contents,
        }
    }
}

/// A file's contents together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    path: AssetPath,
    contents: Vec<u8>,
}

impl AssetFile {
    pub fn source_path(&self) -> &Path {
        self.path.source_path()
    }

    pub fn relative_path(&self) -> &Path {
        self.path.relative_path()
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
