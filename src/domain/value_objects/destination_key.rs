//! Destination Key Value Object
//!
//! The full object key an asset is stored under:
//! `{application}/{environment}/{relative path}`.
//!
//! Keys always use `/` separators, whatever the host platform, and can never
//! climb out of the `{application}/{environment}/` prefix.

use std::fmt;
use std::path::{Component, Path};

/// Error when a key cannot be derived from a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Relative path is empty
    Empty,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// A path component is not valid UTF-8
    NonUtf8,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::Empty => write!(f, "Path is empty"),
            KeyError::AbsoluteNotAllowed => write!(f, "Absolute paths are not allowed"),
            KeyError::ContainsTraversal => {
                write!(f, "Path contains traversal components (..)")
            }
            KeyError::NonUtf8 => write!(f, "Path is not valid UTF-8"),
        }
    }
}

impl std::error::Error for KeyError {}

/// A validated object key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DestinationKey(String);

impl DestinationKey {
    /// Derive the key for a file at `relative` under the source root
    pub fn derive(
        application: &str,
        environment: &str,
        relative: &Path,
    ) -> Result<Self, KeyError> {
        let mut segments = Vec::new();

        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    segments.push(part.to_str().ok_or(KeyError::NonUtf8)?);
                }
                Component::CurDir => {}
                Component::ParentDir => return Err(KeyError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(KeyError::AbsoluteNotAllowed)
                }
            }
        }

        if segments.is_empty() {
            return Err(KeyError::Empty);
        }

        Ok(Self(format!(
            "{}/{}/{}",
            application,
            environment,
            segments.join("/")
        )))
    }

    /// Append a suffix (e.g. `.gz`) to the key
    pub fn with_suffix(self, suffix: &str) -> Self {
        if suffix.is_empty() {
            return self;
        }
        Self(format!("{}{}", self.0, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DestinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DestinationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
