//! Object Header Value Objects
//!
//! Headers and access control attached to every uploaded object.

use std::fmt;
use std::path::Path;

/// Cache-Control sent with every object (ten years, immutable, public)
pub const CACHE_CONTROL: &str = "max-age=315360000, no-transform, public";

/// Content-Type used when the extension is unknown
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Canned ACL applied to uploaded objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectAcl {
    /// World-readable (`public-read`)
    #[default]
    PublicRead,
    /// Bucket default, no ACL header sent
    Private,
}

impl ObjectAcl {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectAcl::PublicRead => "public-read",
            ObjectAcl::Private => "private",
        }
    }
}

impl fmt::Display for ObjectAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP headers stored with an object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHeaders {
    pub cache_control: String,
    pub content_type: String,
    pub content_encoding: Option<String>,
}

impl ObjectHeaders {
    /// Headers for a file: fixed Cache-Control, Content-Type from the
    /// extension of `path`, and the given encoding
    pub fn for_path(path: &Path, content_encoding: Option<&str>) -> Self {
        let content_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        Self {
            cache_control: CACHE_CONTROL.to_string(),
            content_type,
            content_encoding: content_encoding.map(str::to_string),
        }
    }
}
