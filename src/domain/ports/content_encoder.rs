//! Content Encoder Port
//!
//! Compresses file bytes before upload. The encoding name is sent as the
//! object's `Content-Encoding`.

use std::io;

pub trait ContentEncoder: Send + Sync {
    /// Value for the `Content-Encoding` header (`None` for identity)
    fn encoding(&self) -> Option<&'static str>;

    fn encode(&self, data: &[u8]) -> io::Result<Vec<u8>>;
}

/// Pass-through encoder
pub struct IdentityEncoder;

impl ContentEncoder for IdentityEncoder {
    fn encoding(&self) -> Option<&'static str> {
        None
    }

    fn encode(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}
