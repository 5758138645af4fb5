//! Gzip Content Encoder
//!
//! Implements the ContentEncoder port with `flate2`.

use std::io::{self, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::domain::ports::ContentEncoder;

/// Gzip encoder, `Content-Encoding: gzip`
#[derive(Debug, Clone, Copy)]
pub struct GzipEncoder {
    level: Compression,
}

impl Default for GzipEncoder {
    fn default() -> Self {
        Self {
            level: Compression::best(),
        }
    }
}

impl ContentEncoder for GzipEncoder {
    fn encoding(&self) -> Option<&'static str> {
        Some("gzip")
    }

    fn encode(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2), self.level);
        encoder.write_all(data)?;
        encoder.finish()
    }
}
