//! zlib compression for PNG image data
//!
//! PNG stores its scanlines as a single zlib stream split across IDAT chunks.
//! This module wraps flate2's zlib encoder and decoder with the crate's
//! error type and logging.
//!
//! # Examples
//!
//! ```
//! use display_client::compression::{compress, decompress, CompressionLevel};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scanlines = vec![0u8; 10000];
//!
//! let compressed = compress(&scanlines, CompressionLevel::Best)?;
//! println!("Original: {} bytes, Compressed: {} bytes", scanlines.len(), compressed.len());
//!
//! let decompressed = decompress(&compressed)?;
//! assert_eq!(scanlines, decompressed);
//! # Ok(())
//! # }
//! ```

use crate::error::{DisplayError, Result};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};
use tracing::trace;

/// Compression level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// No compression (level 0), stored blocks only
    None,
    /// Fast compression, lower ratio (level 1)
    Fast,
    /// Default compression (level 6)
    Default,
    /// Best compression, slower (level 9)
    #[default]
    Best,
    /// Custom level (0-9)
    Custom(u32),
}

impl CompressionLevel {
    /// Convert to flate2 Compression level
    fn to_flate2(self) -> Compression {
        match self {
            Self::None => Compression::none(),
            Self::Fast => Compression::fast(),
            Self::Default => Compression::default(),
            Self::Best => Compression::best(),
            Self::Custom(level) => Compression::new(level.min(9)),
        }
    }

    /// Get numeric level value
    pub fn level(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Fast => 1,
            Self::Default => 6,
            Self::Best => 9,
            Self::Custom(level) => (*level).min(9),
        }
    }
}

/// Compress data into a zlib stream
///
/// # Arguments
///
/// * `data` - Raw data to compress
/// * `level` - Compression level
///
/// # Examples
///
/// ```
/// use display_client::compression::{compress, CompressionLevel};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = vec![0u8; 1000];
/// let compressed = compress(&data, CompressionLevel::Best)?;
/// assert!(compressed.len() < data.len());
/// # Ok(())
/// # }
/// ```
pub fn compress(data: &[u8], level: CompressionLevel) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), level.to_flate2());
    encoder.write_all(data).map_err(|e| {
        DisplayError::Io(std::io::Error::new(
            e.kind(),
            format!("zlib compression failed: {}", e),
        ))
    })?;
    let compressed = encoder.finish().map_err(|e| {
        DisplayError::Io(std::io::Error::new(
            e.kind(),
            format!("zlib compression finish failed: {}", e),
        ))
    })?;

    trace!(
        level = level.level(),
        original_size = data.len(),
        compressed_size = compressed.len(),
        "Compression completed"
    );

    Ok(compressed)
}

/// Decompress a zlib stream
///
/// # Examples
///
/// ```
/// use display_client::compression::{compress, decompress, CompressionLevel};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let original = vec![1, 2, 3, 4, 5];
/// let compressed = compress(&original, CompressionLevel::Default)?;
/// assert_eq!(decompress(&compressed)?, original);
/// # Ok(())
/// # }
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed).map_err(|e| {
        DisplayError::Io(std::io::Error::new(
            e.kind(),
            format!("zlib decompression failed: {}", e),
        ))
    })?;

    trace!(
        compressed_size = data.len(),
        decompressed_size = decompressed.len(),
        "Decompression completed"
    );

    Ok(decompressed)
}
