//! PNG encoding of raw RGB buffers
//!
//! Produces a single-frame, non-interlaced, 8-bit truecolor PNG from a flat
//! interleaved `RGBRGB...` buffer. Every scanline uses filter type 0 (None)
//! and all scanlines go into one zlib stream in a single IDAT chunk.
//!
//! # Row order
//!
//! Buffers are read top row first. [`RowOrder::TopDown`] writes them in the
//! same order, so the decoded image looks like the buffer.
//! [`RowOrder::BottomUp`] writes the last buffer row first, which flips the
//! image vertically. Older display clients produced this flipped layout.
//!
//! # Examples
//!
//! ```
//! use display_client::protocol::png::{encode_png, PngEncoder, RowOrder};
//! use display_client::protocol::PNG_SIGNATURE;
//!
//! // 2x1 image: one red pixel, one blue pixel
//! let rgb = [255, 0, 0, 0, 0, 255];
//! let png = encode_png(&rgb, 2, 1)?;
//! assert_eq!(png[..8], PNG_SIGNATURE);
//!
//! let flipped = PngEncoder::new().row_order(RowOrder::BottomUp).encode(&rgb, 2, 1)?;
//! assert_eq!(png, flipped, "single-row images are orientation independent");
//! # Ok::<(), display_client::DisplayError>(())
//! ```

use crate::compression::{compress, CompressionLevel};
use crate::error::{DisplayError, Result};
use crate::protocol::chunk::{PngChunk, PNG_SIGNATURE};
use crate::protocol::types::{IdatChunk, IendChunk, IhdrChunk};
use tracing::trace;

/// Filter type byte prepended to every scanline (0 = None)
const FILTER_NONE: u8 = 0;

/// Vertical order in which buffer rows are written to the PNG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// First buffer row becomes the top of the image
    #[default]
    TopDown,
    /// Last buffer row becomes the top of the image (vertical flip)
    BottomUp,
}

/// Configurable RGB PNG encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder {
    row_order: RowOrder,
    level: CompressionLevel,
}

impl PngEncoder {
    /// Encoder with top-down rows and best compression
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertical row order
    pub fn row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    /// Set the zlib compression level (default: best)
    pub fn compression_level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    /// Encode an interleaved RGB buffer as PNG
    ///
    /// # Arguments
    ///
    /// * `rgb` - `width * height * 3` bytes, row-major, top row first, no padding
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Errors
    ///
    /// [`DisplayError::InvalidShape`] if a dimension exceeds 2^31 - 1 or the
    /// image is too large to address, [`DisplayError::InvalidSize`] if the
    /// buffer length doesn't match the dimensions.
    pub fn encode(&self, rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
        let header = IhdrChunk::rgb8(width, height);
        header.validate()?;
        let (stride, expected) = header
            .stride()
            .zip(header.image_size())
            .ok_or_else(|| {
                DisplayError::InvalidShape(format!(
                    "{}x{} image is too large to address",
                    width, height
                ))
            })?;
        if rgb.len() != expected {
            return Err(DisplayError::InvalidSize {
                expected,
                actual: rgb.len(),
            });
        }

        let scanlines = self.filtered_scanlines(rgb, stride, height as usize);
        let compressed = compress(&scanlines, self.level)?;

        trace!(
            width,
            height,
            raw_size = scanlines.len(),
            compressed_size = compressed.len(),
            row_order = ?self.row_order,
            "Encoded PNG image data"
        );

        let ihdr = PngChunk::new(header)?.encode()?;
        let idat = PngChunk::new(IdatChunk::new(compressed))?.encode()?;
        let iend = PngChunk::new(IendChunk)?.encode()?;

        let mut png =
            Vec::with_capacity(PNG_SIGNATURE.len() + ihdr.len() + idat.len() + iend.len());
        png.extend_from_slice(&PNG_SIGNATURE);
        png.extend_from_slice(&ihdr);
        png.extend_from_slice(&idat);
        png.extend_from_slice(&iend);

        Ok(png)
    }

    /// Concatenate `filter byte + row` for every row in output order
    fn filtered_scanlines(&self, rgb: &[u8], stride: usize, height: usize) -> Vec<u8> {
        let mut raw = Vec::with_capacity((stride + 1) * height);
        let mut push_row = |row: usize| {
            raw.push(FILTER_NONE);
            raw.extend_from_slice(&rgb[row * stride..(row + 1) * stride]);
        };

        match self.row_order {
            RowOrder::TopDown => (0..height).for_each(&mut push_row),
            RowOrder::BottomUp => (0..height).rev().for_each(&mut push_row),
        }

        raw
    }
}

/// Encode an RGB buffer with the default encoder (top-down, best compression)
pub fn encode_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    PngEncoder::new().encode(rgb, width, height)
}
