//! IHDR chunk implementation
//!
//! The image header is the first chunk of every PNG stream. It fixes the
//! image dimensions and the pixel format for everything that follows.

use crate::error::{DisplayError, Result};
use crate::protocol::chunk::Chunk;
use bytes::{Buf, BufMut};

/// Largest width or height an IHDR may carry (2^31 - 1)
pub const MAX_DIMENSION: u32 = 0x7FFF_FFFF;

/// PNG color type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorType {
    Grayscale = 0,
    Rgb = 2,
    Indexed = 3,
    GrayscaleAlpha = 4,
    Rgba = 6,
}

impl ColorType {
    /// Number of samples per pixel
    pub fn channels(&self) -> usize {
        match self {
            ColorType::Grayscale | ColorType::Indexed => 1,
            ColorType::GrayscaleAlpha => 2,
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        }
    }

    /// Create from the IHDR color type byte
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ColorType::Grayscale),
            2 => Ok(ColorType::Rgb),
            3 => Ok(ColorType::Indexed),
            4 => Ok(ColorType::GrayscaleAlpha),
            6 => Ok(ColorType::Rgba),
            _ => Err(DisplayError::InvalidChunk(format!(
                "Unknown color type: {}",
                value
            ))),
        }
    }
}

/// IHDR chunk
///
/// # PNG Specification
/// - Chunk type: "IHDR"
/// - Data: WIDTH (u32) + HEIGHT (u32) + BIT_DEPTH (u8) + COLOR_TYPE (u8) +
///   COMPRESSION (u8) + FILTER (u8) + INTERLACE (u8)
/// - Data size: 13 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IhdrChunk {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Bits per sample
    pub bit_depth: u8,
    /// Pixel layout
    pub color_type: ColorType,
    /// Compression method (0 = zlib deflate)
    pub compression_method: u8,
    /// Filter method (0 = adaptive, five filter types)
    pub filter_method: u8,
    /// Interlace method (0 = none)
    pub interlace_method: u8,
}

impl IhdrChunk {
    /// Data size in bytes
    pub const SIZE: usize = 13;

    /// Header for a non-interlaced 8-bit truecolor image
    pub fn rgb8(width: u32, height: u32) -> Self {
        IhdrChunk {
            width,
            height,
            bit_depth: 8,
            color_type: ColorType::Rgb,
            compression_method: 0,
            filter_method: 0,
            interlace_method: 0,
        }
    }

    /// Bytes in one unfiltered scanline (without the filter byte)
    ///
    /// `None` if the scanline length overflows `usize`.
    pub fn stride(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.color_type.channels())?
            .checked_mul(self.bit_depth as usize)
            .map(|bits| bits.div_ceil(8))
    }

    /// Bytes of unfiltered pixel data, excluding filter bytes
    pub fn image_size(&self) -> Option<usize> {
        self.stride()?.checked_mul(self.height as usize)
    }

    /// Check the dimensions against the PNG limit
    pub fn validate(&self) -> Result<()> {
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(DisplayError::InvalidShape(format!(
                "PNG dimensions {}x{} exceed {}",
                self.width, self.height, MAX_DIMENSION
            )));
        }
        Ok(())
    }
}

impl Chunk for IhdrChunk {
    fn chunk_type() -> &'static str {
        "IHDR"
    }

    fn encode_content(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(Self::SIZE);
        buf.put_u32(self.width);
        buf.put_u32(self.height);
        buf.put_u8(self.bit_depth);
        buf.put_u8(self.color_type as u8);
        buf.put_u8(self.compression_method);
        buf.put_u8(self.filter_method);
        buf.put_u8(self.interlace_method);
        Ok(buf)
    }

    fn decode_content(mut data: &[u8]) -> Result<Self> {
        if data.len() != Self::SIZE {
            return Err(DisplayError::InvalidSize {
                expected: Self::SIZE,
                actual: data.len(),
            });
        }

        let width = data.get_u32();
        let height = data.get_u32();
        let bit_depth = data.get_u8();
        let color_type = ColorType::from_u8(data.get_u8())?;
        let compression_method = data.get_u8();
        let filter_method = data.get_u8();
        let interlace_method = data.get_u8();

        Ok(IhdrChunk {
            width,
            height,
            bit_depth,
            color_type,
            compression_method,
            filter_method,
            interlace_method,
        })
    }
}
