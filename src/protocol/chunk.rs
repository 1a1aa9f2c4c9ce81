//! PNG chunk framing
//!
//! Every PNG chunk is laid out as
//! `LENGTH (u32 BE) | TYPE (4 ASCII letters) | DATA (LENGTH bytes) | CRC (u32 BE)`,
//! where the CRC covers TYPE and DATA. A PNG stream is the 8-byte signature
//! followed by chunks.

use crate::error::{DisplayError, Result};
use crate::protocol::crc::{calculate_crc, verify_crc};
use bytes::{Buf, BufMut, BytesMut};

/// The fixed 8-byte signature that starts every PNG stream
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest chunk data length allowed by the PNG format (2^31 - 1)
pub const MAX_CHUNK_LENGTH: usize = 0x7FFF_FFFF;

/// Type-safe wrapper for a 4-letter chunk type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType([u8; 4]);

impl ChunkType {
    /// Create a chunk type from a string of exactly 4 ASCII letters
    pub fn new(name: &str) -> Result<Self> {
        let bytes: [u8; 4] = name.as_bytes().try_into().map_err(|_| {
            DisplayError::InvalidChunk(format!(
                "Chunk type must be 4 bytes, got {}",
                name.len()
            ))
        })?;
        let chunk_type = ChunkType(bytes);
        chunk_type.validate()?;
        Ok(chunk_type)
    }

    fn validate(&self) -> Result<()> {
        if self.0.iter().all(u8::is_ascii_alphabetic) {
            Ok(())
        } else {
            Err(DisplayError::InvalidChunk(format!(
                "Chunk type must be ASCII letters: {:?}",
                self.0
            )))
        }
    }

    /// Raw tag bytes as written to the stream
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Get the chunk type as a string
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.0)
            .map_err(|_| DisplayError::InvalidChunk("Invalid UTF-8 in chunk type".to_string()))
    }
}

impl From<[u8; 4]> for ChunkType {
    fn from(bytes: [u8; 4]) -> Self {
        ChunkType(bytes)
    }
}

/// Length and type fields that precede the chunk data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Size of the chunk data in bytes
    pub length: u32,
    /// Chunk type tag
    pub chunk_type: ChunkType,
}

impl ChunkHeader {
    /// Header size in bytes
    pub const SIZE: usize = 8;

    /// Decode a chunk header from a byte slice
    ///
    /// # Arguments
    /// * `buf` - Byte slice containing at least 8 bytes
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < Self::SIZE {
            return Err(DisplayError::InvalidSize {
                expected: Self::SIZE,
                actual: buf.len(),
            });
        }

        let mut cursor = std::io::Cursor::new(buf);

        let length = cursor.get_u32();

        let mut type_bytes = [0u8; 4];
        cursor.copy_to_slice(&mut type_bytes);
        let chunk_type = ChunkType::from(type_bytes);
        chunk_type.validate()?;

        Ok(ChunkHeader { length, chunk_type })
    }

    /// Encode the header into 8 bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = BytesMut::with_capacity(Self::SIZE);
        buf.put_u32(self.length);
        buf.put_slice(&self.chunk_type.0);
        buf.to_vec()
    }
}

/// Common interface for typed PNG chunks
///
/// Each chunk type (IHDR, IDAT, IEND) implements this trait to provide
/// encoding and decoding of its data field.
pub trait Chunk: Sized {
    /// Returns the 4-letter chunk type (e.g., "IHDR")
    fn chunk_type() -> &'static str;

    /// Encode chunk data to bytes (without length, type and CRC)
    fn encode_content(&self) -> Result<Vec<u8>>;

    /// Decode chunk data from bytes (without length, type and CRC)
    fn decode_content(data: &[u8]) -> Result<Self>;
}

/// A typed chunk together with its framing header
///
/// # Type Parameters
/// * `T` - Chunk type that implements the `Chunk` trait
#[derive(Debug)]
pub struct PngChunk<T: Chunk> {
    /// Length and type fields
    pub header: ChunkHeader,
    /// Chunk content
    pub content: T,
}

impl<T: Chunk> PngChunk<T> {
    /// Wrap chunk content, computing its header
    pub fn new(content: T) -> Result<Self> {
        let data = content.encode_content()?;
        if data.len() > MAX_CHUNK_LENGTH {
            return Err(DisplayError::InvalidChunk(format!(
                "{} data too long: {} bytes (max: {})",
                T::chunk_type(),
                data.len(),
                MAX_CHUNK_LENGTH
            )));
        }

        let header = ChunkHeader {
            length: data.len() as u32,
            chunk_type: ChunkType::new(T::chunk_type())?,
        };

        Ok(PngChunk { header, content })
    }

    /// Encode the complete chunk: length, type, data and CRC
    pub fn encode(&self) -> Result<Vec<u8>> {
        let data = self.content.encode_content()?;

        let mut header = self.header.clone();
        header.length = data.len() as u32;

        let mut buf = BytesMut::with_capacity(ChunkHeader::SIZE + data.len() + 4);
        buf.put_slice(&header.encode());
        buf.put_slice(&data);
        buf.put_u32(calculate_crc(header.chunk_type.as_bytes(), &data));

        Ok(buf.to_vec())
    }

    /// Decode a complete chunk, verifying its CRC and type tag
    pub fn decode(data: &[u8]) -> Result<Self> {
        let raw = RawChunk::decode(data)?;
        let content = raw.decode_as::<T>()?;
        Ok(PngChunk {
            header: raw.header,
            content,
        })
    }
}

/// An untyped chunk as read from a PNG stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
    /// Length and type fields
    pub header: ChunkHeader,
    /// Chunk data
    pub data: Vec<u8>,
    /// Stored CRC (verified on decode)
    pub crc: u32,
}

impl RawChunk {
    /// Decode one chunk from the start of `buf`
    ///
    /// Trailing bytes after the chunk are ignored; use
    /// [`encoded_len`](Self::encoded_len) to find the next chunk.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = ChunkHeader::decode(buf)?;

        let data_start = ChunkHeader::SIZE;
        let data_end = data_start + header.length as usize;
        let chunk_end = data_end + 4;
        if buf.len() < chunk_end {
            return Err(DisplayError::InvalidSize {
                expected: chunk_end,
                actual: buf.len(),
            });
        }

        let data = &buf[data_start..data_end];
        let crc = (&buf[data_end..chunk_end]).get_u32();

        if !verify_crc(header.chunk_type.as_bytes(), data, crc) {
            return Err(DisplayError::CrcMismatch {
                expected: crc,
                actual: calculate_crc(header.chunk_type.as_bytes(), data),
            });
        }

        Ok(RawChunk {
            header,
            data: data.to_vec(),
            crc,
        })
    }

    /// Size of the chunk on the wire, including header and CRC
    pub fn encoded_len(&self) -> usize {
        ChunkHeader::SIZE + self.data.len() + 4
    }

    /// Decode the data as a typed chunk, checking the type tag
    pub fn decode_as<T: Chunk>(&self) -> Result<T> {
        let actual = self.header.chunk_type.as_str()?;
        if actual != T::chunk_type() {
            return Err(DisplayError::InvalidChunk(format!(
                "Expected {} chunk, found {}",
                T::chunk_type(),
                actual
            )));
        }
        T::decode_content(&self.data)
    }
}

/// Split a PNG stream into its chunks
///
/// Verifies the signature and every chunk CRC. Parsing stops after IEND;
/// bytes after it are ignored.
///
/// # Examples
///
/// ```
/// use display_client::protocol::chunk::read_chunks;
/// use display_client::protocol::png::encode_png;
///
/// let png = encode_png(&[255, 0, 0], 1, 1)?;
/// let chunks = read_chunks(&png)?;
/// let tags: Vec<&str> = chunks
///     .iter()
///     .map(|c| c.header.chunk_type.as_str())
///     .collect::<Result<_, _>>()?;
/// assert_eq!(tags, ["IHDR", "IDAT", "IEND"]);
/// # Ok::<(), display_client::DisplayError>(())
/// ```
pub fn read_chunks(png: &[u8]) -> Result<Vec<RawChunk>> {
    if png.len() < PNG_SIGNATURE.len() || png[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        return Err(DisplayError::InvalidSignature);
    }

    let mut chunks = Vec::new();
    let mut offset = PNG_SIGNATURE.len();
    while offset < png.len() {
        let chunk = RawChunk::decode(&png[offset..])?;
        offset += chunk.encoded_len();
        let is_end = chunk.header.chunk_type.as_bytes() == b"IEND";
        chunks.push(chunk);
        if is_end {
            break;
        }
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::IendChunk;

    #[test]
    fn test_chunk_type_creation() {
        let tag = ChunkType::new("IHDR").unwrap();
        assert_eq!(tag.as_str().unwrap(), "IHDR");
        assert_eq!(ChunkType::new("tEXt").unwrap().as_bytes(), b"tEXt");
    }

    #[test]
    fn test_chunk_type_invalid() {
        assert!(ChunkType::new("IHD").is_err());
        assert!(ChunkType::new("IHDRX").is_err());
        assert!(ChunkType::new("IH1R").is_err());
    }

    #[test]
    fn test_header_encoding() {
        let header = ChunkHeader {
            length: 0x0102_0304,
            chunk_type: ChunkType::new("IDAT").unwrap(),
        };
        let encoded = header.encode();
        assert_eq!(encoded, [0x01, 0x02, 0x03, 0x04, b'I', b'D', b'A', b'T']);
        assert_eq!(ChunkHeader::decode(&encoded).unwrap(), header);
    }

    #[test]
    fn test_header_decode_short_buffer() {
        let result = ChunkHeader::decode(&[0, 0, 0]);
        assert!(matches!(result, Err(DisplayError::InvalidSize { .. })));
    }

    #[test]
    fn test_iend_bytes() {
        let chunk = PngChunk::new(IendChunk).unwrap();
        assert_eq!(
            chunk.encode().unwrap(),
            [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn test_crc_mismatch_detected() {
        let mut bytes = PngChunk::new(IendChunk).unwrap().encode().unwrap();
        bytes[11] ^= 0xFF;
        let result = RawChunk::decode(&bytes);
        assert!(matches!(
            result,
            Err(DisplayError::CrcMismatch {
                expected: 0xAE42_607D,
                actual: 0xAE42_6082
            })
        ));
    }

    #[test]
    fn test_truncated_chunk() {
        let bytes = [0, 0, 0, 5, b'I', b'D', b'A', b'T', 1, 2];
        let result = RawChunk::decode(&bytes);
        assert!(matches!(
            result,
            Err(DisplayError::InvalidSize {
                expected: 17,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_read_chunks_bad_signature() {
        assert!(matches!(
            read_chunks(b"GIF89a.."),
            Err(DisplayError::InvalidSignature)
        ));
        assert!(matches!(read_chunks(&[]), Err(DisplayError::InvalidSignature)));
    }

    #[test]
    fn test_read_chunks_stops_at_iend() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend(PngChunk::new(IendChunk).unwrap().encode().unwrap());
        png.extend_from_slice(b"trailing garbage");

        let chunks = read_chunks(&png).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].header.chunk_type.as_bytes(), b"IEND");
    }
}
