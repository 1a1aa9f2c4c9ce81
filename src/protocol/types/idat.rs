//! IDAT chunk implementation
//!
//! IDAT carries the zlib-compressed, filtered scanlines. A stream may split
//! the zlib data across several IDAT chunks; the encoder in this crate always
//! writes a single one.

use crate::error::Result;
use crate::protocol::chunk::Chunk;

/// IDAT chunk holding compressed image data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdatChunk {
    /// zlib stream (or a slice of it)
    pub data: Vec<u8>,
}

impl IdatChunk {
    pub fn new(data: Vec<u8>) -> Self {
        IdatChunk { data }
    }
}

impl Chunk for IdatChunk {
    fn chunk_type() -> &'static str {
        "IDAT"
    }

    fn encode_content(&self) -> Result<Vec<u8>> {
        Ok(self.data.clone())
    }

    fn decode_content(data: &[u8]) -> Result<Self> {
        Ok(IdatChunk {
            data: data.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_type() {
        assert_eq!(IdatChunk::chunk_type(), "IDAT");
    }

    #[test]
    fn test_content_is_opaque() {
        let idat = IdatChunk::new(vec![0x78, 0xDA, 0x01, 0x02]);
        let encoded = idat.encode_content().unwrap();
        assert_eq!(encoded, [0x78, 0xDA, 0x01, 0x02]);
        assert_eq!(IdatChunk::decode_content(&encoded).unwrap(), idat);
    }
}
