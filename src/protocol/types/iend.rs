//! IEND chunk implementation
//!
//! IEND marks the end of the PNG stream and has no data.

use crate::error::{DisplayError, Result};
use crate::protocol::chunk::Chunk;

/// IEND chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IendChunk;

impl Chunk for IendChunk {
    fn chunk_type() -> &'static str {
        "IEND"
    }

    fn encode_content(&self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn decode_content(data: &[u8]) -> Result<Self> {
        if !data.is_empty() {
            return Err(DisplayError::InvalidSize {
                expected: 0,
                actual: data.len(),
            });
        }
        Ok(IendChunk)
    }
}
