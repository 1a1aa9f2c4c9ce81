//! Wire formats used by the display client
//!
//! This module contains the PNG encoder with its chunk framing, the data URI
//! wrapper, and the JSON commands understood by the display server.

pub mod chunk;
pub mod command;
pub mod crc;
pub mod data_uri;
pub mod png;
pub mod types;

// Re-export commonly used types
pub use chunk::{read_chunks, Chunk, ChunkHeader, ChunkType, PngChunk, RawChunk, PNG_SIGNATURE};
pub use command::{Command, ImageCommand, PlotCommand};
pub use crc::{calculate_crc, verify_crc};
pub use data_uri::{decode_png_data_uri, png_data_uri};
pub use png::{encode_png, PngEncoder, RowOrder};
