//! CRC-32 checksums for PNG chunks
//!
//! PNG uses the ISO-HDLC CRC-32 (polynomial 0x04C11DB7, reflected) computed
//! over the chunk type and chunk data, excluding the length field. This is
//! the same CRC zlib and gzip use, so flate2's implementation is reused.

use flate2::Crc;

/// Calculate the CRC of a chunk from its type tag and data
///
/// # Examples
///
/// ```
/// use display_client::protocol::crc::calculate_crc;
///
/// // The IEND chunk has no data and a well-known CRC
/// assert_eq!(calculate_crc(b"IEND", &[]), 0xAE42_6082);
/// ```
pub fn calculate_crc(chunk_type: &[u8], data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(chunk_type);
    crc.update(data);
    crc.sum()
}

/// Check a stored CRC against the chunk type and data
pub fn verify_crc(chunk_type: &[u8], data: &[u8], expected: u32) -> bool {
    calculate_crc(chunk_type, data) == expected
}
