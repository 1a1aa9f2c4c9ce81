//! Base64 data URIs for PNG payloads
//!
//! Images travel to the display server inline, as
//! `data:image/png;base64,<standard base64 with padding>`.

use crate::error::{DisplayError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Prefix of every PNG data URI
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Wrap PNG bytes in a data URI
///
/// # Examples
///
/// ```
/// use display_client::protocol::data_uri::png_data_uri;
///
/// assert_eq!(png_data_uri(b"PNG"), "data:image/png;base64,UE5H");
/// ```
pub fn png_data_uri(png: &[u8]) -> String {
    let mut uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png.len().div_ceil(3) * 4);
    uri.push_str(PNG_DATA_URI_PREFIX);
    STANDARD.encode_string(png, &mut uri);
    uri
}

/// Extract the PNG bytes from a data URI
pub fn decode_png_data_uri(uri: &str) -> Result<Vec<u8>> {
    let payload = uri.strip_prefix(PNG_DATA_URI_PREFIX).ok_or_else(|| {
        DisplayError::InvalidDataUri(format!(
            "expected prefix {:?}",
            PNG_DATA_URI_PREFIX
        ))
    })?;

    STANDARD
        .decode(payload)
        .map_err(|e| DisplayError::InvalidDataUri(e.to_string()))
}
