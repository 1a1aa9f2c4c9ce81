//! Error types for display client operations
//!
//! This module defines all error types that can occur while preparing and
//! sending display commands: array shape validation, normalization, PNG
//! encoding and parsing, option validation, and HTTP transport.

use thiserror::Error;

/// Display client error types
///
/// All operations in this library return `Result<T, DisplayError>` to provide
/// explicit error handling. Every error aborts the current call; nothing is
/// retried or swallowed.
#[derive(Error, Debug)]
pub enum DisplayError {
    /// Array dimensions or data length are inconsistent
    ///
    /// This error occurs when:
    /// - The shape has fewer than 2 or more than 3 dimensions
    /// - The data length doesn't match the product of the shape
    ///
    /// # Example
    /// ```no_run
    /// # use display_client::error::DisplayError;
    /// let err = DisplayError::InvalidShape("expected 2 or 3 dimensions, got 4".to_string());
    /// ```
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Channel count is neither grayscale nor RGB
    ///
    /// Only 1-channel and 3-channel arrays can be turned into an RGB image.
    ///
    /// # Example
    /// ```no_run
    /// # use display_client::error::DisplayError;
    /// let err = DisplayError::UnsupportedShape { channels: 2 };
    /// ```
    #[error("Unsupported image shape: {channels} channels (expected 1 or 3)")]
    UnsupportedShape {
        /// Size of the channel axis
        channels: usize,
    },

    /// Buffer size doesn't match the declared dimensions
    ///
    /// This error occurs when:
    /// - The RGB buffer passed to the PNG encoder is not `width * height * 3` bytes
    /// - A PNG stream or chunk is truncated
    ///
    /// # Example
    /// ```no_run
    /// # use display_client::error::DisplayError;
    /// let err = DisplayError::InvalidSize {
    ///     expected: 12,
    ///     actual: 9,
    /// };
    /// ```
    #[error("Invalid size: expected {expected}, got {actual}")]
    InvalidSize {
        /// Expected size in bytes
        expected: usize,
        /// Actual size in bytes
        actual: usize,
    },

    /// Normalization bounds are equal or not finite, so values cannot be scaled
    #[error("Invalid normalization range [{min}, {max}]")]
    DegenerateRange {
        /// Lower bound used for scaling
        min: f64,
        /// Upper bound used for scaling
        max: f64,
    },

    /// A command option was rejected at the boundary
    ///
    /// # Example
    /// ```no_run
    /// # use display_client::error::DisplayError;
    /// let err = DisplayError::InvalidOption("'file' is reserved for plot rows".to_string());
    /// ```
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Stream doesn't start with the 8-byte PNG signature
    #[error("Invalid PNG signature")]
    InvalidSignature,

    /// Malformed PNG chunk
    ///
    /// This error occurs when:
    /// - The chunk type contains characters other than ASCII letters
    /// - A typed chunk is decoded from a chunk with a different tag
    /// - Chunk content has the wrong length for its type
    #[error("Invalid chunk: {0}")]
    InvalidChunk(String),

    /// CRC32 checksum mismatch in a PNG chunk
    ///
    /// The stored CRC covers the chunk type and chunk data. A mismatch means
    /// the stream was corrupted.
    ///
    /// # Example
    /// ```no_run
    /// # use display_client::error::DisplayError;
    /// let err = DisplayError::CrcMismatch {
    ///     expected: 0xAE426082,
    ///     actual: 0xAE426083,
    /// };
    /// ```
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CrcMismatch {
        /// CRC stored in the chunk
        expected: u32,
        /// CRC calculated from chunk type and data
        actual: u32,
    },

    /// Text is not a base64 PNG data URI
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Serialized command exceeds the configured body limit
    ///
    /// The reference display server rejects request bodies above 4 MiB, so
    /// the client refuses to send them.
    #[error("Request body too large: {size} bytes (max: {max})")]
    BodyTooLarge {
        /// Serialized body size in bytes
        size: usize,
        /// Maximum allowed size in bytes
        max: usize,
    },

    /// Display server answered with a non-success status
    #[error("Display server returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// HTTP transport failure (connection refused, DNS failure, timeout)
    ///
    /// The underlying error is passed through unchanged.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error, raised by the zlib compressor
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operation is not implemented
    ///
    /// Returned by [`DisplayClient::images`](crate::io::DisplayClient::images),
    /// since composing several images into one canvas is not supported.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

/// Result type alias for display client operations
pub type Result<T> = std::result::Result<T, DisplayError>;
