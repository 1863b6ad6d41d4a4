//! Error types for keydecoder
//!
//! Provides a unified error type for all decode operations.

use thiserror::Error;

/// Result type alias using DecoderError
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Unified error type for keydecoder operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecoderError {
    // -------------------------------------------------------------------------
    // Invocation Errors
    // -------------------------------------------------------------------------
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Unknown key format: {0}")]
    UnknownFormat(String),

    // -------------------------------------------------------------------------
    // Escape Errors
    // -------------------------------------------------------------------------
    #[error("Truncated escape sequence at offset {offset}")]
    TruncatedEscape { offset: usize },

    #[error("Malformed octal escape \\{text} at offset {offset}")]
    MalformedOctal { offset: usize, text: String },

    #[error("Malformed hex escape \\x{text} at offset {offset}")]
    MalformedHex { offset: usize, text: String },

    // -------------------------------------------------------------------------
    // Key Layout Errors
    // -------------------------------------------------------------------------
    #[error("Malformed {layout} key: {reason}")]
    MalformedKey {
        layout: &'static str,
        reason: String,
    },

    // -------------------------------------------------------------------------
    // Value Codec Errors
    // -------------------------------------------------------------------------
    #[error("Insufficient bytes to decode {context}: expected {expected}, got {actual}")]
    InsufficientBytes {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed bytes encoding: {0}")]
    MalformedBytesEncoding(String),

    #[error("Malformed varint: {0}")]
    MalformedVarint(&'static str),

    #[error("Malformed decimal: {0}")]
    MalformedDecimal(String),

    #[error("Unknown value tag: 0x{tag:02x}")]
    UnknownTag { tag: u8 },

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl DecoderError {
    pub(crate) fn insufficient(context: &'static str, expected: usize, actual: usize) -> Self {
        DecoderError::InsufficientBytes {
            context,
            expected,
            actual,
        }
    }
}
