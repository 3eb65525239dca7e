//! # Codec Errors
//!
//! Every failure carries the byte offset where it was detected and a short
//! label naming the field being read, so a corrupted record can be located
//! without re-running the decode under a debugger.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `TruncatedData` | a read needs more bytes than remain in the slice |
//! | `InvalidLength` | a length prefix is negative when read as `i32` |
//! | `UnsupportedType` | the marker byte is not part of the wire contract |
//! | `InvalidUtf8` | a name or string payload is not valid UTF-8 |
//! | `InvalidBoolean` | a boolean payload is neither 0 nor 1 |
//! | `EncodingOverflow` | a length does not fit the wire format on encode |

use thiserror::Error;

pub type Result<T, E = CodecError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("truncated {context} at offset {offset}: need {required} bytes, have {remaining}")]
    TruncatedData {
        offset: usize,
        required: usize,
        remaining: usize,
        context: &'static str,
    },

    #[error("invalid {context} length {length} at offset {offset} ({remaining} bytes remaining)")]
    InvalidLength {
        offset: usize,
        length: i64,
        remaining: usize,
        context: &'static str,
    },

    #[error("unsupported type marker 0x{marker:02X} at offset {offset}")]
    UnsupportedType { offset: usize, marker: u8 },

    #[error("invalid UTF-8 in {context} at offset {offset}")]
    InvalidUtf8 { offset: usize, context: &'static str },

    #[error("invalid boolean byte 0x{byte:02X} at offset {offset}")]
    InvalidBoolean { offset: usize, byte: u8 },

    #[error("{context} length {length} exceeds the encodable maximum of {max}")]
    EncodingOverflow {
        context: &'static str,
        length: usize,
        max: usize,
    },
}

/// Fieldless discriminant of [`CodecError`], convenient for matching and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TruncatedData,
    InvalidLength,
    UnsupportedType,
    InvalidUtf8,
    InvalidBoolean,
    EncodingOverflow,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::TruncatedData { .. } => ErrorKind::TruncatedData,
            CodecError::InvalidLength { .. } => ErrorKind::InvalidLength,
            CodecError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            CodecError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            CodecError::InvalidBoolean { .. } => ErrorKind::InvalidBoolean,
            CodecError::EncodingOverflow { .. } => ErrorKind::EncodingOverflow,
        }
    }

    /// Offset into the decoded slice where the failure was detected.
    ///
    /// `None` for encode-side failures, which have no input offset.
    pub fn offset(&self) -> Option<usize> {
        match self {
            CodecError::TruncatedData { offset, .. }
            | CodecError::InvalidLength { offset, .. }
            | CodecError::UnsupportedType { offset, .. }
            | CodecError::InvalidUtf8 { offset, .. }
            | CodecError::InvalidBoolean { offset, .. } => Some(*offset),
            CodecError::EncodingOverflow { .. } => None,
        }
    }
}
