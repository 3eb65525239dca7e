//! # rowcodec - Self-Describing Binary Row Codec
//!
//! `rowcodec` turns a database row (an ordered list of named, typed columns)
//! into a compact, self-describing byte sequence and reads it back. Records
//! carry their own column names and type markers, so no schema is needed to
//! decode them, and every record is exactly as long as its content.
//!
//! - **Exact-size records**: `encoded_len` is known before any byte is written
//! - **Bounds-safe decoding**: truncated or forged input yields a typed error
//! - **Zero-copy encoding**: rows can borrow their names and payloads
//!
//! ## Quick Start
//!
//! ```
//! use rowcodec::{decode, encode, Row, Value};
//!
//! let row = Row::new()
//!     .with("UserId", 42)
//!     .with("Name", "John Doe")
//!     .with("Active", true);
//!
//! let bytes = encode(&row)?;
//! assert_eq!(bytes.len(), 52);
//!
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded, row);
//! assert_eq!(decoded.get("Name").and_then(Value::as_str), Some("John Doe"));
//! # Ok::<(), rowcodec::CodecError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (encode / explain / decode)    │
//! ├─────────────────────────────────────┤
//! │  records: encoder │ decoder │ layout │
//! ├─────────────────────────────────────┤
//! │    encoding: Cursor │ writer         │
//! ├─────────────────────────────────────┤
//! │  types: Value, Marker │ error │ config│
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Storage Integration
//!
//! The codec does no I/O. A storage layer calls `encoded_len` to allocate
//! record space, writes the bytes from `encode`, and later hands back the
//! exact slice to `decode`. Slices that only bound the record are fine:
//! `decode_prefix` reports where the row ended.
//!
//! ## Module Overview
//!
//! - [`records`]: `Row`, the encoder, the decoder, and layout inspection
//! - [`types`]: `Value` and the wire `Marker`
//! - [`encoding`]: bounds-checked `Cursor` and primitive writers
//! - [`error`]: `CodecError` with offsets and context labels
//! - [`config`]: wire sizes and limits
//! - [`cli`]: support code for the `rowcodec` binary

pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod records;
pub mod types;

pub use error::{CodecError, ErrorKind, Result};
pub use records::{
    decode, decode_into, decode_prefix, encode, encode_into, encoded_len, Column, Row,
};
pub use types::{Marker, Value};
