//! # Self-Describing Row Records
//!
//! A row is stored as a column count followed by each column's name, a one
//! byte type marker, and the value payload. No schema is needed to read it
//! back: the marker tells the decoder how many bytes follow.
//!
//! ## Record Binary Layout
//!
//! ```text
//! +--------------+-----------------------------------------------------+
//! | Column Count | Column 0 ... Column N-1                             |
//! | (u32 LE)     |                                                     |
//! +--------------+-----------------------------------------------------+
//!
//! Column:
//! +--------------+-------------+----------+---------------------------+
//! | Name Length  | Name        | Marker   | Payload                   |
//! | (u32 LE)     | (UTF-8)     | (u8)     | (depends on marker)       |
//! +--------------+-------------+----------+---------------------------+
//! ```
//!
//! | Marker | Type | Payload |
//! |--------|------|---------|
//! | 0 | Null | none |
//! | 1 | Int32 | 4 bytes, `i32` LE |
//! | 2 | Int64 | 8 bytes, `i64` LE |
//! | 3 | Double | 8 bytes, IEEE-754 `f64` LE |
//! | 4 | Boolean | 1 byte, 0 or 1 |
//! | 5 | DateTime | 8 bytes, `i64` LE microseconds since the Unix epoch (UTC) |
//! | 6 | String | `u32` LE length + UTF-8 bytes |
//! | 7 | Bytes | `u32` LE length + raw bytes |
//! | 8 | Decimal | 16 bytes `i128` LE digits + 2 bytes `i16` LE scale |
//! | 9 | Guid | 16 raw bytes |
//!
//! ## Design Goals
//!
//! 1. **Exact size**: a record is as long as its content, with no padding
//! 2. **Self-describing**: every value carries its own type marker
//! 3. **Bounds-safe decode**: malformed input yields an error, never a panic
//! 4. **Deterministic**: equal rows always encode to identical bytes
//!
//! ## Module Structure
//!
//! - `row`: `Row` and `Column`, the in-memory representation
//! - `encoder`: `encode`, `encode_into`, `encoded_len`
//! - `decoder`: `decode`, `decode_prefix`, `decode_into`
//! - `layout`: segment breakdown and hex dumps of encoded rows

pub mod decoder;
pub mod encoder;
pub mod layout;
pub mod row;


pub use decoder::{decode, decode_into, decode_prefix};
pub use encoder::{encode, encode_into, encoded_len};
pub use layout::{describe, explain, hex_dump, Segment, SegmentKind};
pub use row::{Column, Row, INLINE_COLUMNS};
