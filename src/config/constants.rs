//! # Row Codec Constants
//!
//! This module centralizes the wire-format sizes and limits used by the
//! encoder, the decoder and the inspection tooling. Constants that depend on
//! each other are co-located and their relationships are enforced through
//! compile-time assertions.
//!
//! ## Dependency Graph
//!
//! ```text
//! COLUMN_COUNT_LEN (4 bytes)
//!       │
//!       └─> EMPTY_ROW_LEN (a row with zero columns is just the count)
//!
//! LENGTH_PREFIX_LEN (4 bytes)  MARKER_LEN (1 byte)
//!       │                           │
//!       └──────────┬────────────────┘
//!                  └─> MIN_COLUMN_LEN (empty name + Null marker)
//!                        Upper bound for pre-allocating decoded columns:
//!                        a slice of N remaining bytes holds at most
//!                        N / MIN_COLUMN_LEN columns.
//!
//! MAX_FIELD_LEN (i32::MAX)
//!       │
//!       └─> Length prefixes are u32 on the wire but the decoder treats the
//!           high bit as a sign. The encoder refuses anything longer so every
//!           row it produces is decodable.
//! ```
//!
//! ## Critical Invariants
//!
//! 1. `MIN_COLUMN_LEN == LENGTH_PREFIX_LEN + MARKER_LEN`
//! 2. `MAX_FIELD_LEN <= u32::MAX` (fits the length prefix)
//! 3. Fixed payload widths match the Rust primitives they carry
//!
//! ## Usage
//!
//! ```ignore
//! use crate::config::{LENGTH_PREFIX_LEN, MARKER_LEN};
//! ```

// ============================================================================
// ROW FRAMING
// ============================================================================

/// Width of the leading column count (u32, little-endian).
pub const COLUMN_COUNT_LEN: usize = 4;

/// Width of every length prefix: column names, strings and byte arrays.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// Width of the type marker written before each value.
pub const MARKER_LEN: usize = 1;

/// Encoded size of a row without columns.
pub const EMPTY_ROW_LEN: usize = COLUMN_COUNT_LEN;

/// Smallest possible encoded column: zero-length name followed by a Null marker.
pub const MIN_COLUMN_LEN: usize = LENGTH_PREFIX_LEN + MARKER_LEN;

const _: () = assert!(
    MIN_COLUMN_LEN == LENGTH_PREFIX_LEN + MARKER_LEN,
    "MIN_COLUMN_LEN derivation mismatch"
);

// ============================================================================
// LIMITS
// ============================================================================

/// Longest name, string or byte payload the encoder accepts.
///
/// The decoder interprets length prefixes as signed, so anything above
/// `i32::MAX` would read back as a negative length.
pub const MAX_FIELD_LEN: usize = i32::MAX as usize;

/// Largest column count representable in the row header.
pub const MAX_COLUMN_COUNT: usize = u32::MAX as usize;

const _: () = assert!(
    MAX_FIELD_LEN as u64 <= u32::MAX as u64,
    "MAX_FIELD_LEN must fit the u32 length prefix"
);

// ============================================================================
// FIXED PAYLOAD WIDTHS
// ============================================================================

pub const INT32_LEN: usize = 4;
pub const INT64_LEN: usize = 8;
pub const DOUBLE_LEN: usize = 8;
pub const BOOLEAN_LEN: usize = 1;

/// DateTime payload: i64 microseconds since the Unix epoch (UTC).
pub const DATE_TIME_LEN: usize = 8;

/// Decimal payload: i128 unscaled digits followed by an i16 scale.
pub const DECIMAL_LEN: usize = 16 + 2;

pub const GUID_LEN: usize = 16;

const _: () = assert!(INT32_LEN == std::mem::size_of::<i32>());
const _: () = assert!(INT64_LEN == std::mem::size_of::<i64>());
const _: () = assert!(DOUBLE_LEN == std::mem::size_of::<f64>());
const _: () = assert!(DATE_TIME_LEN == std::mem::size_of::<i64>());
const _: () = assert!(
    DECIMAL_LEN == std::mem::size_of::<i128>() + std::mem::size_of::<i16>(),
    "DECIMAL_LEN must cover digits and scale"
);

// ============================================================================
// DISPLAY (CLI and layout inspection)
// ============================================================================

/// Bytes per line in hex dumps.
pub const HEX_DUMP_WIDTH: usize = 16;

/// Maximum rendered width of a table cell before truncation.
pub const MAX_DISPLAY_WIDTH: usize = 50;

/// Number of leading bytes shown when previewing a Bytes value.
pub const BYTES_PREVIEW_LEN: usize = 16;

const _: () = assert!(
    BYTES_PREVIEW_LEN * 2 + 3 < MAX_DISPLAY_WIDTH,
    "a bytes preview must fit a table cell"
);
