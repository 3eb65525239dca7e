//! # Value Model
//!
//! This module defines what a row column can hold and how each variant is
//! identified on the wire.
//!
//! ## Module Structure
//!
//! - `marker`: `Marker`, the one-byte wire tag of each variant
//! - `value`: `Value<'a>`, the tagged union with zero-copy text and bytes
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `Marker` | Wire discriminant and fixed payload widths |
//! | `Value<'a>` | Column value, borrowed or owned |
//!
//! ## Usage
//!
//! ```
//! use rowcodec::types::{Marker, Value};
//!
//! let small = Value::integer(42);
//! assert_eq!(small.marker(), Marker::Int32);
//!
//! let large = Value::integer(1 << 40);
//! assert_eq!(large.marker(), Marker::Int64);
//! ```

mod marker;
mod value;

pub use marker::Marker;
pub use value::Value;
