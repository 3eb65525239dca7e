//! # Encoding Module
//!
//! Primitive byte-level codecs shared by the row encoder and decoder:
//!
//! - **Cursor**: bounds-checked, little-endian reads over a borrowed slice
//! - **Writer**: little-endian appends with length-prefix overflow checks

pub mod cursor;
pub mod writer;

pub use cursor::Cursor;
