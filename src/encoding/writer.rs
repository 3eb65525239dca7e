//! # Primitive Writers
//!
//! Append-only helpers used by the row encoder. All multi-byte integers are
//! written little-endian. The encoder reserves the exact row size up front,
//! so these helpers never trigger a reallocation on the hot path.
//!
//! Length-prefixed writes check the payload against `MAX_FIELD_LEN` before
//! writing anything and report [`CodecError::EncodingOverflow`] otherwise.

use crate::config::MAX_FIELD_LEN;
use crate::error::{CodecError, Result};

#[inline]
pub fn put_u8(buf: &mut Vec<u8>, value: u8) {
    buf.push(value);
}

#[inline]
pub fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

#[inline]
pub fn put_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

#[inline]
pub fn put_i64(buf: &mut Vec<u8>, value: i64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

#[inline]
pub fn put_f64(buf: &mut Vec<u8>, value: f64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

#[inline]
pub fn put_bool(buf: &mut Vec<u8>, value: bool) {
    buf.push(u8::from(value));
}

pub fn put_decimal(buf: &mut Vec<u8>, digits: i128, scale: i16) {
    buf.extend_from_slice(&digits.to_le_bytes());
    buf.extend_from_slice(&scale.to_le_bytes());
}

/// Validates a field length and returns it as the wire prefix value.
pub fn checked_field_len(len: usize, context: &'static str) -> Result<u32> {
    if len > MAX_FIELD_LEN {
        return Err(CodecError::EncodingOverflow {
            context,
            length: len,
            max: MAX_FIELD_LEN,
        });
    }
    u32::try_from(len).map_err(|_| CodecError::EncodingOverflow {
        context,
        length: len,
        max: MAX_FIELD_LEN,
    })
}

/// Writes a u32 length prefix followed by the raw bytes.
pub fn put_len_prefixed(buf: &mut Vec<u8>, bytes: &[u8], context: &'static str) -> Result<()> {
    let len = checked_field_len(bytes.len(), context)?;
    put_u32(buf, len);
    buf.extend_from_slice(bytes);
    Ok(())
}
