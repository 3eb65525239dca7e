//! # Bounds-Checked Read Cursor
//!
//! `Cursor` is the only way the decoder touches input bytes. It pairs a
//! borrowed slice with a read offset and exposes one method per primitive
//! the wire format uses.
//!
//! ## Read Contract
//!
//! Every read first checks that the bytes it needs are still available and
//! returns [`CodecError::TruncatedData`] otherwise. Nothing is consumed and
//! the offset does not move when a check fails, so the error always reports
//! the position of the field that could not be read.
//!
//! ```text
//!   data: [ .. consumed .. | .. remaining .. ]
//!                          ^ offset
//!   read_*(n): remaining >= n ? advance : TruncatedData { offset, n, remaining }
//! ```
//!
//! ## Length Prefixes
//!
//! `read_length` applies two checks to a length prefix before anything is
//! allocated or copied:
//!
//! 1. The prefix read as `i32` must not be negative (`InvalidLength`).
//! 2. The declared length must fit in the remaining bytes (`TruncatedData`).
//!
//! Callers therefore never size an allocation from an unchecked length.
//!
//! ## Thread Safety
//!
//! A cursor is created per decode call and owned by it; it is never shared.

use crate::config::{BOOLEAN_LEN, DECIMAL_LEN, GUID_LEN};
use crate::error::{CodecError, Result};

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    pub fn ensure_remaining(&self, required: usize, context: &'static str) -> Result<()> {
        let remaining = self.remaining();
        if required > remaining {
            return Err(CodecError::TruncatedData {
                offset: self.offset,
                required,
                remaining,
                context,
            });
        }
        Ok(())
    }

    /// Consumes `len` bytes and returns them as a borrowed slice.
    pub fn take(&mut self, len: usize, context: &'static str) -> Result<&'a [u8]> {
        self.ensure_remaining(len, context)?;
        let start = self.offset;
        self.offset += len;
        Ok(&self.data[start..self.offset])
    }

    #[inline]
    fn take_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, context)?);
        Ok(out)
    }

    pub fn read_u8(&mut self, context: &'static str) -> Result<u8> {
        Ok(self.take_array::<1>(context)?[0])
    }

    pub fn read_u32(&mut self, context: &'static str) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take_array(context)?))
    }

    pub fn read_i32(&mut self, context: &'static str) -> Result<i32> {
        Ok(i32::from_le_bytes(self.take_array(context)?))
    }

    pub fn read_i64(&mut self, context: &'static str) -> Result<i64> {
        Ok(i64::from_le_bytes(self.take_array(context)?))
    }

    pub fn read_f64(&mut self, context: &'static str) -> Result<f64> {
        Ok(f64::from_le_bytes(self.take_array(context)?))
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        let offset = self.offset;
        let byte = self.take_array::<BOOLEAN_LEN>("boolean")?[0];
        match byte {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(CodecError::InvalidBoolean { offset, byte }),
        }
    }

    pub fn read_guid(&mut self) -> Result<[u8; GUID_LEN]> {
        self.take_array("guid")
    }

    pub fn read_date_time(&mut self) -> Result<i64> {
        self.read_i64("datetime")
    }

    /// Reads a decimal as `(digits, scale)`.
    pub fn read_decimal(&mut self) -> Result<(i128, i16)> {
        self.ensure_remaining(DECIMAL_LEN, "decimal")?;
        let digits = i128::from_le_bytes(self.take_array("decimal")?);
        let scale = i16::from_le_bytes(self.take_array("decimal")?);
        Ok((digits, scale))
    }

    /// Reads a length prefix and validates it against the remaining bytes.
    pub fn read_length(&mut self, context: &'static str) -> Result<usize> {
        let offset = self.offset;
        let length = self.read_i32(context)?;
        let Ok(length) = usize::try_from(length) else {
            return Err(CodecError::InvalidLength {
                offset,
                length: i64::from(length),
                remaining: self.remaining(),
                context,
            });
        };
        self.ensure_remaining(length, context)?;
        Ok(length)
    }

    /// Reads a length-prefixed byte run without copying it.
    pub fn read_bytes(&mut self, context: &'static str) -> Result<&'a [u8]> {
        let len = self.read_length(context)?;
        self.take(len, context)
    }

    /// Reads a length-prefixed UTF-8 string without copying it.
    pub fn read_str(&mut self, context: &'static str) -> Result<&'a str> {
        let len = self.read_length(context)?;
        let start = self.offset;
        let bytes = self.take(len, context)?;
        std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 {
            offset: start,
            context,
        })
    }

    pub fn read_string(&mut self, context: &'static str) -> Result<String> {
        self.read_str(context).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn fixed_reads_advance_offset() {
        let mut data = Vec::new();
        data.extend_from_slice(&7u32.to_le_bytes());
        data.extend_from_slice(&(-3i64).to_le_bytes());
        data.extend_from_slice(&1.5f64.to_le_bytes());

        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_u32("count").unwrap(), 7);
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.read_i64("int64").unwrap(), -3);
        assert_eq!(cursor.read_f64("double").unwrap(), 1.5);
        assert!(cursor.is_empty());
    }

    #[test]
    fn short_read_reports_position_and_does_not_advance() {
        let data = [1u8, 2, 3];
        let mut cursor = Cursor::new(&data);
        cursor.read_u8("marker").unwrap();

        let err = cursor.read_u32("int32").unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedData {
                offset: 1,
                required: 4,
                remaining: 2,
                context: "int32",
            }
        );
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn read_on_empty_slice_is_truncated() {
        let mut cursor = Cursor::new(&[]);
        assert_eq!(
            cursor.read_u8("marker").unwrap_err().kind(),
            ErrorKind::TruncatedData
        );
        assert_eq!(cursor.read_guid().unwrap_err().kind(), ErrorKind::TruncatedData);
    }

    #[test]
    fn bool_accepts_only_zero_and_one() {
        let mut cursor = Cursor::new(&[0, 1, 2]);
        assert!(!cursor.read_bool().unwrap());
        assert!(cursor.read_bool().unwrap());
        assert_eq!(
            cursor.read_bool().unwrap_err(),
            CodecError::InvalidBoolean { offset: 2, byte: 2 }
        );
    }

    #[test]
    fn negative_length_is_invalid() {
        let data = (-1i32).to_le_bytes();
        let mut cursor = Cursor::new(&data);
        let err = cursor.read_bytes("bytes").unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidLength {
                offset: 0,
                length: -1,
                remaining: 0,
                context: "bytes",
            }
        );
    }

    #[test]
    fn length_beyond_buffer_is_truncated_before_copy() {
        let mut data = Vec::new();
        data.extend_from_slice(&(i32::MAX as u32).to_le_bytes());
        data.extend_from_slice(b"abc");

        let mut cursor = Cursor::new(&data);
        let err = cursor.read_str("string").unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedData {
                offset: 4,
                required: i32::MAX as usize,
                remaining: 3,
                context: "string",
            }
        );
    }

    #[test]
    fn read_str_borrows_from_input() {
        let mut data = Vec::new();
        data.extend_from_slice(&5u32.to_le_bytes());
        data.extend_from_slice("Café".as_bytes());

        let mut cursor = Cursor::new(&data);
        let s = cursor.read_str("string").unwrap();
        assert_eq!(s, "Café");
        assert!(std::ptr::eq(s.as_ptr(), data[4..].as_ptr()));
    }

    #[test]
    fn invalid_utf8_points_at_payload() {
        let mut data = Vec::new();
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&[0xC3, 0x28]);

        let mut cursor = Cursor::new(&data);
        assert_eq!(
            cursor.read_str("column name").unwrap_err(),
            CodecError::InvalidUtf8 {
                offset: 4,
                context: "column name",
            }
        );
    }

    #[test]
    fn decimal_reads_digits_then_scale() {
        let mut data = Vec::new();
        data.extend_from_slice(&(-12345i128).to_le_bytes());
        data.extend_from_slice(&2i16.to_le_bytes());

        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_decimal().unwrap(), (-12345, 2));
        assert!(cursor.is_empty());
    }

    #[test]
    fn truncated_decimal_consumes_nothing() {
        let data = [0u8; 17];
        let mut cursor = Cursor::new(&data);
        let err = cursor.read_decimal().unwrap_err();
        assert_eq!(err.offset(), Some(0));
        assert_eq!(cursor.offset(), 0);
    }
}
