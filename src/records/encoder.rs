//! # Row Encoder
//!
//! Serializes a [`Row`] into its self-describing wire form:
//!
//! ```text
//! Row    := [column_count: u32] [Column]*
//! Column := [name_len: u32] [name: utf8] [marker: u8] [payload]
//! ```
//!
//! ## Size
//!
//! The encoded size is known before a single byte is written:
//!
//! ```text
//! 4 + Σ (4 + name_len + 1 + payload_len)
//! ```
//!
//! `encoded_len` returns it so a storage layer can allocate record space
//! first, and `encode` reserves exactly that much. There is no padding or
//! slack, and the same row always produces the same bytes.
//!
//! ## Canonical Integers
//!
//! An `Int64` whose value fits in `i32` is written with the `Int32` marker.
//! Together with `Value::integer` this gives every row a single encoding.

use crate::config::{EMPTY_ROW_LEN, MAX_COLUMN_COUNT};
use crate::encoding::writer::{
    checked_field_len, put_bool, put_decimal, put_f64, put_i32, put_i64, put_len_prefixed,
    put_u32, put_u8,
};
use crate::error::{CodecError, Result};
use crate::records::row::Row;
use crate::types::Value;

/// Exact number of bytes `encode` will produce for `row`.
pub fn encoded_len(row: &Row<'_>) -> Result<usize> {
    column_count(row)?;

    let mut size = EMPTY_ROW_LEN;
    for column in row {
        checked_field_len(column.name.len(), "column name")?;
        check_value_len(&column.value)?;
        size = size
            .checked_add(column.encoded_len())
            .ok_or(CodecError::EncodingOverflow {
                context: "row",
                length: usize::MAX,
                max: usize::MAX,
            })?;
    }
    Ok(size)
}

/// Encodes `row` into a new, exactly sized buffer.
pub fn encode(row: &Row<'_>) -> Result<Vec<u8>> {
    let size = encoded_len(row)?;
    let mut buf = Vec::with_capacity(size);
    write_row(row, &mut buf)?;
    debug_assert_eq!(buf.len(), size);
    tracing::trace!(columns = row.len(), bytes = size, "encoded row");
    Ok(buf)
}

/// Appends the encoding of `row` to `buf` and returns the number of bytes written.
///
/// On error `buf` is restored to its original length.
pub fn encode_into(row: &Row<'_>, buf: &mut Vec<u8>) -> Result<usize> {
    let size = encoded_len(row)?;
    let start = buf.len();
    buf.reserve(size);
    if let Err(e) = write_row(row, buf) {
        buf.truncate(start);
        return Err(e);
    }
    debug_assert_eq!(buf.len() - start, size);
    Ok(size)
}

fn column_count(row: &Row<'_>) -> Result<u32> {
    if row.len() > MAX_COLUMN_COUNT {
        return Err(CodecError::EncodingOverflow {
            context: "column count",
            length: row.len(),
            max: MAX_COLUMN_COUNT,
        });
    }
    u32::try_from(row.len()).map_err(|_| CodecError::EncodingOverflow {
        context: "column count",
        length: row.len(),
        max: MAX_COLUMN_COUNT,
    })
}

fn check_value_len(value: &Value<'_>) -> Result<()> {
    match value {
        Value::String(s) => checked_field_len(s.len(), "string").map(|_| ()),
        Value::Bytes(b) => checked_field_len(b.len(), "bytes").map(|_| ()),
        _ => Ok(()),
    }
}

fn write_row(row: &Row<'_>, buf: &mut Vec<u8>) -> Result<()> {
    put_u32(buf, column_count(row)?);

    for column in row {
        put_len_prefixed(buf, column.name.as_bytes(), "column name")?;
        write_value(&column.value, buf)?;
    }
    Ok(())
}

fn write_value(value: &Value<'_>, buf: &mut Vec<u8>) -> Result<()> {
    put_u8(buf, value.marker().as_byte());

    match value {
        Value::Null => {}
        Value::Int32(v) => put_i32(buf, *v),
        Value::Int64(v) => match i32::try_from(*v) {
            Ok(narrow) => put_i32(buf, narrow),
            Err(_) => put_i64(buf, *v),
        },
        Value::Double(v) => put_f64(buf, *v),
        Value::Boolean(v) => put_bool(buf, *v),
        Value::DateTime(micros) => put_i64(buf, *micros),
        Value::String(s) => put_len_prefixed(buf, s.as_bytes(), "string")?,
        Value::Bytes(b) => put_len_prefixed(buf, b, "bytes")?,
        Value::Decimal { digits, scale } => put_decimal(buf, *digits, *scale),
        Value::Guid(g) => buf.extend_from_slice(g),
    }

    Ok(())
}
