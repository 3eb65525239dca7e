//! # Row Decoder
//!
//! Reconstructs a [`Row`] from its wire form. Input is untrusted: the bytes
//! come from disk, the network, or a fuzzer, and every read goes through a
//! bounds-checked [`Cursor`].
//!
//! ## Decode Flow
//!
//! ```text
//! column_count ──► for each column:
//!                    name_len ─► name ─► marker ─► payload
//!                                          │
//!                                          └─ unknown ─► UnsupportedType
//! ```
//!
//! Variable-length payloads are validated in two stages. The prefix is read
//! as `i32` and a negative value fails with `InvalidLength`; a non-negative
//! value larger than the bytes left fails with `TruncatedData`. Only then are
//! the bytes copied.
//!
//! ## Allocation Bound
//!
//! The column count is attacker controlled. The initial column capacity is
//! `min(count, remaining / MIN_COLUMN_LEN)` since no column can be smaller
//! than a zero-length name plus a marker.
//!
//! ## Failure
//!
//! Decoding stops at the first error. The partially built row is dropped,
//! and `decode_into` leaves the caller's row empty.

use std::borrow::Cow;

use crate::config::MIN_COLUMN_LEN;
use crate::encoding::Cursor;
use crate::error::{CodecError, Result};
use crate::records::row::{Column, Row};
use crate::types::{Marker, Value};

/// Decodes one row from the front of `data`. Trailing bytes are ignored.
pub fn decode(data: &[u8]) -> Result<Row<'static>> {
    decode_prefix(data).map(|(row, _)| row)
}

/// Decodes one row and returns it with the number of bytes it occupied.
pub fn decode_prefix(data: &[u8]) -> Result<(Row<'static>, usize)> {
    let mut row = Row::new();
    let consumed = decode_into(data, &mut row)?;
    Ok((row, consumed))
}

/// Decodes into an existing row, reusing its column storage.
///
/// `out` is cleared first. On error it is cleared again, so it never holds a
/// partial row.
pub fn decode_into(data: &[u8], out: &mut Row<'static>) -> Result<usize> {
    out.clear();
    let mut cursor = Cursor::new(data);

    match read_row(&mut cursor, out) {
        Ok(()) => {
            tracing::trace!(
                columns = out.len(),
                bytes = cursor.offset(),
                "decoded row"
            );
            Ok(cursor.offset())
        }
        Err(e) => {
            out.clear();
            tracing::debug!(
                offset = e.offset(),
                kind = ?e.kind(),
                input_len = data.len(),
                error = %e,
                "row decode failed"
            );
            Err(e)
        }
    }
}

fn read_row(cursor: &mut Cursor<'_>, out: &mut Row<'static>) -> Result<()> {
    let count = cursor.read_u32("column count")? as usize;
    out.reserve(count.min(cursor.remaining() / MIN_COLUMN_LEN));

    for _ in 0..count {
        let name = cursor.read_str("column name")?;
        let marker = read_marker(cursor)?;
        let value = read_payload(cursor, marker)?;
        out.push_column(Column {
            name: Cow::Owned(name.to_owned()),
            value: value.into_owned(),
        });
    }
    Ok(())
}

/// Reads a marker byte, rejecting values outside the wire contract.
pub(crate) fn read_marker(cursor: &mut Cursor<'_>) -> Result<Marker> {
    let offset = cursor.offset();
    let byte = cursor.read_u8("type marker")?;
    Marker::from_byte(byte).ok_or(CodecError::UnsupportedType {
        offset,
        marker: byte,
    })
}

/// Reads the payload for `marker`. Strings and bytes borrow from the input.
pub(crate) fn read_payload<'a>(cursor: &mut Cursor<'a>, marker: Marker) -> Result<Value<'a>> {
    let value = match marker {
        Marker::Null => Value::Null,
        Marker::Int32 => Value::Int32(cursor.read_i32("int32")?),
        Marker::Int64 => Value::Int64(cursor.read_i64("int64")?),
        Marker::Double => Value::Double(cursor.read_f64("double")?),
        Marker::Boolean => Value::Boolean(cursor.read_bool()?),
        Marker::DateTime => Value::DateTime(cursor.read_date_time()?),
        Marker::String => Value::String(Cow::Borrowed(cursor.read_str("string")?)),
        Marker::Bytes => Value::Bytes(Cow::Borrowed(cursor.read_bytes("bytes")?)),
        Marker::Decimal => {
            let (digits, scale) = cursor.read_decimal()?;
            Value::Decimal { digits, scale }
        }
        Marker::Guid => Value::Guid(cursor.read_guid()?),
    };
    Ok(value)
}
