//! # Layout Inspection
//!
//! Breaks an encoded row into its wire segments so a record can be read by a
//! human: where each field starts, how many bytes it takes, and what it holds.
//!
//! ```text
//! offset  size  kind         description
//! ------  ----  -----------  ------------------------------
//!      0     4  ColumnCount  column count = 1
//!      4     4  NameLength   name length (column 'Id') = 2
//!      8     2  Name         column name 'Id'
//!     10     1  Marker       type marker = 1 (Int32)
//!     11     4  Payload      Int32 value = 42
//! ```
//!
//! `describe` walks the bytes with the same bounds-checked cursor and payload
//! readers the decoder uses, so it fails at the same offset with the same
//! error for a malformed row. Every byte of a valid row belongs to exactly
//! one segment, and segments are returned in offset order.

use std::fmt::{self, Write};

use crate::config::{HEX_DUMP_WIDTH, MIN_COLUMN_LEN};
use crate::encoding::Cursor;
use crate::error::Result;
use crate::records::decoder::{read_marker, read_payload};
use crate::records::encoder::encode;
use crate::records::row::Row;
use crate::types::{Marker, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    ColumnCount,
    NameLength,
    Name,
    Marker,
    Payload,
}

impl SegmentKind {
    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::ColumnCount => "ColumnCount",
            SegmentKind::NameLength => "NameLength",
            SegmentKind::Name => "Name",
            SegmentKind::Marker => "Marker",
            SegmentKind::Payload => "Payload",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One field of an encoded row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub offset: usize,
    pub len: usize,
    pub kind: SegmentKind,
    /// Index of the owning column; `None` for the column count.
    pub column: Option<usize>,
    pub description: String,
}

impl Segment {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The segment's bytes as space-separated uppercase hex.
    ///
    /// Returns an empty string if `data` is shorter than the segment.
    pub fn hex(&self, data: &[u8]) -> String {
        data.get(self.offset..self.end())
            .map(hex_spaced)
            .unwrap_or_default()
    }
}

/// Splits an encoded row into segments.
pub fn describe(data: &[u8]) -> Result<Vec<Segment>> {
    let mut cursor = Cursor::new(data);
    let count = cursor.read_u32("column count")? as usize;

    let mut segments = Vec::with_capacity(1 + 4 * count.min(cursor.remaining() / MIN_COLUMN_LEN));
    segments.push(Segment {
        offset: 0,
        len: cursor.offset(),
        kind: SegmentKind::ColumnCount,
        column: None,
        description: format!("column count = {count}"),
    });

    for index in 0..count {
        let start = cursor.offset();
        let name = cursor.read_str("column name")?;
        let name_start = cursor.offset() - name.len();
        segments.push(Segment {
            offset: start,
            len: name_start - start,
            kind: SegmentKind::NameLength,
            column: Some(index),
            description: format!("name length (column '{name}') = {}", name.len()),
        });
        segments.push(Segment {
            offset: name_start,
            len: name.len(),
            kind: SegmentKind::Name,
            column: Some(index),
            description: format!("column name '{name}'"),
        });

        let marker_offset = cursor.offset();
        let marker = read_marker(&mut cursor)?;
        segments.push(Segment {
            offset: marker_offset,
            len: cursor.offset() - marker_offset,
            kind: SegmentKind::Marker,
            column: Some(index),
            description: format!("type marker = {} ({marker})", marker.as_byte()),
        });

        let payload_offset = cursor.offset();
        let value = read_payload(&mut cursor, marker)?;
        segments.push(Segment {
            offset: payload_offset,
            len: cursor.offset() - payload_offset,
            kind: SegmentKind::Payload,
            column: Some(index),
            description: describe_value(marker, &value),
        });
    }

    Ok(segments)
}

/// Encodes `row` and returns the bytes with their segment breakdown.
pub fn explain(row: &Row<'_>) -> Result<(Vec<u8>, Vec<Segment>)> {
    let data = encode(row)?;
    let segments = describe(&data)?;
    Ok((data, segments))
}

/// Classic hex dump: offset, 16 hex bytes, and printable ASCII.
///
/// ```text
/// 0000: 03 00 00 00 06 00 00 00 55 73 65 72 49 64 01 2A  │........UserId.*│
/// ```
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(HEX_DUMP_WIDTH) * 80);
    for (line, chunk) in data.chunks(HEX_DUMP_WIDTH).enumerate() {
        let ascii: String = chunk
            .iter()
            .map(|&b| {
                if (0x20..0x7F).contains(&b) {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "{:04X}: {:<width$} │{}│",
            line * HEX_DUMP_WIDTH,
            hex_spaced(chunk),
            ascii,
            width = HEX_DUMP_WIDTH * 3 - 1,
        );
    }
    out
}

pub(crate) fn hex_spaced(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02X}");
    }
    out
}

fn describe_value(marker: Marker, value: &Value<'_>) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => format!("string '{s}' ({} bytes UTF-8)", s.len()),
        Value::Bytes(b) => format!("bytes ({} bytes)", b.len()),
        other => format!("{} value = {other}", marker.name()),
    }
}
