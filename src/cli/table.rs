//! # ASCII Table Formatter
//!
//! Renders decoded rows and layout segments as ASCII tables.
//!
//! ## Output Format
//!
//! ```text
//! +--------+--------+----------+
//! | column | type   | value    |
//! +--------+--------+----------+
//! | UserId | Int32  | 42       |
//! | Name   | String | John Doe |
//! +--------+--------+----------+
//! ```
//!
//! ## Column Width Calculation
//!
//! Column widths are the maximum of the header and every cell in that column,
//! counted in characters, capped at `MAX_DISPLAY_WIDTH`. Longer cells are
//! truncated with "...".
//!
//! Cells are plain strings: callers format values before handing them over,
//! so the same formatter serves the decode table and the explain table.

use std::fmt::Write;

use crate::config::{BYTES_PREVIEW_LEN, MAX_DISPLAY_WIDTH};
use crate::records::{Row, Segment};
use crate::types::Value;

pub struct TableFormatter {
    headers: Vec<String>,
    widths: Vec<usize>,
    /// Columns whose cells are right-aligned.
    numeric: Vec<bool>,
    rows: Vec<Vec<String>>,
}

impl TableFormatter {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| display_width(h).clamp(1, MAX_DISPLAY_WIDTH))
            .collect();

        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(display_width(cell)).min(MAX_DISPLAY_WIDTH);
                }
            }
        }

        let numeric = vec![false; headers.len()];
        Self {
            headers,
            widths,
            numeric,
            rows,
        }
    }

    /// Table of a decoded row: one line per column.
    pub fn for_row(row: &Row<'_>) -> Self {
        let rows = row
            .iter()
            .map(|column| {
                vec![
                    column.name.to_string(),
                    column.value.type_name().to_string(),
                    format_value(&column.value),
                ]
            })
            .collect();
        Self::new(
            vec!["column".to_string(), "type".to_string(), "value".to_string()],
            rows,
        )
    }

    /// Table of layout segments; `data` supplies the bytes for the hex column.
    pub fn for_segments(segments: &[Segment], data: &[u8]) -> Self {
        let rows = segments
            .iter()
            .map(|segment| {
                vec![
                    segment.offset.to_string(),
                    segment.len.to_string(),
                    segment.kind.to_string(),
                    segment.description.clone(),
                    segment.hex(data),
                ]
            })
            .collect();
        let mut table = Self::new(
            ["offset", "size", "kind", "description", "hex"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            rows,
        );
        table.numeric[0] = true;
        table.numeric[1] = true;
        table
    }

    pub fn render(&self) -> String {
        let mut output = String::new();

        self.write_separator(&mut output);
        self.write_row(&mut output, &self.headers, false);
        self.write_separator(&mut output);

        for row in &self.rows {
            self.write_row(&mut output, row, true);
        }

        self.write_separator(&mut output);

        output
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn write_separator(&self, output: &mut String) {
        output.push('+');
        for width in &self.widths {
            for _ in 0..(*width + 2) {
                output.push('-');
            }
            output.push('+');
        }
        output.push('\n');
    }

    fn write_row(&self, output: &mut String, cells: &[String], align: bool) {
        output.push('|');
        for (i, cell) in cells.iter().enumerate() {
            let width = self.widths.get(i).copied().unwrap_or(1);
            let truncated = truncate(cell, width);
            let pad = width.saturating_sub(display_width(&truncated));
            if align && self.numeric.get(i).copied().unwrap_or(false) {
                let _ = write!(output, " {}{} |", " ".repeat(pad), truncated);
            } else {
                let _ = write!(output, " {}{} |", truncated, " ".repeat(pad));
            }
        }
        output.push('\n');
    }
}

/// Display text for a value. Long byte payloads are cut to a short preview.
pub fn format_value(value: &Value<'_>) -> String {
    match value {
        Value::Bytes(bytes) => format_bytes(bytes),
        other => other.to_string(),
    }
}

fn format_bytes(bytes: &[u8]) -> String {
    if bytes.len() <= BYTES_PREVIEW_LEN {
        let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        format!("x'{}'", hex)
    } else {
        let hex: String = bytes[..BYTES_PREVIEW_LEN]
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect();
        format!("x'{}'... ({} bytes)", hex, bytes.len())
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn truncate(s: &str, max_len: usize) -> String {
    if display_width(s) <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let mut result: String = s.chars().take(max_len - 3).collect();
        result.push_str("...");
        result
    }
}
