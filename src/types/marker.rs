//! # Wire Type Markers
//!
//! Each encoded value is preceded by a single marker byte naming its variant.
//! The marker table is part of the wire contract and must never be renumbered.
//!
//! | Marker | Variant  | Payload |
//! |--------|----------|---------|
//! | 0 | Null     | none |
//! | 1 | Int32    | 4 bytes, i32 LE |
//! | 2 | Int64    | 8 bytes, i64 LE |
//! | 3 | Double   | 8 bytes, IEEE-754 LE |
//! | 4 | Boolean  | 1 byte, 0 or 1 |
//! | 5 | DateTime | 8 bytes, i64 LE microseconds since Unix epoch |
//! | 6 | String   | u32 byte length + UTF-8 |
//! | 7 | Bytes    | u32 byte length + raw bytes |
//! | 8 | Decimal  | 16 bytes i128 LE digits + 2 bytes i16 LE scale |
//! | 9 | Guid     | 16 raw bytes |

use std::fmt;

use crate::config::{
    BOOLEAN_LEN, DATE_TIME_LEN, DECIMAL_LEN, DOUBLE_LEN, GUID_LEN, INT32_LEN, INT64_LEN,
};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    Null = 0,
    Int32 = 1,
    Int64 = 2,
    Double = 3,
    Boolean = 4,
    DateTime = 5,
    String = 6,
    Bytes = 7,
    Decimal = 8,
    Guid = 9,
}

impl Marker {
    pub const ALL: [Marker; 10] = [
        Marker::Null,
        Marker::Int32,
        Marker::Int64,
        Marker::Double,
        Marker::Boolean,
        Marker::DateTime,
        Marker::String,
        Marker::Bytes,
        Marker::Decimal,
        Marker::Guid,
    ];

    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Marker::Null),
            1 => Some(Marker::Int32),
            2 => Some(Marker::Int64),
            3 => Some(Marker::Double),
            4 => Some(Marker::Boolean),
            5 => Some(Marker::DateTime),
            6 => Some(Marker::String),
            7 => Some(Marker::Bytes),
            8 => Some(Marker::Decimal),
            9 => Some(Marker::Guid),
            _ => None,
        }
    }

    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Payload width for fixed-size variants; `None` for length-prefixed ones.
    #[inline]
    pub fn fixed_payload_len(self) -> Option<usize> {
        match self {
            Marker::Null => Some(0),
            Marker::Int32 => Some(INT32_LEN),
            Marker::Int64 => Some(INT64_LEN),
            Marker::Double => Some(DOUBLE_LEN),
            Marker::Boolean => Some(BOOLEAN_LEN),
            Marker::DateTime => Some(DATE_TIME_LEN),
            Marker::Decimal => Some(DECIMAL_LEN),
            Marker::Guid => Some(GUID_LEN),
            Marker::String | Marker::Bytes => None,
        }
    }

    #[inline]
    pub fn is_variable(self) -> bool {
        self.fixed_payload_len().is_none()
    }

    pub fn name(self) -> &'static str {
        match self {
            Marker::Null => "Null",
            Marker::Int32 => "Int32",
            Marker::Int64 => "Int64",
            Marker::Double => "Double",
            Marker::Boolean => "Boolean",
            Marker::DateTime => "DateTime",
            Marker::String => "String",
            Marker::Bytes => "Bytes",
            Marker::Decimal => "Decimal",
            Marker::Guid => "Guid",
        }
    }
}

impl TryFrom<u8> for Marker {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Marker::from_byte(byte).ok_or(byte)
    }
}

impl From<Marker> for u8 {
    fn from(marker: Marker) -> Self {
        marker.as_byte()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_bytes_match_wire_table() {
        assert_eq!(Marker::Null.as_byte(), 0);
        assert_eq!(Marker::Int32.as_byte(), 1);
        assert_eq!(Marker::Int64.as_byte(), 2);
        assert_eq!(Marker::Double.as_byte(), 3);
        assert_eq!(Marker::Boolean.as_byte(), 4);
        assert_eq!(Marker::DateTime.as_byte(), 5);
        assert_eq!(Marker::String.as_byte(), 6);
        assert_eq!(Marker::Bytes.as_byte(), 7);
        assert_eq!(Marker::Decimal.as_byte(), 8);
        assert_eq!(Marker::Guid.as_byte(), 9);
    }

    #[test]
    fn from_byte_inverts_as_byte() {
        for marker in Marker::ALL {
            assert_eq!(Marker::from_byte(marker.as_byte()), Some(marker));
        }
    }

    #[test]
    fn unknown_bytes_are_rejected() {
        assert_eq!(Marker::from_byte(10), None);
        assert_eq!(Marker::from_byte(0xFF), None);
        assert_eq!(Marker::try_from(42u8), Err(42));
    }

    #[test]
    fn only_string_and_bytes_are_variable() {
        let variable: Vec<Marker> = Marker::ALL.into_iter().filter(|m| m.is_variable()).collect();
        assert_eq!(variable, vec![Marker::String, Marker::Bytes]);
    }

    #[test]
    fn fixed_widths() {
        assert_eq!(Marker::Null.fixed_payload_len(), Some(0));
        assert_eq!(Marker::Int32.fixed_payload_len(), Some(4));
        assert_eq!(Marker::Int64.fixed_payload_len(), Some(8));
        assert_eq!(Marker::Boolean.fixed_payload_len(), Some(1));
        assert_eq!(Marker::Decimal.fixed_payload_len(), Some(18));
        assert_eq!(Marker::Guid.fixed_payload_len(), Some(16));
    }
}
