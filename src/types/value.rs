//! # Column Value Representation
//!
//! This module provides `Value<'a>`, the closed set of values a row column can
//! hold. Variable-length variants use `Cow` so callers can encode borrowed
//! data without copying, while decoded rows always own their payloads.
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Wire payload |
//! |---------|-----------|--------------|
//! | Null | - | none |
//! | Int32 | i32 | 4 bytes |
//! | Int64 | i64 | 8 bytes |
//! | Double | f64 | 8 bytes |
//! | Boolean | bool | 1 byte |
//! | DateTime | i64 (micros since Unix epoch, UTC) | 8 bytes |
//! | String | Cow<str> | length + UTF-8 |
//! | Bytes | Cow<[u8]> | length + raw |
//! | Decimal | {digits: i128, scale: i16} | 18 bytes |
//! | Guid | [u8; 16] | 16 bytes |
//!
//! ## Integer Width
//!
//! Integers pick their width automatically: anything inside the `i32` range is
//! an `Int32`, everything else an `Int64`. `Value::integer` and every `From`
//! conversion apply the rule, and the encoder narrows an in-range `Int64` to
//! the `Int32` marker as well, so one logical row has exactly one encoding.
//! Equality compares the numeric value across both widths.
//!
//! ## Text Fallback
//!
//! Values outside the model are stored as their text form through
//! [`Value::from_display`]. Unsigned integers above `i64::MAX` take this path.

use std::borrow::Cow;
use std::fmt;

use crate::config::{
    BOOLEAN_LEN, DATE_TIME_LEN, DECIMAL_LEN, DOUBLE_LEN, GUID_LEN, INT32_LEN, INT64_LEN,
    LENGTH_PREFIX_LEN,
};
use crate::types::Marker;

const MICROS_PER_SECOND: i64 = 1_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone)]
pub enum Value<'a> {
    Null,
    Int32(i32),
    Int64(i64),
    Double(f64),
    Boolean(bool),
    DateTime(i64),
    String(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    Decimal { digits: i128, scale: i16 },
    Guid([u8; 16]),
}

impl<'a> Value<'a> {
    /// Builds an integer value using the narrowest wire width.
    pub fn integer(value: i64) -> Value<'static> {
        match i32::try_from(value) {
            Ok(narrow) => Value::Int32(narrow),
            Err(_) => Value::Int64(value),
        }
    }

    /// Stores any displayable value as its text representation.
    pub fn from_display<T: fmt::Display + ?Sized>(value: &T) -> Value<'static> {
        Value::String(Cow::Owned(value.to_string()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the integer payload of either width.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b.as_ref()),
            _ => None,
        }
    }

    /// Marker written for this value. An `Int64` holding an `i32`-range value
    /// reports `Int32`, matching what the encoder emits.
    pub fn marker(&self) -> Marker {
        match self {
            Value::Null => Marker::Null,
            Value::Int32(_) => Marker::Int32,
            Value::Int64(v) => {
                if i32::try_from(*v).is_ok() {
                    Marker::Int32
                } else {
                    Marker::Int64
                }
            }
            Value::Double(_) => Marker::Double,
            Value::Boolean(_) => Marker::Boolean,
            Value::DateTime(_) => Marker::DateTime,
            Value::String(_) => Marker::String,
            Value::Bytes(_) => Marker::Bytes,
            Value::Decimal { .. } => Marker::Decimal,
            Value::Guid(_) => Marker::Guid,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.marker().name()
    }

    /// Encoded payload size in bytes, excluding the marker.
    pub fn payload_len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Int32(_) => INT32_LEN,
            Value::Int64(_) => match self.marker() {
                Marker::Int32 => INT32_LEN,
                _ => INT64_LEN,
            },
            Value::Double(_) => DOUBLE_LEN,
            Value::Boolean(_) => BOOLEAN_LEN,
            Value::DateTime(_) => DATE_TIME_LEN,
            Value::String(s) => LENGTH_PREFIX_LEN + s.len(),
            Value::Bytes(b) => LENGTH_PREFIX_LEN + b.len(),
            Value::Decimal { .. } => DECIMAL_LEN,
            Value::Guid(_) => GUID_LEN,
        }
    }

    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Int32(v) => Value::Int32(v),
            Value::Int64(v) => Value::Int64(v),
            Value::Double(v) => Value::Double(v),
            Value::Boolean(v) => Value::Boolean(v),
            Value::DateTime(v) => Value::DateTime(v),
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Bytes(b) => Value::Bytes(Cow::Owned(b.into_owned())),
            Value::Decimal { digits, scale } => Value::Decimal { digits, scale },
            Value::Guid(g) => Value::Guid(g),
        }
    }
}

impl<'a, 'b> PartialEq<Value<'b>> for Value<'a> {
    fn eq(&self, other: &Value<'b>) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int32(_) | Value::Int64(_), Value::Int32(_) | Value::Int64(_)) => {
                self.as_i64() == other.as_i64()
            }
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::String(a), Value::String(b)) => a.as_ref() == b.as_ref(),
            (Value::Bytes(a), Value::Bytes(b)) => a.as_ref() == b.as_ref(),
            (
                Value::Decimal { digits, scale },
                Value::Decimal {
                    digits: other_digits,
                    scale: other_scale,
                },
            ) => digits == other_digits && scale == other_scale,
            (Value::Guid(a), Value::Guid(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value<'_> {}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::DateTime(micros) => f.write_str(&format_date_time(*micros)),
            Value::String(s) => f.write_str(s),
            Value::Bytes(b) => {
                f.write_str("x'")?;
                for byte in b.iter() {
                    write!(f, "{:02X}", byte)?;
                }
                f.write_str("'")
            }
            Value::Decimal { digits, scale } => f.write_str(&format_decimal(*digits, *scale)),
            Value::Guid(g) => f.write_str(&format_guid(g)),
        }
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

macro_rules! impl_from_narrow_int {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Value<'a> {
                fn from(v: $t) -> Self {
                    Value::Int32(i32::from(v))
                }
            }
        )*
    };
}

impl_from_narrow_int!(i8, i16, i32, u8, u16);

impl<'a> From<i64> for Value<'a> {
    fn from(v: i64) -> Self {
        Value::integer(v)
    }
}

impl<'a> From<u32> for Value<'a> {
    fn from(v: u32) -> Self {
        Value::integer(i64::from(v))
    }
}

impl<'a> From<u64> for Value<'a> {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(signed) => Value::integer(signed),
            Err(_) => Value::from_display(&v),
        }
    }
}

impl<'a> From<i128> for Value<'a> {
    fn from(v: i128) -> Self {
        match i64::try_from(v) {
            Ok(signed) => Value::integer(signed),
            Err(_) => Value::from_display(&v),
        }
    }
}

impl<'a> From<u128> for Value<'a> {
    fn from(v: u128) -> Self {
        match i64::try_from(v) {
            Ok(signed) => Value::integer(signed),
            Err(_) => Value::from_display(&v),
        }
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(v: f32) -> Self {
        Value::Double(f64::from(v))
    }
}

impl<'a> From<f64> for Value<'a> {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::String(Cow::Borrowed(v))
    }
}

impl<'a> From<String> for Value<'a> {
    fn from(v: String) -> Self {
        Value::String(Cow::Owned(v))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(v: Cow<'a, str>) -> Self {
        Value::String(v)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(v: &'a [u8]) -> Self {
        Value::Bytes(Cow::Borrowed(v))
    }
}

impl<'a> From<Vec<u8>> for Value<'a> {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(Cow::Owned(v))
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

fn format_guid(bytes: &[u8; 16]) -> String {
    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        bytes[6], bytes[7],
        bytes[8], bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}

fn format_decimal(digits: i128, scale: i16) -> String {
    let magnitude = digits.unsigned_abs().to_string();
    let body = if scale <= 0 {
        if digits == 0 {
            magnitude
        } else {
            let zeros = usize::from(scale.unsigned_abs());
            format!("{}{}", magnitude, "0".repeat(zeros))
        }
    } else {
        let scale = usize::from(scale.unsigned_abs());
        let padded = if magnitude.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - magnitude.len()), magnitude)
        } else {
            magnitude
        };
        let split = padded.len() - scale;
        format!("{}.{}", &padded[..split], &padded[split..])
    };

    if digits < 0 {
        format!("-{}", body)
    } else {
        body
    }
}

fn format_date_time(micros: i64) -> String {
    let seconds = micros.div_euclid(MICROS_PER_SECOND);
    let micros_part = micros.rem_euclid(MICROS_PER_SECOND);

    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let time_of_day = seconds.rem_euclid(SECONDS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let secs = time_of_day % 60;

    if micros_part == 0 {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            year, month, day, hours, minutes, secs
        )
    } else {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}Z",
            year, month, day, hours, minutes, secs, micros_part
        )
    }
}

fn civil_from_days(days_since_epoch: i64) -> (i64, u32, u32) {
    let z = days_since_epoch + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;

    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_picks_narrowest_width() {
        assert!(matches!(Value::integer(42), Value::Int32(42)));
        assert!(matches!(Value::integer(i32::MIN as i64), Value::Int32(i32::MIN)));
        assert!(matches!(
            Value::integer(i32::MAX as i64 + 1),
            Value::Int64(2_147_483_648)
        ));
        assert!(matches!(Value::integer(i64::MIN), Value::Int64(i64::MIN)));
    }

    #[test]
    fn in_range_int64_reports_int32_marker() {
        assert_eq!(Value::Int64(7).marker(), Marker::Int32);
        assert_eq!(Value::Int64(7).payload_len(), 4);
        assert_eq!(Value::Int64(i64::MAX).marker(), Marker::Int64);
        assert_eq!(Value::Int64(i64::MAX).payload_len(), 8);
    }

    #[test]
    fn integers_compare_across_widths() {
        assert_eq!(Value::Int32(5), Value::Int64(5));
        assert_ne!(Value::Int32(5), Value::Int64(6));
        assert_ne!(Value::Int32(0), Value::Null);
    }

    #[test]
    fn doubles_compare_by_bits() {
        assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
        assert_ne!(Value::Double(0.0), Value::Double(-0.0));
    }

    #[test]
    fn borrowed_and_owned_strings_are_equal() {
        let borrowed = Value::from("hello");
        let owned = Value::from("hello".to_string());
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn unsigned_above_i64_falls_back_to_text() {
        let value = Value::from(u64::MAX);
        assert_eq!(value.as_str(), Some("18446744073709551615"));
        assert_eq!(value.marker(), Marker::String);

        assert!(matches!(Value::from(7u64), Value::Int32(7)));
    }

    #[test]
    fn option_none_is_null() {
        let none: Option<i32> = None;
        assert!(Value::from(none).is_null());
        assert!(matches!(Value::from(Some(3i32)), Value::Int32(3)));
    }

    #[test]
    fn from_display_uses_text_form() {
        struct Celsius(f32);
        impl fmt::Display for Celsius {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}°C", self.0)
            }
        }
        assert_eq!(Value::from_display(&Celsius(21.5)).as_str(), Some("21.5°C"));
    }

    #[test]
    fn payload_len_counts_utf8_bytes() {
        assert_eq!(Value::from("Café").payload_len(), 4 + 5);
        assert_eq!(Value::from("日本").payload_len(), 4 + 6);
        assert_eq!(Value::from("🚀").payload_len(), 4 + 4);
    }

    #[test]
    fn display_date_time() {
        assert_eq!(format_date_time(0), "1970-01-01T00:00:00Z");
        assert_eq!(
            format_date_time(1_700_000_000_123_456),
            "2023-11-14T22:13:20.123456Z"
        );
        assert_eq!(format_date_time(-1), "1969-12-31T23:59:59.999999Z");
    }

    #[test]
    fn display_decimal() {
        assert_eq!(format_decimal(12345, 2), "123.45");
        assert_eq!(format_decimal(-5, 3), "-0.005");
        assert_eq!(format_decimal(42, 0), "42");
        assert_eq!(format_decimal(42, -2), "4200");
        assert_eq!(format_decimal(0, -2), "0");
    }

    #[test]
    fn display_guid_is_hyphenated() {
        let guid = [
            0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
            0xcd, 0xef,
        ];
        assert_eq!(
            Value::Guid(guid).to_string(),
            "12345678-9abc-def0-0123-456789abcdef"
        );
    }

    #[test]
    fn into_owned_preserves_value() {
        let data = vec![1u8, 2, 3];
        let borrowed = Value::from(data.as_slice());
        let owned: Value<'static> = borrowed.clone().into_owned();
        assert_eq!(owned, borrowed);
    }
}
