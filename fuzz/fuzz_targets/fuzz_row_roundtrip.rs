//! Fuzz testing for encode/decode round trips.
//!
//! Builds structured rows from arbitrary input and checks that every row
//! decodes back to itself, that `encoded_len` is exact, and that every
//! strict prefix of the encoding is rejected as truncated.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use rowcodec::{decode, encode, encoded_len, ErrorKind, Row, Value};

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Null,
    Int32(i32),
    Int64(i64),
    Double(f64),
    Boolean(bool),
    DateTime(i64),
    String(String),
    Bytes(Vec<u8>),
    Decimal(i128, i16),
    Guid([u8; 16]),
}

impl From<FuzzValue> for Value<'static> {
    fn from(value: FuzzValue) -> Self {
        match value {
            FuzzValue::Null => Value::Null,
            FuzzValue::Int32(v) => Value::Int32(v),
            FuzzValue::Int64(v) => Value::Int64(v),
            FuzzValue::Double(v) => Value::Double(v),
            FuzzValue::Boolean(v) => Value::Boolean(v),
            FuzzValue::DateTime(v) => Value::DateTime(v),
            FuzzValue::String(v) => Value::from(v),
            FuzzValue::Bytes(v) => Value::from(v),
            FuzzValue::Decimal(digits, scale) => Value::Decimal { digits, scale },
            FuzzValue::Guid(v) => Value::Guid(v),
        }
    }
}

fuzz_target!(|columns: Vec<(String, FuzzValue)>| {
    if columns.len() > 64 {
        return;
    }

    let row: Row<'static> = columns
        .into_iter()
        .map(|(name, value)| (name, Value::from(value)))
        .collect();

    let bytes = encode(&row).expect("small rows are encodable");
    assert_eq!(bytes.len(), encoded_len(&row).expect("len matches encode"));
    assert_eq!(decode(&bytes).expect("encoded rows decode"), row);

    for end in 0..bytes.len() {
        let err = decode(&bytes[..end]).expect_err("prefix must not decode");
        assert_eq!(err.kind(), ErrorKind::TruncatedData);
    }
});
