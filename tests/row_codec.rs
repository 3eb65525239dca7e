//! # Row Codec Integration Tests
//!
//! Exercises the public API the way a storage layer uses it:
//!
//! - Round trips of rows covering every value type
//! - Exact byte layouts for well-known rows
//! - Rejection of malformed and adversarial input
//! - Concurrent encode and decode on independent buffers

use std::sync::{Arc, Barrier};
use std::thread;

use rowcodec::{
    decode, decode_into, decode_prefix, encode, encode_into, encoded_len, CodecError, ErrorKind,
    Marker, Row, Value,
};

fn order_row(id: i64) -> Row<'static> {
    Row::new()
        .with("OrderId", Value::integer(id))
        .with("Customer", format!("customer-{id}"))
        .with("Total", Value::Decimal {
            digits: 1999 + i128::from(id),
            scale: 2,
        })
        .with("PlacedAt", Value::DateTime(1_700_000_000_000_000 + id))
        .with("Paid", id % 2 == 0)
        .with("Ref", Value::Guid([id as u8; 16]))
        .with("Notes", Option::<&str>::None)
        .with("Blob", vec![id as u8; id.rem_euclid(7) as usize])
}

mod round_trip {
    use super::*;

    #[test]
    fn order_rows_survive_encode_decode() {
        for id in [0, 1, -1, i64::from(i32::MAX) + 1, i64::MIN] {
            let row = order_row(id);
            let bytes = encode(&row).unwrap();
            assert_eq!(bytes.len(), encoded_len(&row).unwrap());
            assert_eq!(decode(&bytes).unwrap(), row, "order {id}");
        }
    }

    #[test]
    fn unicode_scenario_matches_byte_counts() {
        let row = Row::new()
            .with("City", "Café")
            .with("Country", "日本")
            .with("Emoji", "🚀");
        let bytes = encode(&row).unwrap();

        let expected = 4 + (4 + 4 + 1 + 4 + 5) + (4 + 7 + 1 + 4 + 6) + (4 + 5 + 1 + 4 + 4);
        assert_eq!(bytes.len(), expected);
        assert_eq!(decode(&bytes).unwrap(), row);
    }

    #[test]
    fn extreme_values_round_trip() {
        let row = Row::new()
            .with("i32min", i32::MIN)
            .with("i32max", i32::MAX)
            .with("i64min", i64::MIN)
            .with("i64max", i64::MAX)
            .with("inf", f64::INFINITY)
            .with("neg_zero", -0.0f64)
            .with("dec", Value::Decimal {
                digits: i128::MIN,
                scale: i16::MIN,
            })
            .with("epoch_before", Value::DateTime(i64::MIN));
        assert_eq!(decode(&encode(&row).unwrap()).unwrap(), row);
    }

    #[test]
    fn negative_zero_is_distinct_from_zero() {
        let neg = Row::new().with("x", -0.0f64);
        let pos = Row::new().with("x", 0.0f64);
        assert_ne!(encode(&neg).unwrap(), encode(&pos).unwrap());
        assert_ne!(decode(&encode(&neg).unwrap()).unwrap(), pos);
    }

    #[test]
    fn wide_rows_spill_past_inline_capacity() {
        let row: Row = (0..100).map(|i| (format!("c{i}"), i)).collect();
        let decoded = decode(&encode(&row).unwrap()).unwrap();
        assert_eq!(decoded.len(), 100);
        assert_eq!(decoded, row);
    }

    #[test]
    fn megabyte_payload_round_trips() {
        let blob: Vec<u8> = (0..1 << 20).map(|i| (i % 251) as u8).collect();
        let row = Row::new().with("blob", blob.as_slice());
        let bytes = encode(&row).unwrap();
        assert_eq!(bytes.len(), 4 + 4 + 4 + 1 + 4 + blob.len());
        assert_eq!(decode(&bytes).unwrap().get("blob").and_then(Value::as_bytes), Some(&blob[..]));
    }
}

mod layout {
    use super::*;

    #[test]
    fn markers_follow_the_wire_table() {
        let row = Row::new()
            .with("a", Value::Null)
            .with("b", 1)
            .with("c", i64::MAX)
            .with("d", 1.0f64)
            .with("e", true)
            .with("f", Value::DateTime(0))
            .with("g", "s")
            .with("h", vec![1u8])
            .with("i", Value::Decimal { digits: 0, scale: 0 })
            .with("j", Value::Guid([0; 16]));

        let bytes = encode(&row).unwrap();
        let mut markers = Vec::new();
        let mut offset = 4;
        for column in &row {
            offset += 4 + column.name.len();
            markers.push(bytes[offset]);
            offset += 1 + column.value.payload_len();
        }
        assert_eq!(offset, bytes.len());
        assert_eq!(markers, (0u8..=9).collect::<Vec<_>>());
        assert_eq!(
            row.iter().map(|c| c.value.marker()).collect::<Vec<_>>(),
            Marker::ALL.to_vec()
        );
    }
}

mod malformed {
    use super::*;

    #[test]
    fn every_prefix_of_every_row_is_truncated() {
        for id in [3, 4] {
            let bytes = encode(&order_row(id)).unwrap();
            for end in 0..bytes.len() {
                let err = decode(&bytes[..end]).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::TruncatedData);
            }
        }
    }

    #[test]
    fn forged_column_count_fails_fast() {
        let mut bytes = u32::MAX.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[0; 16]);
        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedData);
    }

    #[test]
    fn huge_declared_string_length_allocates_nothing() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.push(b'x');
        bytes.push(Marker::String.as_byte());
        bytes.extend_from_slice(&(i32::MAX as u32).to_le_bytes());

        match decode(&bytes).unwrap_err() {
            CodecError::TruncatedData {
                required, remaining, ..
            } => {
                assert_eq!(required, i32::MAX as usize);
                assert_eq!(remaining, 0);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn negative_bytes_length_is_invalid() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.push(b'x');
        bytes.push(Marker::Bytes.as_byte());
        bytes.extend_from_slice(&(-5i32).to_le_bytes());

        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
        assert_eq!(err.offset(), Some(10));
    }

    #[test]
    fn invalid_utf8_string_payload_is_rejected() {
        let mut bytes = encode(&Row::new().with("s", "ok")).unwrap();
        let last = bytes.len() - 1;
        bytes[last] = 0xC0;
        let err = decode(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUtf8);
        assert_eq!(err.offset(), Some(last - 1));
    }

    #[test]
    fn error_messages_name_offset_and_field() {
        let err = decode(&[1, 0, 0, 0, 9]).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("column name"), "{text}");
        assert!(text.contains("offset 4"), "{text}");
    }
}

mod buffers {
    use super::*;

    #[test]
    fn rows_can_be_packed_back_to_back() {
        let rows: Vec<_> = (0..10).map(order_row).collect();
        let mut buf = Vec::new();
        let mut lens = Vec::new();
        for row in &rows {
            lens.push(encode_into(row, &mut buf).unwrap());
        }
        assert_eq!(buf.len(), lens.iter().sum::<usize>());

        let mut offset = 0;
        for row in &rows {
            let (decoded, used) = decode_prefix(&buf[offset..]).unwrap();
            assert_eq!(&decoded, row);
            offset += used;
        }
        assert_eq!(offset, buf.len());
    }

    #[test]
    fn decode_into_reuses_one_row() {
        let mut out = Row::new();
        for id in 0..5 {
            let bytes = encode(&order_row(id)).unwrap();
            decode_into(&bytes, &mut out).unwrap();
            assert_eq!(out, order_row(id));
        }
    }
}

mod concurrency {
    use super::*;

    #[test]
    fn parallel_encode_decode_matches_sequential() {
        let threads = 8;
        let per_thread = 200;
        let barrier = Arc::new(Barrier::new(threads));

        let expected: Vec<Vec<u8>> = (0..per_thread)
            .map(|i| encode(&order_row(i)).unwrap())
            .collect();
        let expected = Arc::new(expected);

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let expected = Arc::clone(&expected);
                thread::spawn(move || {
                    barrier.wait();
                    for (i, bytes) in expected.iter().enumerate() {
                        let row = order_row(i as i64);
                        assert_eq!(&encode(&row).unwrap(), bytes);
                        assert_eq!(decode(bytes).unwrap(), row);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
