//! Fuzz testing for the row decoder.
//!
//! Feeds arbitrary byte sequences to `decode` and `describe` to ensure
//! malformed input is rejected with an error instead of a panic, and that
//! both walkers agree on where the input goes wrong.

#![no_main]

use libfuzzer_sys::fuzz_target;

use rowcodec::records::describe;
use rowcodec::{decode, decode_prefix, encode};

fuzz_target!(|data: &[u8]| {
    let decoded = decode(data);
    let described = describe(data);

    match (&decoded, &described) {
        (Ok(row), Ok(segments)) => {
            let (_, used) = decode_prefix(data).expect("decode succeeded once");
            assert_eq!(segments.last().map_or(0, |s| s.offset + s.len), used);
            assert_eq!(segments.len(), 1 + 4 * row.len());

            let bytes = encode(row).expect("decoded rows are encodable");
            assert!(bytes.len() <= used);
            assert_eq!(&decode(&bytes).expect("re-encoded row decodes"), row);
        }
        (Err(a), Err(b)) => assert_eq!(a, b),
        _ => panic!("decode and describe disagree: {decoded:?} vs {described:?}"),
    }
});
