//! Property tests for the c2 encodings.

use bytes::BytesMut;
use c2_types::ByteView;
use proptest::prelude::*;

use crate::{
    MAX_VARINT32_LEN, decode_fixed16, decode_fixed32, decode_fixed64, decode_varint32,
    encode_fixed16, encode_fixed32, encode_fixed64, get_length_prefixed, get_varint32,
    get_varint64, put_fixed32, put_length_prefixed, put_varint32, put_varint64, varint_length,
};

#[test]
fn fixed_values_pack_back_to_back() {
    let mut buf = Vec::new();
    for v in 0..100_000u32 {
        put_fixed32(&mut buf, v);
    }
    for (i, chunk) in buf.chunks_exact(4).enumerate() {
        assert_eq!(decode_fixed32(chunk), i as u32);
    }
}

#[test]
fn varint32_sequence_decodes_in_order() {
    let mut values = Vec::new();
    for i in 0..32u32 {
        let v = (1u32 << i).wrapping_sub(1);
        values.extend([v, v.wrapping_add(1)]);
    }

    let mut buf = Vec::new();
    for &v in &values {
        put_varint32(&mut buf, v);
    }

    let mut input = ByteView::from(&buf);
    for &expected in &values {
        let before = input.size();
        assert_eq!(get_varint32(&mut input), Some(expected));
        assert_eq!(before - input.size(), varint_length(u64::from(expected)));
    }
    assert!(input.is_empty());
}

#[test]
fn puts_accept_any_buf_mut() {
    let mut buf = BytesMut::new();
    put_varint64(&mut buf, 300);
    put_length_prefixed(&mut buf, "abc".into());
    assert_eq!(&buf[..], &[0xac, 0x02, 0x03, b'a', b'b', b'c']);
}

#[test]
fn length_prefixed_sequence() {
    let mut buf = Vec::new();
    put_length_prefixed(&mut buf, "".into());
    put_length_prefixed(&mut buf, "foo".into());
    put_length_prefixed(&mut buf, "bar".into());
    let long = "x".repeat(200);
    put_length_prefixed(&mut buf, (&long).into());

    let mut input = ByteView::from(&buf);
    for expected in ["", "foo", "bar", long.as_str()] {
        let value = get_length_prefixed(&mut input).unwrap();
        assert_eq!(value.data(), expected.as_bytes());
    }
    assert!(input.is_empty());
}

proptest! {
    #[test]
    fn fixed16_round_trip(v: u16) {
        let mut buf = [0u8; 2];
        encode_fixed16(&mut buf, v);
        prop_assert_eq!(decode_fixed16(&buf), v);
        prop_assert_eq!(buf, v.to_le_bytes());
    }

    #[test]
    fn fixed32_round_trip(v: u32) {
        let mut buf = [0u8; 4];
        encode_fixed32(&mut buf, v);
        prop_assert_eq!(decode_fixed32(&buf), v);
    }

    #[test]
    fn fixed64_round_trip(v: u64) {
        let mut buf = [0u8; 8];
        encode_fixed64(&mut buf, v);
        prop_assert_eq!(decode_fixed64(&buf), v);
        prop_assert_eq!(u64::from(decode_fixed32(&buf[4..])), v >> 32);
    }

    #[test]
    fn fixed_bytes_round_trip(bytes: [u8; 8]) {
        let mut buf = [0u8; 8];
        encode_fixed64(&mut buf, decode_fixed64(&bytes));
        prop_assert_eq!(buf, bytes);
    }

    #[test]
    fn varint64_round_trip(v: u64) {
        let mut buf = Vec::new();
        put_varint64(&mut buf, v);
        prop_assert_eq!(buf.len(), varint_length(v));

        let mut input = ByteView::from(&buf);
        prop_assert_eq!(get_varint64(&mut input), Some(v));
        prop_assert!(input.is_empty());
    }

    #[test]
    fn varint32_round_trip(v: u32) {
        let mut buf = Vec::new();
        put_varint32(&mut buf, v);
        prop_assert!(buf.len() <= MAX_VARINT32_LEN);

        let mut input = ByteView::from(&buf);
        prop_assert_eq!(get_varint32(&mut input), Some(v));
        prop_assert!(input.is_empty());
    }

    #[test]
    fn truncated_varint_fails_and_leaves_input(v in 128u64.., cut: prop::sample::Index) {
        let mut buf = Vec::new();
        put_varint64(&mut buf, v);
        // Keep at least one byte, drop at least the terminator.
        let keep = 1 + cut.index(buf.len() - 1);
        let truncated = &buf[..keep];

        let mut input = ByteView::from(truncated);
        prop_assert_eq!(get_varint64(&mut input), None);
        prop_assert_eq!(input.size(), keep);

        if v <= u64::from(u32::MAX) {
            prop_assert_eq!(get_varint32(&mut input), None);
            prop_assert_eq!(input.size(), keep);
        }
    }

    #[test]
    fn varint32_decode_agrees_with_get(v: u32, tail: Vec<u8>) {
        let mut buf = Vec::new();
        put_varint32(&mut buf, v);
        let len = buf.len();
        buf.extend_from_slice(&tail);

        prop_assert_eq!(decode_varint32(&buf), Some((v, len)));
    }

    #[test]
    fn length_prefixed_round_trip_aliases_input(s: Vec<u8>) {
        let mut buf = Vec::new();
        put_length_prefixed(&mut buf, ByteView::from(&s));

        let mut input = ByteView::from(&buf);
        let value = get_length_prefixed(&mut input).unwrap();
        prop_assert_eq!(value.data(), s.as_slice());
        prop_assert!(input.is_empty());

        // The result points into `buf`, right after the length prefix.
        let offset = varint_length(s.len() as u64);
        prop_assert_eq!(value.data().as_ptr(), buf[offset..].as_ptr());
    }
}
