//! Byte strings prefixed by their varint32 length.

use bytes::BufMut;
use c2_types::ByteView;

use crate::varint::{encode_varint32, get_varint32, put_varint32};

fn prefix_len(value: ByteView<'_>) -> u32 {
    let Ok(len) = u32::try_from(value.size()) else {
        panic!(
            "length-prefixed value of {} bytes exceeds u32::MAX",
            value.size()
        );
    };
    len
}

/// Appends the varint32 length of `value` followed by its bytes.
///
/// # Panics
///
/// Panics if `value` is longer than `u32::MAX` bytes.
pub fn put_length_prefixed<B: BufMut>(dst: &mut B, value: ByteView<'_>) {
    put_varint32(dst, prefix_len(value));
    dst.put_slice(value.data());
}

/// Writes the varint32 length of `value` followed by its bytes at the start
/// of `dst`, returning the number of bytes written.
///
/// # Panics
///
/// Panics if `dst` is too short or `value` is longer than `u32::MAX` bytes.
pub fn encode_length_prefixed(dst: &mut [u8], value: ByteView<'_>) -> usize {
    let header = encode_varint32(dst, prefix_len(value));
    let end = header + value.size();
    dst[header..end].copy_from_slice(value.data());
    end
}

/// Parses a length-prefixed byte string from the front of `input`.
///
/// The returned view aliases `input`'s storage. On success `input` is
/// advanced past the string; on failure (malformed length or fewer bytes
/// than the length promises) it is left unchanged.
pub fn get_length_prefixed<'a>(input: &mut ByteView<'a>) -> Option<ByteView<'a>> {
    let mut cursor = *input;
    let len = get_varint32(&mut cursor)? as usize;
    if cursor.size() < len {
        return None;
    }
    let value = ByteView::new(&cursor.data()[..len]);
    cursor.remove_prefix(len);
    *input = cursor;
    Some(value)
}
