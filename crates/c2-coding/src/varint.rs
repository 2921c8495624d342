//! Unsigned varints.
//!
//! Each byte holds 7 value bits; bit 7 is set when more bytes follow. A u32
//! needs at most [`MAX_VARINT32_LEN`] bytes and a u64 at most
//! [`MAX_VARINT64_LEN`].
//!
//! Decoding stops after the maximum group count: a continuation bit on the
//! last allowed byte is malformed input. Value bits above the target width in
//! the last group are discarded.

use bytes::BufMut;
use c2_types::ByteView;

/// Longest varint encoding of a u32.
pub const MAX_VARINT32_LEN: usize = 5;

/// Longest varint encoding of a u64.
pub const MAX_VARINT64_LEN: usize = 10;

const CONTINUATION: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7f;

/// Returns the number of bytes the varint encoding of `value` occupies.
pub fn varint_length(mut value: u64) -> usize {
    let mut len = 1;
    while value >= u64::from(CONTINUATION) {
        value >>= 7;
        len += 1;
    }
    len
}

/// Writes `value` as a varint at the start of `dst`, returning the number of
/// bytes written.
///
/// # Panics
///
/// Panics if `dst` is shorter than `varint_length(value)`.
#[inline]
pub fn encode_varint32(dst: &mut [u8], value: u32) -> usize {
    encode_varint64(dst, u64::from(value))
}

/// Writes `value` as a varint at the start of `dst`, returning the number of
/// bytes written.
///
/// # Panics
///
/// Panics if `dst` is shorter than `varint_length(value)`.
pub fn encode_varint64(dst: &mut [u8], mut value: u64) -> usize {
    let mut i = 0;
    while value >= u64::from(CONTINUATION) {
        dst[i] = (value as u8) | CONTINUATION;
        value >>= 7;
        i += 1;
    }
    dst[i] = value as u8;
    i + 1
}

/// Appends `value` as a varint.
pub fn put_varint32<B: BufMut>(dst: &mut B, value: u32) {
    let mut buf = [0u8; MAX_VARINT32_LEN];
    let len = encode_varint32(&mut buf, value);
    dst.put_slice(&buf[..len]);
}

/// Appends `value` as a varint.
pub fn put_varint64<B: BufMut>(dst: &mut B, value: u64) {
    let mut buf = [0u8; MAX_VARINT64_LEN];
    let len = encode_varint64(&mut buf, value);
    dst.put_slice(&buf[..len]);
}

/// Decodes a varint32 from the start of `src`.
///
/// Returns the value and the number of bytes consumed, or `None` if `src`
/// ends before a terminating byte or the encoding runs past 5 bytes.
#[inline]
pub fn decode_varint32(src: &[u8]) -> Option<(u32, usize)> {
    if let Some(&first) = src.first() {
        if first & CONTINUATION == 0 {
            return Some((u32::from(first), 1));
        }
    }
    decode_varint32_slow(src)
}

fn decode_varint32_slow(src: &[u8]) -> Option<(u32, usize)> {
    let mut result = 0u32;
    for (i, &byte) in src.iter().take(MAX_VARINT32_LEN).enumerate() {
        result |= u32::from(byte & PAYLOAD_MASK) << (7 * i);
        if byte & CONTINUATION == 0 {
            return Some((result, i + 1));
        }
    }
    None
}

/// Decodes a varint64 from the start of `src`.
///
/// Returns the value and the number of bytes consumed, or `None` if `src`
/// ends before a terminating byte or the encoding runs past 10 bytes.
pub fn decode_varint64(src: &[u8]) -> Option<(u64, usize)> {
    let mut result = 0u64;
    for (i, &byte) in src.iter().take(MAX_VARINT64_LEN).enumerate() {
        result |= u64::from(byte & PAYLOAD_MASK) << (7 * i);
        if byte & CONTINUATION == 0 {
            return Some((result, i + 1));
        }
    }
    None
}

/// Parses a varint32 from the front of `input`, advancing past it.
///
/// On failure `input` is left unchanged.
pub fn get_varint32(input: &mut ByteView<'_>) -> Option<u32> {
    let (value, len) = decode_varint32(input.data())?;
    input.remove_prefix(len);
    Some(value)
}

/// Parses a varint64 from the front of `input`, advancing past it.
///
/// On failure `input` is left unchanged.
pub fn get_varint64(input: &mut ByteView<'_>) -> Option<u64> {
    let (value, len) = decode_varint64(input.data())?;
    input.remove_prefix(len);
    Some(value)
}
