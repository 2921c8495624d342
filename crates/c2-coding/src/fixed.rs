//! Fixed-width little-endian integers.

use bytes::BufMut;

const LITTLE_ENDIAN_HOST: bool = cfg!(target_endian = "little");

/// Writes `value` as 2 little-endian bytes at the start of `dst`.
///
/// # Panics
///
/// Panics if `dst` is shorter than 2 bytes.
#[inline]
pub fn encode_fixed16(dst: &mut [u8], value: u16) {
    dst[..2].copy_from_slice(&value.to_le_bytes());
}

/// Writes `value` as 4 little-endian bytes at the start of `dst`.
///
/// # Panics
///
/// Panics if `dst` is shorter than 4 bytes.
#[inline]
pub fn encode_fixed32(dst: &mut [u8], value: u32) {
    dst[..4].copy_from_slice(&value.to_le_bytes());
}

/// Writes `value` as 8 little-endian bytes at the start of `dst`.
///
/// # Panics
///
/// Panics if `dst` is shorter than 8 bytes.
#[inline]
pub fn encode_fixed64(dst: &mut [u8], value: u64) {
    dst[..8].copy_from_slice(&value.to_le_bytes());
}

/// Reads a little-endian u16 from the first 2 bytes of `src`.
///
/// # Panics
///
/// Panics if `src` is shorter than 2 bytes.
#[inline]
pub fn decode_fixed16(src: &[u8]) -> u16 {
    let raw = [src[0], src[1]];
    if LITTLE_ENDIAN_HOST {
        u16::from_ne_bytes(raw)
    } else {
        u16::from(raw[0]) | (u16::from(raw[1]) << 8)
    }
}

/// Reads a little-endian u32 from the first 4 bytes of `src`.
///
/// # Panics
///
/// Panics if `src` is shorter than 4 bytes.
#[inline]
pub fn decode_fixed32(src: &[u8]) -> u32 {
    let raw = [src[0], src[1], src[2], src[3]];
    if LITTLE_ENDIAN_HOST {
        u32::from_ne_bytes(raw)
    } else {
        u32::from(raw[0])
            | (u32::from(raw[1]) << 8)
            | (u32::from(raw[2]) << 16)
            | (u32::from(raw[3]) << 24)
    }
}

/// Reads a little-endian u64 from the first 8 bytes of `src`.
///
/// # Panics
///
/// Panics if `src` is shorter than 8 bytes.
#[inline]
pub fn decode_fixed64(src: &[u8]) -> u64 {
    if LITTLE_ENDIAN_HOST {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&src[..8]);
        u64::from_ne_bytes(raw)
    } else {
        // High word is the second fixed32.
        let lo = u64::from(decode_fixed32(src));
        let hi = u64::from(decode_fixed32(&src[4..]));
        (hi << 32) | lo
    }
}

/// Appends `value` as 2 little-endian bytes.
pub fn put_fixed16<B: BufMut>(dst: &mut B, value: u16) {
    dst.put_u16_le(value);
}

/// Appends `value` as 4 little-endian bytes.
pub fn put_fixed32<B: BufMut>(dst: &mut B, value: u32) {
    dst.put_u32_le(value);
}

/// Appends `value` as 8 little-endian bytes.
pub fn put_fixed64<B: BufMut>(dst: &mut B, value: u64) {
    dst.put_u64_le(value);
}
