//! # c2-coding: endian-neutral binary encodings
//!
//! - Fixed-width integers are written least-significant byte first.
//! - Varints carry 7 value bits per byte, low group first, with bit 7 set on
//!   every byte except the last.
//! - Byte strings are prefixed by their length as a varint32.
//!
//! # Format
//!
//! ```text
//! fixed32(0x04030201)        = 01 02 03 04
//! varint(300)                = ac 02
//! length_prefixed(b"hi")     = 02 68 69
//! ```
//!
//! `put_*` functions append to any [`bytes::BufMut`]. `encode_*` functions
//! write into a caller-sized slice. `decode_*` functions read from a slice
//! and report how many bytes they consumed; `get_*` functions read from a
//! [`ByteView`](c2_types::ByteView) and advance it only on success.
//!
//! Decoders signal malformed input with `None`. [`Decoder`] wraps the same
//! routines for callers that want a [`Status`](c2_types::Status) instead.

mod decoder;
mod fixed;
mod length_prefixed;
mod varint;

pub use decoder::Decoder;
pub use fixed::{
    decode_fixed16, decode_fixed32, decode_fixed64, encode_fixed16, encode_fixed32, encode_fixed64,
    put_fixed16, put_fixed32, put_fixed64,
};
pub use length_prefixed::{encode_length_prefixed, get_length_prefixed, put_length_prefixed};
pub use varint::{
    MAX_VARINT32_LEN, MAX_VARINT64_LEN, decode_varint32, decode_varint64, encode_varint32,
    encode_varint64, get_varint32, get_varint64, put_varint32, put_varint64, varint_length,
};

#[cfg(test)]
mod tests;
