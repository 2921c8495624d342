//! Status-reporting cursor over encoded bytes.
//!
//! The free `get_*` functions return `None` on malformed input because they
//! sit on hot paths. Code that parses a whole record usually wants to stop at
//! the first bad field and report what it was reading; [`Decoder`] does that
//! by turning every failed read into a `Corruption` status.

use c2_types::{ByteView, Result, Status};

use crate::fixed::{decode_fixed16, decode_fixed32, decode_fixed64};
use crate::length_prefixed::get_length_prefixed;
use crate::varint::{get_varint32, get_varint64};

/// A cursor that consumes encoded fields from the front of a [`ByteView`].
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    input: ByteView<'a>,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `input`.
    pub fn new(input: impl Into<ByteView<'a>>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the bytes not yet consumed.
    pub fn remaining(&self) -> ByteView<'a> {
        self.input
    }

    /// Returns true once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn take(&mut self, n: usize, what: &str) -> Result<&'a [u8]> {
        if self.input.size() < n {
            return Err(truncated(what, n, self.input.size()));
        }
        let bytes = &self.input.data()[..n];
        self.input.remove_prefix(n);
        Ok(bytes)
    }

    /// Reads a fixed16.
    pub fn fixed16(&mut self) -> Result<u16> {
        self.take(2, "fixed16").map(decode_fixed16)
    }

    /// Reads a fixed32.
    pub fn fixed32(&mut self) -> Result<u32> {
        self.take(4, "fixed32").map(decode_fixed32)
    }

    /// Reads a fixed64.
    pub fn fixed64(&mut self) -> Result<u64> {
        self.take(8, "fixed64").map(decode_fixed64)
    }

    /// Reads a varint32.
    pub fn varint32(&mut self) -> Result<u32> {
        get_varint32(&mut self.input).ok_or_else(|| Status::corruption("bad varint32"))
    }

    /// Reads a varint64.
    pub fn varint64(&mut self) -> Result<u64> {
        get_varint64(&mut self.input).ok_or_else(|| Status::corruption("bad varint64"))
    }

    /// Reads a length-prefixed byte string, aliasing the input.
    pub fn length_prefixed(&mut self) -> Result<ByteView<'a>> {
        get_length_prefixed(&mut self.input)
            .ok_or_else(|| Status::corruption("bad length-prefixed value"))
    }

    /// Fails unless every byte has been consumed.
    pub fn finish(self) -> Result<()> {
        if self.input.is_empty() {
            Ok(())
        } else {
            Err(Status::corruption_with(
                "trailing bytes",
                self.input.size().to_string(),
            ))
        }
    }
}

fn truncated(what: &str, needed: usize, available: usize) -> Status {
    Status::corruption_with(
        format!("truncated {what}"),
        format!("need {needed} bytes, have {available}"),
    )
}
