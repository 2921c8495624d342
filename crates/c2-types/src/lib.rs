//! # c2-types: shared vocabulary for the c2 primitives
//!
//! Two small value types are used by every other c2 crate:
//!
//! - [`ByteView`]: a borrowed, copyable view over a contiguous byte range.
//!   Buffers travel between the coding and I/O layers as views, never as
//!   copies.
//! - [`Status`]: the outcome of a fallible operation. Success carries no
//!   allocation; every error owns a single packed block holding the message
//!   length, the [`Code`], and the message bytes.
//!
//! Fallible operations return [`Result`], whose error side is always a
//! non-OK [`Status`].

mod byte_view;
mod status;

pub use byte_view::ByteView;
pub use status::{Code, Status, StatusDecodeError};

/// Result alias used by every fallible c2 operation.
pub type Result<T, E = Status> = std::result::Result<T, E>;
