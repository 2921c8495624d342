//! # c2-io: sequential file output
//!
//! This crate provides a trait-based abstraction over append-only file
//! writing, so callers can choose an I/O strategy without changing how they
//! write:
//!
//! - **[`PosixIo`]**: unbuffered. Every append is one `write` on the file
//!   descriptor; `flush` has nothing to do.
//! - **[`BufferedIo`]**: appends go through a user-space buffer that is
//!   pushed to the OS on `flush`, `sync`, and `close`.
//! - **[`IoWrapper`]**: forwards every call to another backing, so a custom
//!   backing only implements what it changes.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────┐
//! │    callers (index builders)    │
//! │    hold &dyn SequentialIo      │
//! └───────────────┬────────────────┘
//!                 │ new_writable_file
//! ┌───────────────┴────────────────┐
//! │             c2-io              │
//! │  ┌────────────┐  ┌──────────┐  │
//! │  │ BufferedIo │→ │ PosixIo  │  │
//! │  │ (BufWriter)│  │ (direct) │  │
//! │  └────────────┘  └──────────┘  │
//! └────────────────────────────────┘
//! ```
//!
//! Every fallible operation returns [`c2_types::Result`]. OS errors are
//! mapped onto [`Status`](c2_types::Status) codes: "already exists",
//! "not found" and "permission denied" keep their meaning and carry the path;
//! everything else becomes an IO error carrying the path and the OS message.
//!
//! Prefer passing a `&dyn SequentialIo` to whatever needs to create files.
//! [`default_io`] and [`unbuffered_io`] exist for the outermost entry point.

mod backend;
mod buffered;
mod error;
mod global;
mod options;
mod posix;
mod wrapper;

pub use backend::{SequentialIo, WritableFile};
pub use buffered::{BufferedIo, BufferedWritableFile};
pub use error::status_from_io_error;
pub use global::{default_io, unbuffered_io};
pub use options::IoOptions;
pub use posix::{PosixIo, PosixWritableFile};
pub use wrapper::IoWrapper;
