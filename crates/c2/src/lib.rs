//! # c2
//!
//! Low-level primitives for writing index files.
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                        c2                         │
//! │  ┌────────────┐   ┌────────────┐   ┌───────────┐  │
//! │  │   types    │ → │   coding   │   │    io     │  │
//! │  │(ByteView,  │   │(fixed,     │   │(Sequential│  │
//! │  │ Status)    │   │ varint)    │   │ Io)       │  │
//! │  └────────────┘   └────────────┘   └───────────┘  │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use c2::{ByteView, Decoder, default_io, put_length_prefixed, put_varint64};
//!
//! # fn main() -> c2::Result<()> {
//! let mut record = Vec::new();
//! put_varint64(&mut record, 42);
//! put_length_prefixed(&mut record, ByteView::from("key"));
//!
//! let dir = default_io().test_directory()?;
//! let mut file = default_io().new_writable_file(&dir.join("index.dat"))?;
//! file.append(ByteView::from(&record))?;
//! file.sync()?;
//! file.close()?;
//!
//! let mut decoder = Decoder::new(&record);
//! assert_eq!(decoder.varint64()?, 42);
//! assert_eq!(decoder.length_prefixed()?.data(), b"key");
//! decoder.finish()
//! # }
//! ```
//!
//! # Modules
//!
//! - **Types**: [`ByteView`], [`Status`], [`Code`]
//! - **Coding**: fixed-width and varint encodings, [`Decoder`]
//! - **I/O**: [`SequentialIo`], [`WritableFile`], [`IoWrapper`], [`default_io`]

// Re-export core types from c2-types
pub use c2_types::{ByteView, Code, Result, Status, StatusDecodeError};

// Re-export encodings
pub use c2_coding::{
    Decoder, MAX_VARINT32_LEN, MAX_VARINT64_LEN, decode_fixed16, decode_fixed32, decode_fixed64,
    decode_varint32, decode_varint64, encode_fixed16, encode_fixed32, encode_fixed64,
    encode_length_prefixed, encode_varint32, encode_varint64, get_length_prefixed, get_varint32,
    get_varint64, put_fixed16, put_fixed32, put_fixed64, put_length_prefixed, put_varint32,
    put_varint64, varint_length,
};

// Re-export sequential I/O
pub use c2_io::{
    BufferedIo, BufferedWritableFile, IoOptions, IoWrapper, PosixIo, PosixWritableFile,
    SequentialIo, WritableFile, default_io, status_from_io_error, unbuffered_io,
};
