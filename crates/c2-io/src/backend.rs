//! Sequential I/O traits.
//!
//! The [`SequentialIo`] trait abstracts how append-only files are created:
//! - [`PosixIo`](crate::PosixIo): one OS write per append
//! - [`BufferedIo`](crate::BufferedIo): user-space buffering in front of it
//!
//! Index builders hold a `&dyn SequentialIo` and never see which one they got.

use std::path::{Path, PathBuf};

use c2_types::{ByteView, Result};

/// Creates sequential writers and the directories they live in.
///
/// Implementations must be usable from several threads at once; each writer
/// they hand out is owned by exactly one caller.
pub trait SequentialIo: Send + Sync {
    /// Creates (or truncates) the file at `path` and opens it for appending.
    ///
    /// Fails with `NotFound` when the parent directory does not exist and
    /// `AccessDenied` when the caller may not create the file.
    fn new_writable_file(&self, path: &Path) -> Result<Box<dyn WritableFile>>;

    /// Creates one directory level at `path`.
    ///
    /// Fails with `AlreadyExists` when `path` exists.
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Returns a scratch directory for tests, creating it if needed.
    ///
    /// The same path is returned for the lifetime of the process.
    fn test_directory(&self) -> Result<PathBuf>;
}

/// An append-only file.
///
/// Bytes become durable only after [`sync`](WritableFile::sync). After
/// [`close`](WritableFile::close) every other method fails with an IO error;
/// closing again succeeds.
pub trait WritableFile: Send {
    /// Appends `data` at the end of the file.
    fn append(&mut self, data: ByteView<'_>) -> Result<()>;

    /// Pushes buffered bytes to the OS.
    fn flush(&mut self) -> Result<()>;

    /// Flushes, then asks the OS to persist the file's data.
    fn sync(&mut self) -> Result<()>;

    /// Flushes and releases the file.
    fn close(&mut self) -> Result<()>;
}

impl<T: SequentialIo + ?Sized> SequentialIo for &T {
    fn new_writable_file(&self, path: &Path) -> Result<Box<dyn WritableFile>> {
        (**self).new_writable_file(path)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        (**self).create_dir(path)
    }

    fn test_directory(&self) -> Result<PathBuf> {
        (**self).test_directory()
    }
}

impl<T: SequentialIo + ?Sized> SequentialIo for Box<T> {
    fn new_writable_file(&self, path: &Path) -> Result<Box<dyn WritableFile>> {
        (**self).new_writable_file(path)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        (**self).create_dir(path)
    }

    fn test_directory(&self) -> Result<PathBuf> {
        (**self).test_directory()
    }
}
