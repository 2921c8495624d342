//! Buffered backing.
//!
//! Appends accumulate in a `BufWriter` of `buffer_capacity` bytes and reach
//! the OS when the buffer fills or on `flush`, `sync`, or `close`. File
//! creation goes through the wrapped [`PosixIo`]; directory creation and
//! the scratch directory are forwarded to it by an [`IoWrapper`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use c2_types::{ByteView, Result};
use tracing::{debug, trace, warn};

use crate::backend::{SequentialIo, WritableFile};
use crate::error::{closed_file, status_from_io_error, sync_failed};
use crate::options::IoOptions;
use crate::posix::PosixIo;
use crate::wrapper::IoWrapper;

/// [`SequentialIo`] that hands out buffered writers.
#[derive(Debug, Clone, Default)]
pub struct BufferedIo {
    base: IoWrapper<PosixIo>,
    options: IoOptions,
}

impl BufferedIo {
    /// Wraps `base`. `base` decides how files and directories are created;
    /// `options` decides how the writers buffer and sync.
    pub fn new(base: PosixIo, options: IoOptions) -> Self {
        Self {
            base: IoWrapper::new(base),
            options,
        }
    }

    /// Builds the base backing and the buffering from the same options.
    pub fn from_options(options: IoOptions) -> Self {
        Self::new(PosixIo::with_options(options.clone()), options)
    }

    /// Returns the wrapped unbuffered backing.
    pub fn base(&self) -> &PosixIo {
        self.base.target()
    }
}

impl SequentialIo for BufferedIo {
    fn new_writable_file(&self, path: &Path) -> Result<Box<dyn WritableFile>> {
        let file = self.base().open_truncated(path)?;
        Ok(Box::new(BufferedWritableFile::from_file(
            path.to_path_buf(),
            file,
            &self.options,
        )))
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        self.base.create_dir(path)
    }

    fn test_directory(&self) -> Result<PathBuf> {
        self.base.test_directory()
    }
}

/// Writer that batches appends in user space.
#[derive(Debug)]
pub struct BufferedWritableFile {
    path: PathBuf,
    /// `None` once closed.
    writer: Option<BufWriter<File>>,
    sync_metadata: bool,
}

impl BufferedWritableFile {
    pub(crate) fn from_file(path: PathBuf, file: File, options: &IoOptions) -> Self {
        Self {
            path,
            writer: Some(BufWriter::with_capacity(options.buffer_capacity, file)),
            sync_metadata: options.sync_metadata,
        }
    }

    /// Returns the path the writer was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes appended but not yet handed to the OS.
    pub fn buffered_len(&self) -> usize {
        self.writer.as_ref().map_or(0, |w| w.buffer().len())
    }

    fn writer_mut(&mut self) -> Result<&mut BufWriter<File>> {
        match self.writer.as_mut() {
            Some(writer) => Ok(writer),
            None => Err(closed_file(&self.path)),
        }
    }
}

impl WritableFile for BufferedWritableFile {
    fn append(&mut self, data: ByteView<'_>) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        let writer = self.writer_mut()?;
        writer
            .write_all(data.data())
            .map_err(|e| status_from_io_error(&self.path, &e))?;
        trace!(path = %self.path.display(), len = data.size(), "append");
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let writer = self.writer_mut()?;
        let pending = writer.buffer().len();
        writer
            .flush()
            .map_err(|e| status_from_io_error(&self.path, &e))?;
        trace!(path = %self.path.display(), pending, "flush");
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.flush()?;
        let sync_metadata = self.sync_metadata;
        let file = self.writer_mut()?.get_ref();
        let synced = if sync_metadata {
            file.sync_all()
        } else {
            file.sync_data()
        };
        synced.map_err(|e| sync_failed(&self.path, &e))?;
        trace!(path = %self.path.display(), sync_metadata, "sync");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let Some(writer) = self.writer.take() else {
            return Ok(());
        };
        // The file is released whether or not the final flush succeeds.
        writer
            .into_inner()
            .map_err(|e| status_from_io_error(&self.path, e.error()))?;
        debug!(path = %self.path.display(), "closed writable file");
        Ok(())
    }
}

impl Drop for BufferedWritableFile {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.as_mut()
            && let Err(e) = writer.flush()
        {
            warn!(path = %self.path.display(), error = %e, "dropped writer failed to flush");
        }
    }
}
