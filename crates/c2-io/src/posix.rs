//! Unbuffered POSIX backing.
//!
//! Each append is handed straight to the file descriptor, so `flush` has
//! nothing to do. File and directory permission bits come from
//! [`IoOptions`].

use std::ffi::OsString;
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use c2_types::{ByteView, Result};
use tracing::{debug, trace};

use crate::backend::{SequentialIo, WritableFile};
use crate::error::{closed_file, status_from_io_error, sync_failed};
use crate::options::IoOptions;

/// Unbuffered [`SequentialIo`] over `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct PosixIo {
    options: IoOptions,
}

impl PosixIo {
    /// Creates a backing with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backing with explicit options.
    pub fn with_options(options: IoOptions) -> Self {
        Self { options }
    }

    /// Returns the options this backing was built with.
    pub fn options(&self) -> &IoOptions {
        &self.options
    }

    /// Opens `path` for writing, truncating or creating it.
    pub(crate) fn open_truncated(&self, path: &Path) -> Result<File> {
        let mut opts = OpenOptions::new();
        opts.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(self.options.file_mode);
        }

        let file = opts
            .open(path)
            .map_err(|e| status_from_io_error(path, &e))?;
        debug!(path = %path.display(), "created writable file");
        Ok(file)
    }
}

impl SequentialIo for PosixIo {
    fn new_writable_file(&self, path: &Path) -> Result<Box<dyn WritableFile>> {
        let file = self.open_truncated(path)?;
        Ok(Box::new(PosixWritableFile::from_file(
            path.to_path_buf(),
            file,
            self.options.sync_metadata,
        )))
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        let mut builder = DirBuilder::new();

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.options.dir_mode);
        }

        builder
            .create(path)
            .map_err(|e| status_from_io_error(path, &e))?;
        debug!(path = %path.display(), "created directory");
        Ok(())
    }

    fn test_directory(&self) -> Result<PathBuf> {
        static TEST_DIR: OnceLock<PathBuf> = OnceLock::new();

        let dir = TEST_DIR.get_or_init(|| {
            resolve_test_directory(
                std::env::var_os("C2_TEST_TMPDIR"),
                std::env::var_os("TEST_TMPDIR"),
            )
        });
        std::fs::create_dir_all(dir).map_err(|e| status_from_io_error(dir, &e))?;
        Ok(dir.clone())
    }
}

/// Picks the scratch directory: the crate-specific override, then the
/// generic one, then a per-process directory under the system temp dir.
/// Empty values count as unset.
pub(crate) fn resolve_test_directory(
    c2_tmpdir: Option<OsString>,
    tmpdir: Option<OsString>,
) -> PathBuf {
    c2_tmpdir
        .into_iter()
        .chain(tmpdir)
        .find(|dir| !dir.is_empty())
        .map_or_else(
            || std::env::temp_dir().join(format!("c2test-{}", std::process::id())),
            PathBuf::from,
        )
}

/// Writer that issues one OS write per non-empty append.
#[derive(Debug)]
pub struct PosixWritableFile {
    path: PathBuf,
    /// `None` once closed.
    file: Option<File>,
    sync_metadata: bool,
}

impl PosixWritableFile {
    pub(crate) fn from_file(path: PathBuf, file: File, sync_metadata: bool) -> Self {
        Self {
            path,
            file: Some(file),
            sync_metadata,
        }
    }

    /// Returns the path the writer was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_mut(&mut self) -> Result<&mut File> {
        match self.file.as_mut() {
            Some(file) => Ok(file),
            None => Err(closed_file(&self.path)),
        }
    }
}

impl WritableFile for PosixWritableFile {
    fn append(&mut self, data: ByteView<'_>) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        let file = self.file_mut()?;
        file.write_all(data.data())
            .map_err(|e| status_from_io_error(&self.path, &e))?;
        trace!(path = %self.path.display(), len = data.size(), "append");
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.file_mut().map(|_| ())
    }

    fn sync(&mut self) -> Result<()> {
        let sync_metadata = self.sync_metadata;
        let file = self.file_mut()?;
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
        // Dropping the descriptor closes it; std discards close(2) errors.
        if self.file.take().is_some() {
            debug!(path = %self.path.display(), "closed writable file");
        }
        Ok(())
    }
}

impl Drop for PosixWritableFile {
    fn drop(&mut self) {
        if self.file.is_some() {
            trace!(path = %self.path.display(), "writer dropped without close");
        }
    }
}
