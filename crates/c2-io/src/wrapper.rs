//! Forwarding backing.
//!
//! [`IoWrapper`] passes every call to its target. A backing that changes
//! one operation holds a wrapper, implements that operation itself, and
//! hands the rest to the wrapper.

use std::path::{Path, PathBuf};

use c2_types::Result;

use crate::backend::{SequentialIo, WritableFile};

/// [`SequentialIo`] that forwards every call to `target`.
#[derive(Debug, Clone, Default)]
pub struct IoWrapper<T> {
    target: T,
}

impl<T: SequentialIo> IoWrapper<T> {
    /// Wraps `target`.
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// Returns the backing calls are forwarded to.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Unwraps the target.
    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T: SequentialIo> SequentialIo for IoWrapper<T> {
    fn new_writable_file(&self, path: &Path) -> Result<Box<dyn WritableFile>> {
        self.target.new_writable_file(path)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        self.target.create_dir(path)
    }

    fn test_directory(&self) -> Result<PathBuf> {
        self.target.test_directory()
    }
}

#[cfg(test)]
mod tests {
    use c2_types::Status;

    use super::*;
    use crate::PosixIo;

    /// Refuses directory creation, forwards everything else.
    struct NoNewDirs {
        inner: IoWrapper<PosixIo>,
    }

    impl SequentialIo for NoNewDirs {
        fn new_writable_file(&self, path: &Path) -> Result<Box<dyn WritableFile>> {
            self.inner.new_writable_file(path)
        }

        fn create_dir(&self, path: &Path) -> Result<()> {
            Err(Status::not_supported_with(path.display().to_string(), "read-only layout"))
        }

        fn test_directory(&self) -> Result<PathBuf> {
            self.inner.test_directory()
        }
    }

    #[test]
    fn overriding_one_call_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let io = NoNewDirs {
            inner: IoWrapper::new(PosixIo::new()),
        };

        let err = io.create_dir(&dir.path().join("sub")).unwrap_err();
        assert!(err.is_not_supported());
        assert!(!dir.path().join("sub").exists());

        let path = dir.path().join("forwarded.log");
        let mut file = io.new_writable_file(&path).unwrap();
        file.append("through the wrapper".into()).unwrap();
        file.close().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"through the wrapper");

        assert_eq!(
            io.test_directory().unwrap(),
            io.inner.target().test_directory().unwrap()
        );
    }

    #[test]
    fn wraps_a_boxed_backing() {
        let dir = tempfile::tempdir().unwrap();
        let target: Box<dyn SequentialIo> = Box::new(PosixIo::new());
        let io = IoWrapper::new(target);

        let sub = dir.path().join("boxed");
        io.create_dir(&sub).unwrap();
        assert!(sub.is_dir());
        assert!(io.create_dir(&sub).unwrap_err().is_already_exists());
    }

    #[test]
    fn wraps_a_borrowed_backing() {
        let io = IoWrapper::new(crate::unbuffered_io());
        assert!(io.test_directory().unwrap().is_dir());
    }
}
