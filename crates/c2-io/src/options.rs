//! Writer configuration.

use serde::{Deserialize, Serialize};

use c2_types::{Result, Status};

/// Knobs shared by the POSIX and buffered backings.
///
/// Missing fields take their defaults, so a TOML fragment only needs to name
/// what it changes:
///
/// ```toml
/// buffer_capacity = 65536
/// sync_metadata = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IoOptions {
    /// Bytes held in user space before a buffered writer hits the OS.
    pub buffer_capacity: usize,
    /// Permission bits for newly created files.
    pub file_mode: u32,
    /// Permission bits for newly created directories.
    pub dir_mode: u32,
    /// Use `fsync` rather than `fdatasync` on sync.
    pub sync_metadata: bool,
}

impl IoOptions {
    pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

    /// Parses options from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source)
            .map_err(|e| Status::invalid_argument_with("bad io options", e.message()))
    }
}

impl Default for IoOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: Self::DEFAULT_BUFFER_CAPACITY,
            file_mode: 0o644,
            dir_mode: 0o755,
            sync_metadata: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(IoOptions::from_toml("").unwrap(), IoOptions::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let options = IoOptions::from_toml("buffer_capacity = 65536\nsync_metadata = true").unwrap();
        assert_eq!(options.buffer_capacity, 65536);
        assert!(options.sync_metadata);
        assert_eq!(options.file_mode, 0o644);
        assert_eq!(options.dir_mode, 0o755);
    }

    #[test]
    fn wrong_type_is_invalid_argument() {
        let err = IoOptions::from_toml("buffer_capacity = \"big\"").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_display_string().starts_with("Invalid argument: bad io options: "));
    }

    #[test]
    fn serializes_every_field() {
        let text = toml::to_string(&IoOptions::default()).unwrap();
        assert!(text.contains("buffer_capacity = 8192"));
        assert!(text.contains("file_mode = 420"));
        assert!(text.contains("sync_metadata = false"));
        assert_eq!(IoOptions::from_toml(&text).unwrap(), IoOptions::default());
    }
}
