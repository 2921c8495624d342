//! Mapping from OS errors to statuses.

use std::io::{self, ErrorKind};
use std::path::Path;

use c2_types::Status;

/// Converts an OS error raised while operating on `context` into a status.
///
/// The three kinds callers commonly branch on keep their own codes; anything
/// else is an IO error with the OS description as the second message.
pub fn status_from_io_error(context: &Path, err: &io::Error) -> Status {
    let context = context.display().to_string();
    match err.kind() {
        ErrorKind::AlreadyExists => Status::already_exists(context),
        ErrorKind::NotFound => Status::not_found(context),
        ErrorKind::PermissionDenied => Status::access_denied(context),
        _ => Status::io_error_with(context, err.to_string()),
    }
}

pub(crate) fn closed_file(context: &Path) -> Status {
    Status::io_error_with(context.display().to_string(), "file is closed")
}

/// Status for a failed `fsync`/`fdatasync`. The `sync:` prefix separates it
/// from a failed write of buffered bytes.
pub(crate) fn sync_failed(context: &Path, err: &io::Error) -> Status {
    Status::io_error_with(context.display().to_string(), format!("sync: {err}"))
}
