//! Process-wide backings.

use std::sync::OnceLock;

use tracing::debug;

use crate::backend::SequentialIo;
use crate::buffered::BufferedIo;
use crate::posix::PosixIo;

struct Globals {
    buffered: BufferedIo,
    unbuffered: PosixIo,
}

fn globals() -> &'static Globals {
    static GLOBALS: OnceLock<Globals> = OnceLock::new();
    GLOBALS.get_or_init(|| {
        debug!("initialising process-wide sequential io");
        Globals {
            buffered: BufferedIo::default(),
            unbuffered: PosixIo::default(),
        }
    })
}

/// Returns the process-wide buffered backing.
///
/// Concurrent first calls all observe the same fully built value.
pub fn default_io() -> &'static dyn SequentialIo {
    &globals().buffered
}

/// Returns the process-wide unbuffered backing.
pub fn unbuffered_io() -> &'static dyn SequentialIo {
    &globals().unbuffered
}
