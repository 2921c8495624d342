//! Helpers shared by c2 test suites.
//!
//! - [`tmp_dir`]: the process-wide scratch directory
//! - [`random_seed`]: a reproducible seed, overridable from the environment
//! - [`init_tracing`]: routes `tracing` output through the test writer

use std::path::PathBuf;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Seed used when the environment does not provide a usable one.
pub const DEFAULT_SEED: u64 = 301;

/// Returns the scratch directory of the default I/O backing, creating it if
/// needed.
///
/// # Panics
///
/// Panics if the directory cannot be created.
pub fn tmp_dir() -> PathBuf {
    match c2_io::default_io().test_directory() {
        Ok(dir) => dir,
        Err(status) => panic!("cannot create test directory: {status}"),
    }
}

/// Returns the seed named by `C2_TEST_RANDOM_SEED`, else `TEST_RANDOM_SEED`,
/// else [`DEFAULT_SEED`].
pub fn random_seed() -> u64 {
    let value = std::env::var("C2_TEST_RANDOM_SEED")
        .or_else(|_| std::env::var("TEST_RANDOM_SEED"))
        .ok();
    parse_seed(value.as_deref())
}

/// Parses a seed. Missing, unparsable, and non-positive values give
/// [`DEFAULT_SEED`].
pub fn parse_seed(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|&seed| seed > 0)
        .map_or(DEFAULT_SEED, |seed| seed as u64)
}

/// Installs a fmt subscriber filtered by `RUST_LOG` (default `warn`) that
/// writes through libtest's capture. Safe to call from every test.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    // Another test may have installed it already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
