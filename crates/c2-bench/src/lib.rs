//! # c2-bench: Performance benchmarks for the c2 primitives
//!
//! ## Benchmarks
//!
//! - **coding**: fixed, varint and length-prefixed encode/decode
//! - **io**: buffered vs unbuffered appends
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench -p c2-bench
//! cargo bench -p c2-bench --bench coding -- --save-baseline main
//! ```
//!
//! Inputs come from [`Workload`], seeded so runs are comparable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic input generator for benchmarks.
#[derive(Debug, Clone)]
pub struct Workload {
    rng: SmallRng,
}

impl Workload {
    /// Creates a generator; equal seeds yield equal inputs.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Values whose varint lengths spread evenly over 1..=10 bytes.
    pub fn varints(&mut self, count: usize) -> Vec<u64> {
        (0..count)
            .map(|_| {
                let groups: u32 = self.rng.gen_range(1..=10);
                let mask = u64::MAX >> (64 - (7 * groups).min(64));
                self.rng.r#gen::<u64>() & mask
            })
            .collect()
    }

    /// A record of `len` pseudo-random bytes.
    pub fn record(&mut self, len: usize) -> Vec<u8> {
        let mut record = vec![0u8; len];
        self.rng.fill(record.as_mut_slice());
        record
    }
}
