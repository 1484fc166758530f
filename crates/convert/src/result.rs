//! Benchmark result types.
//!
//! This module provides the [`BenchResult`] record extracted from a single
//! dbench report line.

use chrono::Duration;

/// One benchmark's summary statistics, as reported on a single line.
///
/// Durations are signed with nanosecond resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchResult {
    /// Benchmark identifier, e.g. `basic/increment`.
    pub name: String,
    /// Average duration per sample.
    pub average: Duration,
    /// Number of samples collected.
    pub num_samples: u32,
    /// Standard deviation of the samples.
    pub std_dev: Duration,
    /// Fastest sample.
    pub min: Duration,
    /// Slowest sample.
    pub max: Duration,
}

impl BenchResult {
    /// Average duration as a whole number of nanoseconds.
    ///
    /// Saturates at `i64::MAX`, which the parser never produces.
    pub fn average_nanos(&self) -> i64 {
        self.average.num_nanoseconds().unwrap_or(i64::MAX)
    }
}
