//! Output generation for converted results.
//!
//! This module renders a [`BenchResult`] as one line of the Go benchmark
//! output format that `benchstat` reads.

use crate::result::BenchResult;

/// Prefix benchstat requires on every benchmark name.
pub const NAME_PREFIX: &str = "Benchmark";

/// Render `result` as a benchstat line, without the trailing newline.
///
/// Only the name, sample count and average are emitted:
///
/// ```
/// # use chrono::Duration;
/// # use dbench2benchstat::{format_line, BenchResult};
/// let result = BenchResult {
///     name: "basic/increment".to_string(),
///     average: Duration::nanoseconds(9277),
///     num_samples: 2534,
///     std_dev: Duration::nanoseconds(1611),
///     min: Duration::microseconds(8),
///     max: Duration::microseconds(82),
/// };
/// assert_eq!(format_line(&result), "Benchmarkbasic/increment\t2534\t9277 ns/op");
/// ```
pub fn format_line(result: &BenchResult) -> String {
    format!(
        "{}{}\t{}\t{} ns/op",
        NAME_PREFIX,
        result.name,
        result.num_samples,
        result.average_nanos()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn result(name: &str, average_ns: i64, num_samples: u32) -> BenchResult {
        BenchResult {
            name: name.to_string(),
            average: Duration::nanoseconds(average_ns),
            num_samples,
            std_dev: Duration::nanoseconds(1),
            min: Duration::nanoseconds(2),
            max: Duration::nanoseconds(3),
        }
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(&result("basic/setByteLong", 275580, 2533)),
            "Benchmarkbasic/setByteLong\t2533\t275580 ns/op"
        );
    }

    #[test]
    fn test_format_line_omits_spread() {
        let line = format_line(&result("a", 10, 1));
        assert_eq!(line.split('\t').count(), 3);
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_format_line_zero_samples() {
        assert_eq!(format_line(&result("empty", 0, 0)), "Benchmarkempty\t0\t0 ns/op");
    }
}
