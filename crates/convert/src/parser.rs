//! Line parsing for dbench reports.
//!
//! A dbench result line looks like:
//!
//! ```text
//! basic/increment -> avg 0.00927782162588819ms out of 2534 samples. (std dev 0.00161196365508829, min 0.008, max 0.082)
//! ```
//!
//! The whole line must match. Whitespace runs between tokens and around the
//! line are tolerated.

use crate::duration::{parse_duration, parse_millis};
use crate::error::{ParseError, ParseErrorKind};
use crate::result::BenchResult;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<name>\S+)\s+->\s+avg\s+(?P<avg>\S+ms)\s+out\s+of\s+(?P<samples>\S+)\s+samples\.",
        r"\s+\(\s*std\s+dev\s+(?P<std_dev>[^\s,]+)\s*,\s+min\s+(?P<min>[^\s,]+)\s*,",
        r"\s+max\s+(?P<max>[^\s)]+)\s*\)\s*$",
    ))
    .expect("line pattern is valid")
});

/// Parses one report line into a [`BenchResult`].
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the line when it does not match the
/// expected shape or when any numeric field fails to parse.
pub fn parse_line(line: &str) -> Result<BenchResult, ParseError> {
    let caps = LINE
        .captures(line)
        .ok_or_else(|| ParseError::new(line, ParseErrorKind::NoMatch))?;

    let average = parse_duration(&caps["avg"])
        .map_err(|e| ParseError::new(line, ParseErrorKind::Average(e)))?;

    let samples = &caps["samples"];
    if !samples.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(
            line,
            ParseErrorKind::Samples(samples.to_string()),
        ));
    }
    // Counts above i32::MAX are rejected.
    let num_samples = samples
        .parse::<i32>()
        .ok()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ParseError::new(line, ParseErrorKind::Samples(samples.to_string())))?;

    let std_dev = parse_millis(&caps["std_dev"])
        .map_err(|e| ParseError::new(line, ParseErrorKind::StdDev(e)))?;
    let min =
        parse_millis(&caps["min"]).map_err(|e| ParseError::new(line, ParseErrorKind::Min(e)))?;
    let max =
        parse_millis(&caps["max"]).map_err(|e| ParseError::new(line, ParseErrorKind::Max(e)))?;

    Ok(BenchResult {
        name: caps["name"].to_string(),
        average,
        num_samples,
        std_dev,
        min,
        max,
    })
}
