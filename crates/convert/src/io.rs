//! Stream conversion.
//!
//! This module drives [`parse_line`] and [`format_line`] over a whole input
//! stream, one line at a time.

use crate::error::{ParseError, ParseErrorKind, Result, StreamError};
use crate::format::format_line;
use crate::parser::parse_line;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Counters for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Lines read from the input.
    pub lines_read: usize,
    /// Lines converted and written to the output.
    pub converted: usize,
    /// Lines rejected by the parser.
    pub skipped: usize,
}

/// Read one `\n`-terminated line into `buf`, stripping the terminator and a
/// trailing `\r`. Returns `false` at end of input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> std::io::Result<bool> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}

fn convert(raw: &[u8]) -> std::result::Result<String, ParseError> {
    let line = std::str::from_utf8(raw).map_err(|_| {
        ParseError::new(String::from_utf8_lossy(raw), ParseErrorKind::InvalidUtf8)
    })?;
    parse_line(line).map(|result| format_line(&result))
}

/// Convert every dbench line in `input` into a benchstat line on `output`.
///
/// Lines that do not parse are logged at `warn` with the raw text and the
/// reason, then skipped. They never reach `output` and never stop the run.
///
/// # Errors
///
/// Returns [`StreamError::Read`] if reading `input` fails and
/// [`StreamError::Write`] if writing or flushing `output` fails. End of
/// input is not an error.
pub fn process<R, W>(mut input: R, mut output: W) -> Result<ProcessSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = ProcessSummary::default();
    let mut buf = Vec::new();

    while read_line(&mut input, &mut buf).map_err(StreamError::Read)? {
        summary.lines_read += 1;
        let line_no = summary.lines_read;

        let formatted = match convert(&buf) {
            Ok(formatted) => formatted,
            Err(e) => {
                warn!(line_no, line = %e.line, reason = %e.kind, "skipping line");
                summary.skipped += 1;
                continue;
            }
        };

        writeln!(output, "{}", formatted)
            .map_err(|source| StreamError::Write { line: line_no, source })?;
        debug!(line_no, output = %formatted, "converted line");
        summary.converted += 1;
    }

    output.flush().map_err(|source| StreamError::Write {
        line: summary.lines_read,
        source,
    })?;

    info!(
        lines_read = summary.lines_read,
        converted = summary.converted,
        skipped = summary.skipped,
        "conversion finished"
    );
    Ok(summary)
}
