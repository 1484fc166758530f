//! CLI for dbench2benchstat.
//!
//! Reads dbench result lines from stdin (or `--input`) and writes benchstat
//! lines to stdout (or `--output`). Lines that do not parse are reported on
//! stderr and skipped; only a failing stream makes the command fail.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use dbench2benchstat::ProcessSummary;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

pub use logging::LogFormat;

/// Convert dbench benchmark results into benchstat input.
#[derive(Parser, Debug)]
#[command(name = "dbench2benchstat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read dbench output from this file instead of stdin.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write benchstat lines to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. `warn`, `debug`).
    #[arg(long, env = "DBENCH2BENCHSTAT_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, env = "DBENCH2BENCHSTAT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    fn open_input(&self) -> Result<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("could not open input {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("could not create output {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }

    /// Run the conversion described by these arguments.
    ///
    /// Logging must already be initialized for diagnostics to be visible.
    pub fn execute(&self) -> Result<ProcessSummary> {
        let input = self.open_input()?;
        let output = self.open_output()?;
        let summary =
            dbench2benchstat::process(input, output).context("could not process input")?;
        Ok(summary)
    }
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, including runs where some lines were
/// skipped, or an error if a stream could not be opened, read or written.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_format);
    cli.execute()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const LINE: &str = "basic/increment -> avg 0.00927782162588819ms out of 2534 samples. (std dev 0.00161196365508829, min 0.008, max 0.082)";

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["dbench2benchstat"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_cli_parses_paths_and_format() {
        let cli = Cli::try_parse_from([
            "dbench2benchstat",
            "-i",
            "in.txt",
            "--output",
            "out.txt",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["dbench2benchstat", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_text_log_format() {
        let cli = Cli::try_parse_from(["dbench2benchstat", "--log-format", "text"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Text);
        assert!(Cli::try_parse_from(["dbench2benchstat", "--log-format", "pretty"]).is_err());
    }

    #[test]
    fn test_execute_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("dbench.txt");
        let output = dir.path().join("bench.txt");
        fs::write(&input, format!("warming up\n{LINE}\n")).unwrap();

        let cli = Cli::try_parse_from([
            "dbench2benchstat",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .unwrap();
        let summary = cli.execute().unwrap();

        assert_eq!(summary.converted, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Benchmarkbasic/increment\t2534\t9277 ns/op\n"
        );
    }

    #[test]
    fn test_execute_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let cli = Cli {
            input: Some(missing),
            output: Some(dir.path().join("out.txt")),
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        };
        let err = cli.execute().unwrap_err();
        assert!(err.to_string().contains("could not open input"));
    }
}
