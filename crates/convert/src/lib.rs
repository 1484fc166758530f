//! Convert dbench result lines into benchstat input.
//!
//! dbench reports one benchmark per line:
//!
//! ```text
//! basic/increment -> avg 0.00927782162588819ms out of 2534 samples. (std dev 0.00161196365508829, min 0.008, max 0.082)
//! ```
//!
//! benchstat expects the Go benchmark format:
//!
//! ```text
//! Benchmarkbasic/increment	2534	9277 ns/op
//! ```
//!
//! # Quick Start
//!
//! ```
//! use dbench2benchstat::process;
//!
//! let input = "basic/increment -> avg 0.00927782162588819ms out of 2534 samples. \
//!              (std dev 0.00161196365508829, min 0.008, max 0.082)\n";
//! let mut output = Vec::new();
//! let summary = process(input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(summary.converted, 1);
//! assert_eq!(output, b"Benchmarkbasic/increment\t2534\t9277 ns/op\n");
//! ```
//!
//! # Modules
//!
//! - [`result`] - The `BenchResult` record
//! - [`duration`] - Duration literal parsing
//! - [`parser`] - dbench line parsing
//! - [`format`] - benchstat line rendering
//! - [`io`] - Stream conversion
//! - [`error`] - Error types

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod duration;
pub mod error;
pub mod format;
pub mod io;
pub mod parser;
pub mod result;

pub use error::{ParseError, ParseErrorKind, StreamError};
pub use format::format_line;
pub use io::{process, ProcessSummary};
pub use parser::parse_line;
pub use result::BenchResult;
