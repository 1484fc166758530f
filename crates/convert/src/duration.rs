//! Duration literal parsing.
//!
//! Two shapes appear in dbench reports:
//!
//! - standard duration literals such as `0.00927782162588819ms` or `1h2m3s`,
//!   parsed by [`parse_duration`];
//! - bare decimals such as `0.008` whose unit is implicitly milliseconds,
//!   parsed by [`parse_millis`].
//!
//! Both produce exact signed nanosecond durations and truncate any
//! sub-nanosecond remainder toward zero.

use chrono::Duration;
use std::num::ParseFloatError;
use thiserror::Error;

/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: i64 = 1_000_000;

/// Errors that can occur while parsing a duration literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The literal was empty (or only a sign).
    #[error("empty duration literal")]
    Empty,

    /// A component did not start with a number.
    #[error("invalid duration literal: {0:?}")]
    Invalid(String),

    /// A number was not followed by a unit.
    #[error("missing unit in duration literal: {0:?}")]
    MissingUnit(String),

    /// The unit is not one of ns, us, µs, ms, s, m, h.
    #[error("unknown unit {unit:?} in duration literal {literal:?}")]
    UnknownUnit { unit: String, literal: String },

    /// The value does not fit in 64-bit nanoseconds.
    #[error("duration out of range: {0:?}")]
    Overflow(String),

    /// A bare millisecond value was not a decimal number.
    #[error("could not parse {literal:?} as a decimal: {source}")]
    Decimal {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    /// A bare millisecond value was NaN or infinite.
    #[error("non-finite duration value: {0:?}")]
    NotFinite(String),
}

/// Result type for duration parsing.
pub type Result<T> = std::result::Result<T, DurationError>;

const SIGN_LIMIT: u64 = 1 << 63;

fn unit_nanos(unit: &str) -> Option<u64> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => 1_000,
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60 * 1_000_000_000,
        "h" => 60 * 60 * 1_000_000_000,
        _ => return None,
    };
    Some(nanos)
}

/// Consumes leading ASCII digits as an integer. `None` on overflow.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    for b in s[..end].bytes() {
        value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
        if value > SIGN_LIMIT {
            return None;
        }
    }
    Some((value, &s[end..]))
}

/// Consumes leading ASCII digits as a fraction, returning the digits read as
/// an integer together with its power-of-ten scale. Digits past 63-bit
/// precision are consumed and dropped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    let mut scale = 1.0_f64;
    let mut saturated = false;
    for b in s[..end].bytes() {
        if saturated {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .filter(|v| *v <= SIGN_LIMIT)
        {
            Some(next) => {
                value = next;
                scale *= 10.0;
            }
            None => saturated = true,
        }
    }
    (value, scale, &s[end..])
}

/// Parses a standard duration literal such as `300ms`, `-1.5h` or `2h45m`.
///
/// A literal is an optional sign followed by one or more decimal numbers, each
/// with a unit suffix. The single character `0` is accepted without a unit.
pub fn parse_duration(literal: &str) -> Result<Duration> {
    let mut s = literal;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(Duration::zero());
    }
    if s.is_empty() {
        return Err(DurationError::Empty);
    }

    let invalid = || DurationError::Invalid(literal.to_string());
    let overflow = || DurationError::Overflow(literal.to_string());

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let before = s.len();
        let (whole, rest) = leading_int(s).ok_or_else(overflow)?;
        let has_whole = rest.len() != before;
        s = rest;

        let mut frac = 0;
        let mut scale = 1.0;
        let mut has_frac = false;
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            let (f, sc, rest) = leading_fraction(rest);
            has_frac = rest.len() != before;
            frac = f;
            scale = sc;
            s = rest;
        }
        if !has_whole && !has_frac {
            return Err(invalid());
        }

        let unit_end = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_end == 0 {
            return Err(DurationError::MissingUnit(literal.to_string()));
        }
        let unit_text = &s[..unit_end];
        s = &s[unit_end..];
        let unit = unit_nanos(unit_text).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit_text.to_string(),
            literal: literal.to_string(),
        })?;

        if whole > SIGN_LIMIT / unit {
            return Err(overflow());
        }
        let mut value = whole * unit;
        if frac > 0 {
            // Truncates toward zero.
            value += (frac as f64 * (unit as f64 / scale)) as u64;
            if value > SIGN_LIMIT {
                return Err(overflow());
            }
        }
        total = total
            .checked_add(value)
            .filter(|t| *t <= SIGN_LIMIT)
            .ok_or_else(overflow)?;
    }

    let nanos = if negative {
        // `total` is at most 2^63, so the wrapping negation lands on i64::MIN
        // only for exactly that value.
        (total as i64).wrapping_neg()
    } else {
        i64::try_from(total).map_err(|_| overflow())?
    };
    Ok(Duration::nanoseconds(nanos))
}

/// Parses a bare decimal whose implicit unit is milliseconds, e.g. `0.008`.
///
/// The value is scaled to nanoseconds and truncated toward zero, so
/// `0.00161196365508829` becomes 1611ns.
pub fn parse_millis(literal: &str) -> Result<Duration> {
    let raw: f64 = literal.parse().map_err(|source| DurationError::Decimal {
        literal: literal.to_string(),
        source,
    })?;
    if !raw.is_finite() {
        return Err(DurationError::NotFinite(literal.to_string()));
    }

    let nanos = NANOS_PER_MILLI as f64 * raw;
    if nanos >= i64::MAX as f64 || nanos < i64::MIN as f64 {
        return Err(DurationError::Overflow(literal.to_string()));
    }
    Ok(Duration::nanoseconds(nanos as i64))
}
