//! Strict ISO-8601 Timestamp Parsing
//!
//! Accepted grammar, nothing else:
//!
//! ```text
//! YYYY-MM-DD(T| )HH:MM:SS[.f+][Z|(+|-)HH:MM]
//! ```
//!
//! Every field is fixed width. The separator is an uppercase `T` or a single
//! space, the zone designator an uppercase `Z` or a numeric offset. Without a
//! zone the time is read as UTC. Leading/trailing whitespace, signed years,
//! lowercase `t`/`z`, date-only strings and locale formats are rejected.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Why a timestamp was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimestampError {
    /// Input does not follow the fixed-width grammar
    #[error("timestamp does not match YYYY-MM-DD[T| ]HH:MM:SS[.f][Z|+HH:MM]")]
    Shape,

    /// Shape is right but a field is out of range (month 13, Feb 30, ...)
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),
}

/// Parse a timestamp into a UTC instant
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let has_zone = check_shape(raw.as_bytes())?;

    // first 19 bytes are ASCII, so byte 10 is a char boundary
    let normalized = format!("{}T{}", &raw[..10], &raw[11..]);

    if has_zone {
        Ok(DateTime::parse_from_rfc3339(&normalized)?.with_timezone(&Utc))
    } else {
        Ok(NaiveDateTime::parse_from_str(&normalized, NAIVE_FORMAT)?.and_utc())
    }
}

/// Validate the fixed-width layout; returns whether a zone designator follows
fn check_shape(bytes: &[u8]) -> Result<bool, TimestampError> {
    if bytes.len() < 19 {
        return Err(TimestampError::Shape);
    }

    for (i, &c) in bytes[..19].iter().enumerate() {
        let ok = match i {
            4 | 7 => c == b'-',
            10 => c == b'T' || c == b' ',
            13 | 16 => c == b':',
            _ => c.is_ascii_digit(),
        };
        if !ok {
            return Err(TimestampError::Shape);
        }
    }

    let mut rest = &bytes[19..];
    if let Some((&b'.', fraction)) = rest.split_first() {
        let digits = fraction.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return Err(TimestampError::Shape);
        }
        rest = &fraction[digits..];
    }

    match rest {
        [] => Ok(false),
        [b'Z'] => Ok(true),
        [sign, h1, h2, b':', m1, m2]
            if (*sign == b'+' || *sign == b'-')
                && [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit()) =>
        {
            Ok(true)
        }
        _ => Err(TimestampError::Shape),
    }
}
