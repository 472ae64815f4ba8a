//! Error type for count parsing.
//!
//! Generation and statistics never fail for an integer count. The only
//! failure is text that does not denote an integer, which is rejected
//! rather than coerced.

use std::num::IntErrorKind;

/// Error produced when a sequence length cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// The input is not an integer.
    #[error("invalid count {0:?}: expected an integer")]
    InvalidCount(String),

    /// The input is an integer that does not fit in 64 bits.
    #[error("count {0} is out of range for a 64-bit integer")]
    OutOfRange(String),
}

/// Parse a sequence length from text.
///
/// Surrounding whitespace is ignored. Negative values are accepted; they
/// produce an empty sequence downstream.
///
/// # Example
/// ```
/// assert_eq!(fibstats_core::parse_count(" -3 "), Ok(-3));
/// assert!(fibstats_core::parse_count("2.5").is_err());
/// ```
pub fn parse_count(input: &str) -> Result<i64, StatsError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            StatsError::OutOfRange(trimmed.to_string())
        }
        _ => StatsError::InvalidCount(trimmed.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_count("10"), Ok(10));
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("+7"), Ok(7));
    }

    #[test]
    fn parses_negative_and_padded() {
        assert_eq!(parse_count("-5"), Ok(-5));
        assert_eq!(parse_count("  42\n"), Ok(42));
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(
            parse_count("2.5"),
            Err(StatsError::InvalidCount("2.5".into()))
        );
        assert_eq!(parse_count("ten"), Err(StatsError::InvalidCount("ten".into())));
        assert_eq!(parse_count("   "), Err(StatsError::InvalidCount(String::new())));
    }

    #[test]
    fn rejects_out_of_range() {
        let huge = "99999999999999999999";
        assert_eq!(parse_count(huge), Err(StatsError::OutOfRange(huge.into())));
        let tiny = "-99999999999999999999";
        assert_eq!(parse_count(tiny), Err(StatsError::OutOfRange(tiny.into())));
    }

    #[test]
    fn error_messages() {
        let err = StatsError::InvalidCount("x".into());
        assert_eq!(err.to_string(), "invalid count \"x\": expected an integer");
        let err = StatsError::OutOfRange("1e30".into());
        assert!(err.to_string().contains("out of range"));
    }
}
