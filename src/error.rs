use std::num::IntErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Why a decimal number in a lesson file, an answer or an argument was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("'{0}' is not a number")]
    NonNumeric(String),

    #[error("'{input}' is outside {min}..={max}")]
    OutOfRange { input: String, min: i64, max: i64 },
}

/// Why a lesson line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected 4 ';'-separated fields, found {found}")]
    TooFewFields { found: usize },

    #[error("invalid lesson number: {0}")]
    InvalidLessonNumber(#[from] NumberError),
}

#[derive(Debug, Error)]
pub enum LessonError {
    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a decimal integer and check it against `min..=max`.
///
/// Negative and overflowing inputs are reported as [`NumberError::OutOfRange`],
/// never wrapped or truncated.
pub fn parse_in_range(input: &str, min: i64, max: i64) -> Result<i64, NumberError> {
    let trimmed = input.trim();
    let out_of_range = || NumberError::OutOfRange {
        input: trimmed.to_string(),
        min,
        max,
    };

    let value = trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => NumberError::NonNumeric(trimmed.to_string()),
    })?;

    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(out_of_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_in_range_accepts_bounds() {
        assert_eq!(parse_in_range("0", 0, 255), Ok(0));
        assert_eq!(parse_in_range("255", 0, 255), Ok(255));
        assert_eq!(parse_in_range(" 12 ", 0, 255), Ok(12));
    }

    #[test]
    fn test_parse_in_range_rejects_negative_and_large() {
        assert_matches!(
            parse_in_range("-1", 0, 255),
            Err(NumberError::OutOfRange { .. })
        );
        assert_matches!(
            parse_in_range("256", 0, 255),
            Err(NumberError::OutOfRange { .. })
        );
        assert_matches!(
            parse_in_range("99999999999999999999999", 0, 255),
            Err(NumberError::OutOfRange { .. })
        );
    }

    #[test]
    fn test_parse_in_range_rejects_garbage() {
        assert_matches!(parse_in_range("", 0, 255), Err(NumberError::NonNumeric(_)));
        assert_matches!(parse_in_range("1a", 0, 255), Err(NumberError::NonNumeric(_)));
        assert_matches!(
            parse_in_range("notanumber", 0, 255),
            Err(NumberError::NonNumeric(s)) if s == "notanumber"
        );
    }
}
