//! Positions along a chromosome.

use std::num::ParseFloatError;

/// A position along a chromosome.
///
/// Positions are inclusive on both ends of a range. They are signed so that
/// differences between two positions never underflow.
pub type Position = i64;

/// The largest magnitude a parsed [`Position`] may have.
///
/// This is the largest integer a floating point number holds exactly. It also
/// leaves headroom so that the length of any range, or the overlap between two
/// ranges, fits in a [`Position`].
pub const MAX_POSITION: Position = 1 << 53;

/// An error related to the parsing of a [`Position`].
#[derive(Debug)]
pub enum ParseError {
    /// The value is not a number.
    InvalidNumber(ParseFloatError),

    /// The value is a number, but it is infinite or not a number.
    NonFinite(String),

    /// The value is larger in magnitude than [`MAX_POSITION`].
    OutOfRange(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(err) => write!(f, "invalid number: {err}"),
            ParseError::NonFinite(value) => write!(f, "non-finite number: {value}"),
            ParseError::OutOfRange(value) => write!(
                f,
                "position out of range: {value} (expected a magnitude of at most {MAX_POSITION})"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a [`Position`].
///
/// Coordinates in gene tables are occasionally written as decimals or in
/// scientific notation. The value is read as a floating point number and then
/// truncated toward zero (never rounded).
///
/// # Examples
///
/// ```
/// use islandgenes::core::position;
///
/// assert_eq!(position::parse("3631")?, 3631);
/// assert_eq!(position::parse("3631.9")?, 3631);
/// assert_eq!(position::parse("1.2e4")?, 12000);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(s: &str) -> Result<Position, ParseError> {
    let value = s.parse::<f64>().map_err(ParseError::InvalidNumber)?;

    if !value.is_finite() {
        return Err(ParseError::NonFinite(s.into()));
    }

    let value = value.trunc();

    if value.abs() > MAX_POSITION as f64 {
        return Err(ParseError::OutOfRange(s.into()));
    }

    Ok(value as Position)
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(parse("0")?, 0);
        assert_eq!(parse("12685051")?, 12685051);
        assert_eq!(parse("+42")?, 42);
        assert_eq!(parse("-42")?, -42);
        Ok(())
    }

    #[test]
    fn test_parse_truncates() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(parse("99.99")?, 99);
        assert_eq!(parse("-0.5")?, 0);
        assert_eq!(parse("-1.5")?, -1);
        assert_eq!(parse("5e2")?, 500);
        Ok(())
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse("12a").unwrap_err();
        assert_eq!(err.to_string(), "invalid number: invalid float literal");

        let err = parse("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number: cannot parse float from empty string"
        );

        let err = parse("inf").unwrap_err();
        assert_eq!(err.to_string(), "non-finite number: inf");

        let err = parse("NaN").unwrap_err();
        assert_eq!(err.to_string(), "non-finite number: NaN");
    }

    #[test]
    fn test_parse_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(parse("9007199254740992")?, MAX_POSITION);
        assert_eq!(parse("-9007199254740992")?, -MAX_POSITION);

        let err = parse("1e19").unwrap_err();
        assert!(matches!(err, ParseError::OutOfRange(_)));
        assert_eq!(
            err.to_string(),
            "position out of range: 1e19 (expected a magnitude of at most 9007199254740992)"
        );

        let err = parse("-9007199254740994").unwrap_err();
        assert!(matches!(err, ParseError::OutOfRange(_)));

        Ok(())
    }
}
