//! A line within a gene reference or island file.

use std::str::FromStr;

/// A line within a gene reference or island file.
///
/// Both file formats allow blank lines anywhere; everything else is a record
/// of type `R`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line<R> {
    /// An empty (or whitespace-only) line.
    Empty,
    /// A record line.
    Record(R),
}

impl<R> std::fmt::Display for Line<R>
where
    R: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Empty => write!(f, ""),
            Line::Record(record) => write!(f, "{}", record),
        }
    }
}

impl<R> FromStr for Line<R>
where
    R: FromStr,
{
    type Err = R::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Ok(Self::Empty)
        } else {
            s.parse::<R>().map(Line::Record)
        }
    }
}
