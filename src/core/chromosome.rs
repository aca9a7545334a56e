//! A chromosome number.

use std::num::ParseIntError;
use std::str::FromStr;

/// An error related to the parsing of a chromosome.
#[derive(Debug)]
pub struct ParseError(ParseIntError);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse chromosome error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}

/// A chromosome, identified by its number.
///
/// Chromosomes are numbered from one. Whether a particular number is valid
/// depends on the genome at hand, so that check is left to the
/// [gene index](crate::index::GeneIndex).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Chromosome(usize);

impl Chromosome {
    /// Creates a new [`Chromosome`].
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::core::Chromosome;
    ///
    /// let chromosome = Chromosome::new(3);
    /// assert_eq!(chromosome.get(), 3);
    /// ```
    pub fn new(number: usize) -> Self {
        Self(number)
    }

    /// Gets the chromosome number.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl FromStr for Chromosome {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>().map(Self).map_err(ParseError)
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
