//! An island record.

use std::str::FromStr;

use crate::core::chromosome;
use crate::core::position;
use crate::core::Chromosome;
use crate::core::Position;

/// The delimiter used when displaying an island record.
const ISLAND_DELIMITER: char = '\t';

/// The number of expected fields in an island record.
pub const NUM_ISLAND_FIELDS: usize = 3;

/// An error associated with parsing an island record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the island line.
    IncorrectNumberOfFields(usize),
    /// An invalid chromosome.
    InvalidChromosome(chromosome::ParseError),
    /// An invalid start position.
    InvalidStart(position::ParseError),
    /// An invalid end position.
    InvalidEnd(position::ParseError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in island record: expected {} fields, found {} fields",
                NUM_ISLAND_FIELDS, n
            ),
            ParseError::InvalidChromosome(err) => write!(f, "invalid chromosome: {}", err),
            ParseError::InvalidStart(err) => write!(f, "invalid start: {}", err),
            ParseError::InvalidEnd(err) => write!(f, "invalid end: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

/// An island (a query interval) on a single chromosome.
///
/// Both the start and the end positions are inclusive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IslandRecord {
    /// The chromosome the island sits on.
    chromosome: Chromosome,
    /// The first base of the island.
    start: Position,
    /// The last base of the island.
    end: Position,
}

impl IslandRecord {
    /// Creates a new [`IslandRecord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::core::Chromosome;
    /// use islandgenes::record::IslandRecord;
    ///
    /// let island = IslandRecord::new(Chromosome::new(1), 30001, 32000);
    /// assert_eq!(island.length(), 2000);
    /// ```
    pub fn new(chromosome: Chromosome, start: Position, end: Position) -> Self {
        Self {
            chromosome,
            start,
            end,
        }
    }

    /// Gets the chromosome.
    pub fn chromosome(&self) -> Chromosome {
        self.chromosome
    }

    /// Gets the start position.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Gets the end position.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Gets the number of bases covered by the island.
    pub fn length(&self) -> Position {
        self.end - self.start + 1
    }

    /// Gets the number of bases a gene must share with this island to be
    /// reported, given the configured `threshold`.
    ///
    /// Islands shorter than the threshold lower it to their own length.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::core::Chromosome;
    /// use islandgenes::record::IslandRecord;
    ///
    /// let island = IslandRecord::new(Chromosome::new(1), 150, 160);
    /// assert_eq!(island.min_overlap(500), 11);
    ///
    /// let island = IslandRecord::new(Chromosome::new(1), 52001, 54000);
    /// assert_eq!(island.min_overlap(500), 500);
    /// ```
    pub fn min_overlap(&self, threshold: Position) -> Position {
        self.length().min(threshold)
    }
}

impl FromStr for IslandRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_whitespace().collect::<Vec<_>>();

        if parts.len() != NUM_ISLAND_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let chromosome = parts[0].parse().map_err(ParseError::InvalidChromosome)?;
        let start = position::parse(parts[1]).map_err(ParseError::InvalidStart)?;
        let end = position::parse(parts[2]).map_err(ParseError::InvalidEnd)?;

        Ok(Self::new(chromosome, start, end))
    }
}

impl std::fmt::Display for IslandRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.chromosome, ISLAND_DELIMITER, self.start, ISLAND_DELIMITER, self.end
        )
    }
}
