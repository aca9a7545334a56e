//! A gene reference record.

use std::str::FromStr;

use crate::core::chromosome;
use crate::core::position;
use crate::core::Chromosome;
use crate::core::Position;

/// The delimiter used when displaying a gene record.
const GENE_DELIMITER: char = '\t';

/// The number of fields that are consulted in a gene record.
///
/// Any fields after these (strand, length, and so on) are ignored.
pub const NUM_GENE_FIELDS: usize = 4;

/// An error associated with parsing a gene record.
#[derive(Debug)]
pub enum ParseError {
    /// Too few fields in the gene line.
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
                "invalid number of fields in gene record: expected at least {} fields, found {} \
                 fields",
                NUM_GENE_FIELDS, n
            ),
            ParseError::InvalidChromosome(err) => write!(f, "invalid chromosome: {}", err),
            ParseError::InvalidStart(err) => write!(f, "invalid start: {}", err),
            ParseError::InvalidEnd(err) => write!(f, "invalid end: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

/// A gene within the gene reference file.
///
/// Both the start and the end positions are inclusive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneRecord {
    /// The chromosome the gene sits on.
    chromosome: Chromosome,
    /// The gene identifier.
    id: String,
    /// The first base of the gene.
    start: Position,
    /// The last base of the gene.
    end: Position,
}

impl GeneRecord {
    /// Creates a new [`GeneRecord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::core::Chromosome;
    /// use islandgenes::record::GeneRecord;
    ///
    /// let gene = GeneRecord::new(Chromosome::new(1), "AT1G01010", 3631, 5899);
    ///
    /// assert_eq!(gene.chromosome().get(), 1);
    /// assert_eq!(gene.id(), "AT1G01010");
    /// assert_eq!(gene.start(), 3631);
    /// assert_eq!(gene.end(), 5899);
    /// ```
    pub fn new(
        chromosome: Chromosome,
        id: impl Into<String>,
        start: Position,
        end: Position,
    ) -> Self {
        Self {
            chromosome,
            id: id.into(),
            start,
            end,
        }
    }

    /// Gets the chromosome.
    pub fn chromosome(&self) -> Chromosome {
        self.chromosome
    }

    /// Gets the gene identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the start position.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Gets the end position.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Consumes `self` and returns the chromosome, identifier, start, and end.
    pub fn into_parts(self) -> (Chromosome, String, Position, Position) {
        (self.chromosome, self.id, self.start, self.end)
    }
}

impl FromStr for GeneRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .take(NUM_GENE_FIELDS)
            .collect::<Vec<_>>();

        if parts.len() != NUM_GENE_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let chromosome = parts[0].parse().map_err(ParseError::InvalidChromosome)?;
        let start = position::parse(parts[2]).map_err(ParseError::InvalidStart)?;
        let end = position::parse(parts[3]).map_err(ParseError::InvalidEnd)?;

        Ok(Self::new(chromosome, parts[1], start, end))
    }
}

impl std::fmt::Display for GeneRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}{}",
            self.chromosome,
            GENE_DELIMITER,
            self.id,
            GENE_DELIMITER,
            self.start,
            GENE_DELIMITER,
            self.end
        )
    }
}
