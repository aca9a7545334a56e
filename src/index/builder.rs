//! A builder for a [`GeneIndex`].

use std::io::BufRead;

use tracing::debug;

use crate::core::Chromosome;
use crate::index::GeneIndex;
use crate::index::DEFAULT_CHROMOSOME_COUNT;
use crate::reader;
use crate::record::gene;
use crate::record::GeneRecord;
use crate::Line;
use crate::Reader;

/// An error related to building a [`GeneIndex`].
#[derive(Debug)]
pub enum Error {
    /// An error reading the gene reference file.
    Reader(reader::Error<gene::ParseError>),

    /// A gene sits on a chromosome the index does not cover.
    ChromosomeOutOfRange {
        /// The offending chromosome.
        chromosome: Chromosome,
        /// The number of chromosomes covered by the index.
        count: usize,
        /// The line of the gene reference file, when known.
        line_no: Option<usize>,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Reader(err) => write!(f, "reader error: {err}"),
            Error::ChromosomeOutOfRange {
                chromosome,
                count,
                line_no,
            } => {
                write!(f, "chromosome {chromosome} is out of range")?;

                if let Some(line_no) = line_no {
                    write!(f, " at line {line_no}")?;
                }

                write!(f, ": expected a value between 1 and {count}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`GeneIndex`].
#[derive(Clone, Debug)]
pub struct Builder {
    /// The number of chromosomes to cover.
    chromosome_count: usize,
}

impl Builder {
    /// Sets the number of chromosomes the index covers.
    ///
    /// Genes on chromosomes outside of `1..=count` are rejected.
    pub fn chromosome_count(mut self, count: usize) -> Self {
        self.chromosome_count = count;
        self
    }

    /// Builds a [`GeneIndex`] from gene records, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::core::Chromosome;
    /// use islandgenes::index::Builder;
    /// use islandgenes::record::GeneRecord;
    ///
    /// let index = Builder::default().try_build([
    ///     GeneRecord::new(Chromosome::new(1), "AT1G01010", 3631, 5899),
    ///     GeneRecord::new(Chromosome::new(5), "AT5G01010", 3631, 5899),
    /// ])?;
    ///
    /// assert_eq!(index.chromosome_count(), 5);
    /// assert_eq!(index.gene_count(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build<I>(&self, records: I) -> Result<GeneIndex>
    where
        I: IntoIterator<Item = GeneRecord>,
    {
        let mut index = GeneIndex::with_chromosome_count(self.chromosome_count);

        for record in records {
            index
                .push(record)
                .map_err(|chromosome| Error::ChromosomeOutOfRange {
                    chromosome,
                    count: self.chromosome_count,
                    line_no: None,
                })?;
        }

        debug!(
            "built gene index: {} genes across {} chromosomes",
            index.gene_count(),
            index.chromosome_count()
        );

        Ok(index)
    }

    /// Builds a [`GeneIndex`] from a gene reference file.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"1\tAT1G01010\t3631\t5899\t+\t26\n1\tAT1G01020\t6788\t9130\t-\t42137\n";
    /// let reader = islandgenes::Reader::new(&data[..]);
    ///
    /// let index = islandgenes::index::Builder::default().try_build_from(reader)?;
    /// assert_eq!(index.gene_count(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build_from<T>(&self, mut reader: Reader<T>) -> Result<GeneIndex>
    where
        T: BufRead,
    {
        let mut index = GeneIndex::with_chromosome_count(self.chromosome_count);
        let mut buffer = String::new();

        while let Some(line) = reader
            .read_line::<GeneRecord>(&mut buffer)
            .map_err(Error::Reader)?
        {
            let record = match line {
                Line::Empty => continue,
                Line::Record(record) => record,
            };

            index
                .push(record)
                .map_err(|chromosome| Error::ChromosomeOutOfRange {
                    chromosome,
                    count: self.chromosome_count,
                    line_no: Some(reader.line_no()),
                })?;
        }

        debug!(
            "built gene index from {} lines: {} genes across {} chromosomes",
            reader.line_no(),
            index.gene_count(),
            index.chromosome_count()
        );

        Ok(index)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            chromosome_count: DEFAULT_CHROMOSOME_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_reader() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = b"1\tAT1G01010\t3631\t5899\n\
                     1\tAT1G01020\t6788\t9130\n\
                     \n\
                     2\tAT2G01008\t1025\t2810\n";
        let index = Builder::default().try_build_from(Reader::new(&data[..]))?;

        assert_eq!(index.gene_count(), 3);

        let genes = index.get(Chromosome::new(1)).unwrap();
        assert_eq!(genes.len(), 2);
        assert_eq!(genes.id(0), Some("AT1G01010"));
        assert_eq!(genes.id(1), Some("AT1G01020"));

        let genes = index.get(Chromosome::new(2)).unwrap();
        assert_eq!(genes.gene(0).map(|gene| gene.end()), Some(2810));

        assert!(index.get(Chromosome::new(3)).unwrap().is_empty());

        Ok(())
    }

    #[test]
    fn test_chromosome_out_of_range() {
        let data = b"1\tAT1G01010\t3631\t5899\n6\tATMG00010\t273\t5899\n";
        let err = Builder::default()
            .try_build_from(Reader::new(&data[..]))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "chromosome 6 is out of range at line 2: expected a value between 1 and 5"
        );

        let err = Builder::default()
            .chromosome_count(1)
            .try_build([GeneRecord::new(Chromosome::new(2), "AT2G01008", 1025, 2810)])
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "chromosome 2 is out of range: expected a value between 1 and 1"
        );
    }

    #[test]
    fn test_invalid_gene_line() {
        let data = b"1\tAT1G01010\t3631\n";
        let err = Builder::default()
            .try_build_from(Reader::new(&data[..]))
            .unwrap_err();

        assert!(matches!(err, Error::Reader(_)));
        assert_eq!(
            err.to_string(),
            "reader error: invalid record at line 1: invalid number of fields in gene record: \
             expected at least 4 fields, found 3 fields\n\nline: 1\tAT1G01010\t3631"
        );
    }
}
