//! An index of the genes along each chromosome.
//!
//! For every chromosome, the index holds the genes in the order they appear
//! in the gene reference file. That file is expected to be sorted such that
//! the genes on each chromosome are in ascending order by start _and_ by end.
//! The index trusts this order and never re-sorts, so it can answer "where is
//! the first gene starting (or ending) after this position?" with a binary
//! search over either coordinate. Unsorted input gives undefined answers.

use crate::core::Chromosome;
use crate::core::Position;
use crate::record::GeneRecord;

pub mod builder;

pub use builder::Builder;

/// The number of chromosomes an index covers unless configured otherwise.
pub const DEFAULT_CHROMOSOME_COUNT: usize = 5;

/// A gene stored within a [`ChromosomeIndex`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Gene<'a> {
    /// The gene identifier.
    id: &'a str,
    /// The first base of the gene.
    start: Position,
    /// The last base of the gene.
    end: Position,
}

impl<'a> Gene<'a> {
    /// Gets the gene identifier.
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// Gets the start position.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Gets the end position.
    pub fn end(&self) -> Position {
        self.end
    }
}

/// The genes on a single chromosome.
///
/// Genes are stored as parallel sequences of identifiers, starts, and ends.
/// An index into this structure refers to the same gene in all three.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ChromosomeIndex {
    /// The gene identifiers.
    ids: Vec<String>,
    /// The gene starts (ascending).
    starts: Vec<Position>,
    /// The gene ends (ascending).
    ends: Vec<Position>,
}

impl ChromosomeIndex {
    /// Appends a gene to the index.
    fn push(&mut self, id: String, start: Position, end: Position) {
        self.ids.push(id);
        self.starts.push(start);
        self.ends.push(end);
    }

    /// Gets the number of genes on the chromosome.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether there are no genes on the chromosome.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Gets the index of the first gene whose start is at or after
    /// `position`.
    ///
    /// If there is no such gene, the number of genes is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::core::Chromosome;
    /// use islandgenes::index::Builder;
    /// use islandgenes::record::GeneRecord;
    ///
    /// let one = Chromosome::new(1);
    /// let index = Builder::default().try_build([
    ///     GeneRecord::new(one, "G1", 100, 200),
    ///     GeneRecord::new(one, "G2", 300, 400),
    /// ])?;
    /// let genes = index.get(one).unwrap();
    ///
    /// assert_eq!(genes.first_start_at_or_after(100), 0);
    /// assert_eq!(genes.first_start_at_or_after(101), 1);
    /// assert_eq!(genes.first_start_at_or_after(301), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn first_start_at_or_after(&self, position: Position) -> usize {
        self.starts.partition_point(|&start| start < position)
    }

    /// Gets the index of the first gene whose start is strictly after
    /// `position`.
    ///
    /// If there is no such gene, the number of genes is returned.
    pub fn first_start_after(&self, position: Position) -> usize {
        self.starts.partition_point(|&start| start <= position)
    }

    /// Gets the index of the first gene whose end is at or after `position`.
    ///
    /// If there is no such gene, the number of genes is returned.
    pub fn first_end_at_or_after(&self, position: Position) -> usize {
        self.ends.partition_point(|&end| end < position)
    }

    /// Gets the index of the first gene whose end is strictly after
    /// `position`.
    ///
    /// If there is no such gene, the number of genes is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::core::Chromosome;
    /// use islandgenes::index::Builder;
    /// use islandgenes::record::GeneRecord;
    ///
    /// let one = Chromosome::new(1);
    /// let index = Builder::default().try_build([
    ///     GeneRecord::new(one, "G1", 100, 200),
    ///     GeneRecord::new(one, "G2", 300, 400),
    /// ])?;
    /// let genes = index.get(one).unwrap();
    ///
    /// assert_eq!(genes.first_end_after(199), 0);
    /// assert_eq!(genes.first_end_after(200), 1);
    /// assert_eq!(genes.first_end_after(400), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn first_end_after(&self, position: Position) -> usize {
        self.ends.partition_point(|&end| end <= position)
    }

    /// Gets the identifier of the gene at index `i`.
    pub fn id(&self, i: usize) -> Option<&str> {
        self.ids.get(i).map(String::as_str)
    }

    /// Gets the start of the gene at index `i`.
    pub fn start(&self, i: usize) -> Option<Position> {
        self.starts.get(i).copied()
    }

    /// Gets the end of the gene at index `i`.
    pub fn end(&self, i: usize) -> Option<Position> {
        self.ends.get(i).copied()
    }

    /// Gets the gene at index `i`.
    pub fn gene(&self, i: usize) -> Option<Gene<'_>> {
        Some(Gene {
            id: self.id(i)?,
            start: self.start(i)?,
            end: self.end(i)?,
        })
    }
}

/// An index of genes for every chromosome in a genome.
///
/// Generally, you will want to use a [`builder::Builder`] to construct one of
/// these.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneIndex {
    /// The genes for each chromosome, where chromosome `n` sits at `n - 1`.
    chromosomes: Vec<ChromosomeIndex>,
}

impl GeneIndex {
    /// Creates an index with no genes on `count` chromosomes.
    fn with_chromosome_count(count: usize) -> Self {
        Self {
            chromosomes: vec![ChromosomeIndex::default(); count],
        }
    }

    /// Appends a gene to its chromosome.
    ///
    /// If the gene's chromosome is not covered by the index, the chromosome
    /// is returned as the error.
    fn push(&mut self, record: GeneRecord) -> Result<(), Chromosome> {
        let (chromosome, id, start, end) = record.into_parts();

        match self.get_mut(chromosome) {
            Some(genes) => {
                genes.push(id, start, end);
                Ok(())
            }
            None => Err(chromosome),
        }
    }

    /// Gets the number of chromosomes covered by the index.
    pub fn chromosome_count(&self) -> usize {
        self.chromosomes.len()
    }

    /// Gets the total number of genes across all chromosomes.
    pub fn gene_count(&self) -> usize {
        self.chromosomes.iter().map(ChromosomeIndex::len).sum()
    }

    /// Gets the genes on `chromosome`.
    ///
    /// Returns [`None`] if the chromosome is outside of `1..=`
    /// [`chromosome_count()`](Self::chromosome_count).
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::core::Chromosome;
    /// use islandgenes::index::Builder;
    /// use islandgenes::record::GeneRecord;
    ///
    /// let index = Builder::default()
    ///     .chromosome_count(2)
    ///     .try_build(Vec::<GeneRecord>::new())?;
    ///
    /// assert!(index.get(Chromosome::new(0)).is_none());
    /// assert!(index.get(Chromosome::new(1)).unwrap().is_empty());
    /// assert!(index.get(Chromosome::new(2)).is_some());
    /// assert!(index.get(Chromosome::new(3)).is_none());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get(&self, chromosome: Chromosome) -> Option<&ChromosomeIndex> {
        let i = chromosome.get().checked_sub(1)?;
        self.chromosomes.get(i)
    }

    /// Gets the genes on `chromosome` mutably.
    fn get_mut(&mut self, chromosome: Chromosome) -> Option<&mut ChromosomeIndex> {
        let i = chromosome.get().checked_sub(1)?;
        self.chromosomes.get_mut(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a single chromosome from `(id, start, end)` triples.
    fn chromosome(genes: &[(&str, Position, Position)]) -> ChromosomeIndex {
        let mut index = ChromosomeIndex::default();

        for (id, start, end) in genes {
            index.push(id.to_string(), *start, *end);
        }

        index
    }

    #[test]
    fn test_binary_searches() {
        let genes = chromosome(&[
            ("AT1G01010", 3631, 5899),
            ("AT1G01020", 6788, 9130),
            ("AT1G01030", 11649, 13714),
            ("AT1G01040", 23121, 31227),
        ]);

        assert_eq!(genes.first_start_at_or_after(0), 0);
        assert_eq!(genes.first_start_at_or_after(6788), 1);
        assert_eq!(genes.first_start_after(6788), 2);
        assert_eq!(genes.first_start_after(31227), 4);

        assert_eq!(genes.first_end_at_or_after(9130), 1);
        assert_eq!(genes.first_end_after(9130), 2);
        assert_eq!(genes.first_end_after(0), 0);
        assert_eq!(genes.first_end_at_or_after(31228), 4);
    }

    #[test]
    fn test_ties_resolve_to_file_order() {
        let genes = chromosome(&[("A", 100, 200), ("B", 100, 200), ("C", 150, 300)]);

        assert_eq!(genes.first_start_at_or_after(100), 0);
        assert_eq!(genes.first_start_after(100), 2);
        assert_eq!(genes.first_end_at_or_after(200), 0);
        assert_eq!(genes.first_end_after(200), 2);
    }

    #[test]
    fn test_empty_chromosome() {
        let genes = ChromosomeIndex::default();

        assert!(genes.is_empty());
        assert_eq!(genes.first_start_after(10), 0);
        assert_eq!(genes.first_end_after(10), 0);
        assert!(genes.gene(0).is_none());
    }

    #[test]
    fn test_random_access() {
        let genes = chromosome(&[("AT1G01010", 3631, 5899), ("AT1G01020", 6788, 9130)]);

        assert_eq!(genes.len(), 2);
        assert_eq!(genes.id(1), Some("AT1G01020"));
        assert_eq!(genes.start(0), Some(3631));
        assert_eq!(genes.end(1), Some(9130));
        assert_eq!(genes.end(2), None);

        let gene = genes.gene(0).unwrap();
        assert_eq!(gene.id(), "AT1G01010");
        assert_eq!(gene.start(), 3631);
        assert_eq!(gene.end(), 5899);
    }

    #[test]
    fn test_index_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeneIndex>();
    }

    #[test]
    fn test_push_out_of_range() {
        let mut index = GeneIndex::with_chromosome_count(2);

        let record = GeneRecord::new(Chromosome::new(2), "AT2G01008", 1025, 2810);
        assert!(index.push(record).is_ok());

        let record = GeneRecord::new(Chromosome::new(3), "AT3G01010", 1, 100);
        assert_eq!(index.push(record), Err(Chromosome::new(3)));

        let record = GeneRecord::new(Chromosome::new(0), "AT0G00000", 1, 100);
        assert_eq!(index.push(record), Err(Chromosome::new(0)));

        assert_eq!(index.gene_count(), 1);
        assert_eq!(index.chromosome_count(), 2);
    }
}
