//! A matcher for the genes overlapping an island.
//!
//! A gene is reported for an island when it shares enough bases with it: at
//! least the configured minimum overlap, or the whole island when the island
//! is shorter than that. The search runs in three phases over the genes on
//! the island's chromosome.
//!
//! 1. **Right-anchored.** Starting from the first gene that starts after the
//!    island start, walk forward through genes that start early enough to
//!    leave the minimum overlap before the island end. Contained genes are
//!    reported bare. The first gene crossing the right border is reported
//!    with one marker and ends the walk.
//! 2. **Spanning.** The first gene ending after the island end is reported
//!    with two markers if it also starts before the island start.
//! 3. **Left-anchored.** From the gene just before that one, walk backward
//!    through genes that end far enough into the island. Contained genes are
//!    reported bare. The first gene crossing the left border is reported with
//!    one marker and ends the walk.
//!
//! The boundary comparisons differ from phase to phase. The tests below pin
//! each one down.

use tracing::trace;

use crate::core::Chromosome;
use crate::core::Position;
use crate::index::ChromosomeIndex;
use crate::index::GeneIndex;
use crate::overlap::Hits;
use crate::overlap::Marker;
use crate::record::IslandRecord;

/// The default minimum number of bases a gene must share with an island.
pub const DEFAULT_MIN_OVERLAP: Position = 500;

/// An error related to a [`Matcher`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The island sits on a chromosome the index does not cover.
    ChromosomeOutOfRange(Chromosome, usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ChromosomeOutOfRange(chromosome, count) => write!(
                f,
                "chromosome {chromosome} is out of range: expected a value between 1 and {count}"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// Finds the genes overlapping islands within a [`GeneIndex`].
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    /// The genes to search.
    index: &'a GeneIndex,

    /// The minimum number of bases a gene must share with an island.
    min_overlap: Position,
}

impl<'a> Matcher<'a> {
    /// Creates a matcher over `index` with the default minimum overlap.
    pub fn new(index: &'a GeneIndex) -> Self {
        Self {
            index,
            min_overlap: DEFAULT_MIN_OVERLAP,
        }
    }

    /// Sets the minimum number of bases a gene must share with an island.
    pub fn with_min_overlap(mut self, min_overlap: Position) -> Self {
        self.min_overlap = min_overlap;
        self
    }

    /// Gets the minimum number of bases a gene must share with an island.
    pub fn min_overlap(&self) -> Position {
        self.min_overlap
    }

    /// Finds the genes overlapping `island`.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::core::Chromosome;
    /// use islandgenes::index::Builder;
    /// use islandgenes::overlap::Matcher;
    /// use islandgenes::record::GeneRecord;
    /// use islandgenes::record::IslandRecord;
    ///
    /// let one = Chromosome::new(1);
    /// let index = Builder::default().try_build([GeneRecord::new(one, "G1", 100, 200)])?;
    /// let matcher = Matcher::new(&index);
    ///
    /// let hits = matcher.find(&IslandRecord::new(one, 150, 160))?;
    /// assert_eq!(hits.to_string(), "G1**");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn find(&self, island: &IslandRecord) -> Result<Hits, Error> {
        let genes = self.index.get(island.chromosome()).ok_or_else(|| {
            Error::ChromosomeOutOfRange(island.chromosome(), self.index.chromosome_count())
        })?;

        let min_overlap = island.min_overlap(self.min_overlap);
        let mut hits = Hits::new();

        right_anchored(genes, island, min_overlap, &mut hits);

        let next = genes.first_end_after(island.end());
        spanning(genes, island, next, &mut hits);
        left_anchored(genes, island, min_overlap, next, &mut hits);

        trace!("island {}: {} gene(s)", island, hits.len());

        Ok(hits)
    }
}

/// Collects genes that start inside the island, possibly running past its
/// right border.
fn right_anchored(
    genes: &ChromosomeIndex,
    island: &IslandRecord,
    min_overlap: Position,
    hits: &mut Hits,
) {
    let threshold = island.end() - min_overlap;
    let first = genes.first_start_after(island.start());

    let mut i = first;
    while let Some(gene) = genes.gene(i) {
        // The first candidate must start strictly before the threshold.
        let admitted = match i == first {
            true => gene.start() < threshold,
            false => gene.start() <= threshold,
        };

        if !admitted {
            break;
        }

        if gene.end() > island.end() {
            hits.insert(gene.id(), Marker::OneBorder);
            break;
        }

        hits.insert(gene.id(), Marker::Contained);
        i += 1;
    }
}

/// Collects the gene at `next` (the first gene ending after the island) if it
/// spans both borders of the island.
fn spanning(genes: &ChromosomeIndex, island: &IslandRecord, next: usize, hits: &mut Hits) {
    if let Some(gene) = genes.gene(next) {
        if gene.start() < island.start() {
            hits.insert(gene.id(), Marker::BothBorders);
        }
    }
}

/// Collects genes that end inside the island, possibly running past its left
/// border, walking backward from the gene before `next`.
fn left_anchored(
    genes: &ChromosomeIndex,
    island: &IslandRecord,
    min_overlap: Position,
    next: usize,
    hits: &mut Hits,
) {
    let overlaps = |end: Position| end - island.start() >= min_overlap;

    let Some(mut i) = next.checked_sub(1) else {
        return;
    };
    let Some(gene) = genes.gene(i) else {
        return;
    };

    if !overlaps(gene.end()) {
        return;
    }

    if gene.start() < island.start() {
        hits.insert(gene.id(), Marker::OneBorder);
        return;
    }

    hits.insert(gene.id(), Marker::Contained);

    while let Some(previous) = i.checked_sub(1) {
        i = previous;

        let Some(gene) = genes.gene(i) else {
            break;
        };

        // Only the bare name is checked here, so a gene already reported with
        // a marker is looked at again.
        if hits.contains(gene.id()) {
            continue;
        }

        // Ends are ascending, so no earlier gene can overlap either.
        if !overlaps(gene.end()) {
            break;
        }

        if gene.start() < island.start() {
            hits.insert(gene.id(), Marker::OneBorder);
            break;
        }

        hits.insert(gene.id(), Marker::Contained);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Builder;
    use crate::record::GeneRecord;

    /// Builds an index with the genes on chromosome one.
    fn build_index(genes: &[(&str, Position, Position)]) -> GeneIndex {
        let one = Chromosome::new(1);

        Builder::default()
            .try_build(
                genes
                    .iter()
                    .map(|(id, start, end)| GeneRecord::new(one, *id, *start, *end)),
            )
            .unwrap()
    }

    /// Finds the hits for an island on chromosome one as a list of names.
    fn find(index: &GeneIndex, start: Position, end: Position) -> Vec<String> {
        Matcher::new(index)
            .find(&IslandRecord::new(Chromosome::new(1), start, end))
            .unwrap()
            .iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_gene_spanning_short_island() {
        let index = build_index(&[("G1", 100, 200)]);
        assert_eq!(find(&index, 150, 160), vec!["G1**"]);
    }

    #[test]
    fn test_gene_with_too_little_overlap() {
        let index = build_index(&[("G1", 100, 300)]);
        assert!(find(&index, 50, 600).is_empty());
    }

    #[test]
    fn test_contained_gene() {
        let index = build_index(&[("G1", 1500, 2500)]);
        assert_eq!(find(&index, 1000, 5000), vec!["G1"]);
    }

    #[test]
    fn test_gene_starting_on_left_border() {
        let index = build_index(&[("G1", 1000, 2000)]);
        assert_eq!(find(&index, 1000, 5000), vec!["G1"]);
    }

    #[test]
    fn test_gene_starting_on_left_border_and_crossing_right_border() {
        // The right-anchored walk begins strictly after the island start, and
        // the spanning check needs a start strictly before it, so this gene is
        // not reported at all.
        let index = build_index(&[("G1", 1000, 6000)]);
        assert!(find(&index, 1000, 5000).is_empty());
    }

    #[test]
    fn test_gene_crossing_right_border() {
        let index = build_index(&[("G2", 4000, 6000)]);
        assert_eq!(find(&index, 1000, 5000), vec!["G2*"]);
    }

    #[test]
    fn test_gene_crossing_left_border() {
        let index = build_index(&[("G3", 500, 1800)]);
        assert_eq!(find(&index, 1000, 5000), vec!["G3*"]);
    }

    #[test]
    fn test_gene_spanning_both_borders() {
        let index = build_index(&[("G4", 500, 6000)]);
        assert_eq!(find(&index, 1000, 5000), vec!["G4**"]);
    }

    #[test]
    fn test_all_phases() {
        let index = build_index(&[
            ("L", 500, 1800),
            ("A", 1500, 2500),
            ("B", 3000, 3800),
            ("R", 4200, 6000),
            ("S", 7000, 8000),
        ]);

        assert_eq!(find(&index, 1000, 5000), vec!["A", "B", "L*", "R*"]);
    }

    #[test]
    fn test_genes_outside_island() {
        let index = build_index(&[("G1", 100, 900), ("G2", 6000, 7000)]);
        assert!(find(&index, 1000, 5000).is_empty());
    }

    #[test]
    fn test_first_right_anchored_threshold_is_strict() {
        // The first candidate must start before `end - min_overlap`...
        let index = build_index(&[("R", 4500, 6000)]);
        assert!(find(&index, 1000, 5000).is_empty());

        // ...but later candidates may start right on it.
        let index = build_index(&[("A", 1500, 2500), ("R", 4500, 6000)]);
        assert_eq!(find(&index, 1000, 5000), vec!["A", "R*"]);
    }

    #[test]
    fn test_left_anchored_threshold() {
        let index = build_index(&[("L", 800, 1500)]);
        assert_eq!(find(&index, 1000, 5000), vec!["L*"]);

        let index = build_index(&[("L", 800, 1499)]);
        assert!(find(&index, 1000, 5000).is_empty());
    }

    #[test]
    fn test_short_island_lowers_min_overlap() {
        // A 100 bp island requires 100 bp of overlap rather than 500.
        let index = build_index(&[("G1", 900, 1300)]);
        assert_eq!(find(&index, 1000, 1099), vec!["G1**"]);

        let index = build_index(&[("G1", 800, 1099)]);
        assert!(find(&index, 1000, 1099).is_empty());
    }

    #[test]
    fn test_min_overlap_is_configurable() {
        let index = build_index(&[("G3", 500, 1800)]);
        let island = IslandRecord::new(Chromosome::new(1), 1000, 5000);

        let hits = Matcher::new(&index).with_min_overlap(1000).find(&island);
        assert_eq!(hits, Ok(Hits::new()));

        let matcher = Matcher::new(&index).with_min_overlap(800);
        assert_eq!(matcher.min_overlap(), 800);
        assert_eq!(matcher.find(&island).unwrap().to_string(), "G3*");
    }

    #[test]
    fn test_left_anchored_skip_checks_bare_name_only() {
        // `X*` is reported by the right-anchored walk. Walking backward, the
        // earlier `X` record is not recognised as already reported, so it is
        // added bare as well.
        let index = build_index(&[("X", 1000, 1800), ("A", 1500, 2500), ("X", 4200, 6000)]);
        assert_eq!(find(&index, 1000, 5000), vec!["A", "X", "X*"]);
    }

    #[test]
    fn test_duplicate_genes_are_reported_once() {
        let index = build_index(&[("G1", 1500, 2500), ("G1", 1500, 2500)]);
        assert_eq!(find(&index, 1000, 5000), vec!["G1"]);
    }

    #[test]
    fn test_chromosome_without_genes() -> Result<(), Box<dyn std::error::Error>> {
        let index = build_index(&[("G1", 1500, 2500)]);
        let hits = Matcher::new(&index).find(&IslandRecord::new(Chromosome::new(2), 1000, 5000))?;

        assert!(hits.is_empty());

        Ok(())
    }

    #[test]
    fn test_chromosome_out_of_range() {
        let index = build_index(&[("G1", 1500, 2500)]);

        let err = Matcher::new(&index)
            .find(&IslandRecord::new(Chromosome::new(6), 1000, 5000))
            .unwrap_err();
        assert_eq!(err, Error::ChromosomeOutOfRange(Chromosome::new(6), 5));
        assert_eq!(
            err.to_string(),
            "chromosome 6 is out of range: expected a value between 1 and 5"
        );

        let err = Matcher::new(&index)
            .find(&IslandRecord::new(Chromosome::new(0), 1000, 5000))
            .unwrap_err();
        assert_eq!(err, Error::ChromosomeOutOfRange(Chromosome::new(0), 5));
    }
}
