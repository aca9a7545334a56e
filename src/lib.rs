//! `islandgenes` is a crate for annotating genomic islands with the genes that
//! overlap them.
//!
//! Given a gene reference table (chromosome, gene id, start, end) and a list of
//! islands (chromosome, start, end), both sorted, the crate reports for each
//! island the number of overlapping genes and their identifiers. A gene is
//! reported when it shares at least a minimum number of bases with the island
//! (500 by default), or the whole island when the island is shorter than that.
//! Identifiers carry a marker describing how the gene sits on the island:
//!
//! - no marker: the gene lies within the island,
//! - `*`: the gene crosses one border of the island,
//! - `**`: the gene crosses both borders of the island.
//!
//! ## Building a gene index
//!
//! Genes are read with a [`Reader`] and collected into an
//! [`index::GeneIndex`] by an [`index::Builder`]. The gene reference file must
//! be sorted such that, on each chromosome, genes appear in ascending order by
//! both start and end; the index relies on that order for binary searches and
//! does not re-sort.
//!
//! ## Matching and annotating islands
//!
//! An [`overlap::Matcher`] finds the [`overlap::Hits`] for a single
//! [`record::IslandRecord`]. Most users will want the
//! [`annotator::Annotator`] instead, which streams an island file and writes
//! each line back out with two extra columns: the gene count and the
//! comma-joined, sorted gene names.
//!
//! ```
//! use islandgenes::annotator::Annotator;
//! use islandgenes::index;
//! use islandgenes::overlap::Matcher;
//! use islandgenes::Reader;
//!
//! let genes = b"1\tAT1G01010\t3631\t5899\t+\t26\n1\tAT1G01020\t6788\t9130\t-\t42137\n";
//! let index = index::Builder::default().try_build_from(Reader::new(&genes[..]))?;
//!
//! let islands = b"1 3001 10000\n1 4001 6000\n";
//! let mut output = Vec::new();
//! Annotator::new(Matcher::new(&index)).annotate(&mut Reader::new(&islands[..]), &mut output)?;
//!
//! assert_eq!(
//!     String::from_utf8(output)?,
//!     "1 3001 10000\t2\tAT1G01010,AT1G01020\n1 4001 6000\t1\tAT1G01010*\n"
//! );
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod annotator;
pub mod core;
pub mod index;
pub mod line;
pub mod overlap;
pub mod reader;
pub mod record;

pub use line::Line;

pub use self::reader::Reader;
