//! Annotating a stream of islands with their overlapping genes.

use std::io;
use std::io::BufRead;
use std::io::Write;

use tracing::debug;

use crate::overlap::matcher;
use crate::overlap::Hits;
use crate::overlap::Matcher;
use crate::reader;
use crate::record::island;
use crate::record::IslandRecord;
use crate::Line;
use crate::Reader;

/// The delimiter between the columns of an annotated line.
const ANNOTATION_DELIMITER: char = '\t';

/// An error related to an [`Annotator`].
#[derive(Debug)]
pub enum Error {
    /// An error reading the island file.
    Reader(reader::Error<island::ParseError>),

    /// An island that could not be matched, along with its line number.
    Matcher(matcher::Error, usize),

    /// An error writing the annotated lines.
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Reader(err) => write!(f, "reader error: {err}"),
            Error::Matcher(err, line_no) => write!(f, "matcher error at line {line_no}: {err}"),
            Error::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// An island line annotated with its genes.
///
/// Displays as the original line, the number of genes, and the comma-joined
/// gene names, separated by tabs.
#[derive(Debug)]
pub struct Annotation<'a> {
    /// The original island line.
    line: &'a str,

    /// The genes overlapping the island.
    hits: &'a Hits,
}

impl<'a> Annotation<'a> {
    /// Creates a new [`Annotation`].
    ///
    /// Trailing whitespace is removed from `line`.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::annotator::Annotation;
    /// use islandgenes::overlap::Hits;
    /// use islandgenes::overlap::Marker;
    ///
    /// let mut hits = Hits::new();
    /// hits.insert("AT1G34790", Marker::OneBorder);
    /// hits.insert("AT1G34750", Marker::Contained);
    ///
    /// let annotation = Annotation::new("1 12735601 12765300  ", &hits);
    /// assert_eq!(
    ///     annotation.to_string(),
    ///     "1 12735601 12765300\t2\tAT1G34750,AT1G34790*"
    /// );
    /// ```
    pub fn new(line: &'a str, hits: &'a Hits) -> Self {
        Self {
            line: line.trim_end(),
            hits,
        }
    }

    /// Gets the original island line.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Gets the genes overlapping the island.
    pub fn hits(&self) -> &'a Hits {
        self.hits
    }
}

impl std::fmt::Display for Annotation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.line,
            ANNOTATION_DELIMITER,
            self.hits.len(),
            ANNOTATION_DELIMITER,
            self.hits
        )
    }
}

/// A summary of an annotation run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// The number of islands annotated.
    islands: usize,

    /// The number of islands with at least one gene.
    islands_with_genes: usize,
}

impl Summary {
    /// Gets the number of islands annotated.
    pub fn islands(&self) -> usize {
        self.islands
    }

    /// Gets the number of islands with at least one gene.
    pub fn islands_with_genes(&self) -> usize {
        self.islands_with_genes
    }
}

/// Annotates islands, in order, with the genes that overlap them.
#[derive(Clone, Copy, Debug)]
pub struct Annotator<'a> {
    /// The matcher used for each island.
    matcher: Matcher<'a>,
}

impl<'a> Annotator<'a> {
    /// Creates a new [`Annotator`].
    pub fn new(matcher: Matcher<'a>) -> Self {
        Self { matcher }
    }

    /// Reads every island from `reader` and writes one annotated line per
    /// island to `writer`.
    ///
    /// Blank lines are skipped. Nothing is buffered beyond what `writer`
    /// buffers itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::annotator::Annotator;
    /// use islandgenes::index;
    /// use islandgenes::overlap::Matcher;
    /// use islandgenes::Reader;
    ///
    /// let genes = b"1\tG1\t100\t200\n";
    /// let index = index::Builder::default().try_build_from(Reader::new(&genes[..]))?;
    ///
    /// let islands = b"1 150 160\n\n1 1000 2000\n";
    /// let mut output = Vec::new();
    ///
    /// let summary = Annotator::new(Matcher::new(&index))
    ///     .annotate(&mut Reader::new(&islands[..]), &mut output)?;
    ///
    /// assert_eq!(
    ///     String::from_utf8(output)?,
    ///     "1 150 160\t1\tG1**\n1 1000 2000\t0\t\n"
    /// );
    /// assert_eq!(summary.islands(), 2);
    /// assert_eq!(summary.islands_with_genes(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn annotate<T, W>(&self, reader: &mut Reader<T>, writer: &mut W) -> Result<Summary, Error>
    where
        T: BufRead,
        W: Write,
    {
        let mut summary = Summary::default();
        let mut buffer = String::new();

        while let Some(line) = reader
            .read_line::<IslandRecord>(&mut buffer)
            .map_err(Error::Reader)?
        {
            let island = match line {
                Line::Empty => continue,
                Line::Record(island) => island,
            };

            let hits = self
                .matcher
                .find(&island)
                .map_err(|err| Error::Matcher(err, reader.line_no()))?;

            writeln!(writer, "{}", Annotation::new(&buffer, &hits)).map_err(Error::Io)?;

            summary.islands += 1;

            if !hits.is_empty() {
                summary.islands_with_genes += 1;
            }
        }

        debug!(
            "annotated {} islands ({} with genes)",
            summary.islands, summary.islands_with_genes
        );

        Ok(summary)
    }
}
