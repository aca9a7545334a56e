//! A binary to annotate genomic islands with the genes that overlap them.
//!
//! ```shell
//! cargo run --release --bin=genes-in-islands -- genes.tsv islands.txt > annotated.txt
//! ```
//!
//! For each island in the interval file, the original line is printed
//! followed by two tab-separated columns: the number of overlapping genes and
//! the comma-joined list of their identifiers. Either input may be gzipped.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write as _;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use islandgenes::annotator::Annotator;
use islandgenes::core::Position;
use islandgenes::index;
use islandgenes::overlap::matcher::DEFAULT_MIN_OVERLAP;
use islandgenes::overlap::Matcher;
use islandgenes::Reader;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// The extension of gzipped input files.
const GZIP_EXTENSION: &str = "gz";

/// Extended help describing the expected file formats.
const AFTER_HELP: &str = "\
The gene reference file should look like this, at least for the first four
columns (chromosome, gene id, start, end):

    1\tAT1G01010\t3631\t5899\t+\t26
    1\tAT1G01020\t6788\t9130\t-\t42137

The interval file has no header and three columns (chromosome, start, end):

    1 30001 32000
    1 52001 54000

Both files have to be sorted by chromosome number and by coordinates.

Each interval line is printed back with two supplementary columns: the number
of genes and the comma-separated list of gene names. A star (*) is added when
part of the gene lies outside the interval but at least the minimum overlap
lies inside; two stars (**) mean the gene covers the whole interval.";

/// Annotates genomic islands with the genes that overlap them.
#[derive(Parser)]
#[command(version, about, after_long_help = AFTER_HELP)]
struct Args {
    /// The gene reference file (chromosome, gene id, start, end, ...).
    genes_ref_file: PathBuf,

    /// The interval file (chromosome, start, end).
    interval_file: PathBuf,

    /// The number of chromosomes in the genome.
    #[arg(long, default_value_t = index::DEFAULT_CHROMOSOME_COUNT)]
    chromosomes: usize,

    /// The minimum number of bases a gene must share with an interval.
    #[arg(long, default_value_t = DEFAULT_MIN_OVERLAP)]
    min_overlap: Position,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Returns whether `path` names a gzipped file.
fn is_gzipped(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == GZIP_EXTENSION)
}

/// Opens a file for reading, decompressing it if it is gzipped.
fn open(path: &Path) -> Result<Reader<Box<dyn BufRead>>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let inner: Box<dyn BufRead> = match is_gzipped(path) {
        true => Box::new(BufReader::new(GzDecoder::new(file))),
        false => Box::new(BufReader::new(file)),
    };

    Ok(Reader::new(inner))
}

/// Runs the annotation.
fn run(args: &Args) -> Result<()> {
    if args.chromosomes == 0 {
        bail!("`--chromosomes` must be greater than 0");
    }

    if args.min_overlap < 1 {
        bail!("`--min-overlap` must be greater than 0");
    }

    let genes = open(&args.genes_ref_file)?;
    let index = index::Builder::default()
        .chromosome_count(args.chromosomes)
        .try_build_from(genes)
        .with_context(|| format!("reading genes from {}", args.genes_ref_file.display()))?;

    info!(
        "gene index: {} genes across {} chromosomes",
        index.gene_count(),
        index.chromosome_count()
    );

    let mut islands = open(&args.interval_file)?;
    let matcher = Matcher::new(&index).with_min_overlap(args.min_overlap);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let summary = Annotator::new(matcher)
        .annotate(&mut islands, &mut writer)
        .with_context(|| format!("annotating islands from {}", args.interval_file.display()))?;

    writer.flush().context("flushing output")?;

    info!(
        "annotated {} islands ({} with at least one gene)",
        summary.islands(),
        summary.islands_with_genes()
    );

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(io::stderr)
            .init(),
    };

    run(&args)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn two_positional_arguments() {
        let args = Args::try_parse_from(["genes-in-islands", "genes.tsv", "islands.txt"]).unwrap();

        assert_eq!(args.genes_ref_file, PathBuf::from("genes.tsv"));
        assert_eq!(args.interval_file, PathBuf::from("islands.txt"));
        assert_eq!(args.chromosomes, 5);
        assert_eq!(args.min_overlap, 500);
    }

    #[test]
    fn wrong_number_of_arguments() {
        assert!(Args::try_parse_from(["genes-in-islands"]).is_err());
        assert!(Args::try_parse_from(["genes-in-islands", "genes.tsv"]).is_err());
        assert!(Args::try_parse_from(["genes-in-islands", "a", "b", "c"]).is_err());
    }

    #[test]
    fn gzipped_paths() {
        assert!(is_gzipped(Path::new("genes.tsv.gz")));
        assert!(!is_gzipped(Path::new("genes.tsv")));
        assert!(!is_gzipped(Path::new("gz")));
    }
}
