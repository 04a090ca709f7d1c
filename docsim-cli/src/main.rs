//! docsim CLI - report the most similar pairs of documents in a directory

use anyhow::Result;
use clap::Parser;
use docsim::{Analyzer, AnalyzerConfig, OutputFormat, Selection};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "docsim")]
#[command(
    author,
    version,
    about = "docsim - find the most similar pairs of text documents"
)]
struct Cli {
    /// Directory containing the documents
    #[arg(default_value = "./textbooks", env = "DOCSIM_DIR")]
    dir: PathBuf,

    /// Minimum number of documents required
    #[arg(long, default_value_t = docsim::DEFAULT_MIN_CORPUS_SIZE, env = "DOCSIM_MIN_DOCS")]
    min_docs: usize,

    /// Number of pairs to report
    #[arg(long, short = 'k', default_value_t = docsim::DEFAULT_TOP_K, env = "DOCSIM_TOP_K")]
    top_k: usize,

    /// Select files whose name contains this substring
    #[arg(long, default_value = docsim::config::DEFAULT_NAME_FILTER, conflicts_with = "pattern")]
    contains: String,

    /// Select files whose name matches this glob instead (e.g. "*.txt")
    #[arg(long, short = 'p')]
    pattern: Option<String>,

    /// Descend into subdirectories
    #[arg(long, short = 'r')]
    recursive: bool,

    /// Score pairs on all cores
    #[arg(long)]
    parallel: bool,

    /// Output format (text, json)
    #[arg(long, short = 'o', default_value = "text")]
    format: String,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr; stdout carries the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let format: OutputFormat = cli.format.parse()?;

    let selection = match cli.pattern.as_deref() {
        Some(pattern) => Selection::glob(pattern)?,
        None => Selection::Contains(cli.contains.clone()),
    };

    let config = AnalyzerConfig {
        min_corpus_size: cli.min_docs,
        top_k: cli.top_k,
        selection,
        recursive: cli.recursive,
        parallel: cli.parallel,
    };

    let analysis = Analyzer::new(config).analyze(&cli.dir)?;
    tracing::debug!(
        "build={:?} rank={:?} total={:?}",
        analysis.stats.build_time,
        analysis.stats.rank_time,
        analysis.stats.duration
    );

    print!("{}", analysis.report().render(format)?);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
