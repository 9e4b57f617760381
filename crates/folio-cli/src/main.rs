//! Folio CLI - run one full-text search from the terminal.
//!
//! # Usage
//!
//! ```bash
//! folio-search "katze"
//! folio-search "wiener zeitung" --source anno.onb.ac.at -n 20
//! folio-search "katze" --page 2 --json
//! folio-search "katze" --config ./config.json
//! ```

mod config;
mod output;
mod search;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Folio full-text search CLI.
///
/// Searches the OCR text of digitised newspaper and book pages through the
/// same search service the Folio front-end uses.
#[derive(Parser)]
#[command(name = "folio-search", version, about)]
struct Cli {
    /// Search query
    query: String,

    /// Only return pages from this source (e.g. anno.onb.ac.at)
    #[arg(short, long)]
    source: Option<String>,

    /// Results per page
    #[arg(short = 'n', long, default_value = "10")]
    per_page: usize,

    /// Page of results to show (1-based)
    #[arg(short, long, default_value = "1")]
    page: usize,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file (default: $FOLIO_CONFIG, TYPESENSE_* variables, or
    /// the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = config::resolve_config(cli.config.as_ref())?;
    let options = search::SearchOptions {
        source: cli.source,
        per_page: cli.per_page,
        page: cli.page,
    };

    let Some(page) = search::execute_search(&config, &cli.query, &options).await? else {
        eprintln!("Empty search query. Use --help for usage information.");
        std::process::exit(1);
    };

    let output = if cli.json {
        output::format_json(&page)
    } else {
        output::format_human(&page, options.effective_per_page())
    };
    println!("{}", output);

    Ok(())
}
