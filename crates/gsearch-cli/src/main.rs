//! gsearch - interactive Google result scraper
//!
//! Prompts for a search term and a page count, scrapes that many result
//! pages and prints the ranked results.
//!
//! ```bash
//! gsearch
//! gsearch --country co.uk --lang de --json
//! gsearch --rps 0.5 --timeout 20
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gsearch_core::{
    ClientConfig, DEFAULT_COUNTRY, DEFAULT_DOMAINS_PATH, DEFAULT_LANGUAGE,
    DEFAULT_RESULTS_PER_PAGE, DomainMap, GoogleScraper, SearchQuery, SearchResult,
};
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, fmt};

mod prompt;

/// Scrape ranked results from Google search pages
#[derive(Parser)]
#[command(name = "gsearch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Domain map file (country code -> search URL template)
    #[arg(long, default_value = DEFAULT_DOMAINS_PATH)]
    config: PathBuf,

    /// Country code key into the domain map
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Interface language
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// Results requested per page
    #[arg(long, default_value_t = DEFAULT_RESULTS_PER_PAGE)]
    num: u32,

    /// Maximum page requests per second (no pacing when omitted)
    #[arg(long)]
    rps: Option<f64>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let Some(term) = prompt::read_search_term(&mut input, &mut stdout)? else {
        return Ok(());
    };
    let Some(pages) = prompt::read_page_count(&mut input, &mut stdout)? else {
        return Ok(());
    };
    drop(input);

    let domains = DomainMap::load(&cli.config)
        .with_context(|| format!("Failed to load domain map from {}", cli.config.display()))?;
    let scraper = GoogleScraper::with_config(domains, client_config(&cli))
        .context("Failed to create HTTP client")?;

    let query = SearchQuery::new(term, pages)
        .country(cli.country)
        .language(cli.lang)
        .results_per_page(cli.num);

    writeln!(stdout, "Searching Google for \"{}\"...", query.term)?;
    let results = scraper.scrape(&query).await.context("Search failed")?;

    print_results(&mut stdout, &results, cli.json)
}

fn client_config(cli: &Cli) -> ClientConfig {
    ClientConfig {
        timeout_secs: cli.timeout,
        requests_per_second: cli.rps,
        ..Default::default()
    }
}

fn print_results<W: Write>(out: &mut W, results: &[SearchResult], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, results)?;
        writeln!(out)?;
    } else {
        for result in results {
            writeln!(out, "{}", result)?;
        }
    }
    Ok(())
}
