//! Google Search Scraper Core Library
//!
//! Provides an async API for fetching paginated Google result pages and
//! extracting ranked organic results from them.
//!
//! # Overview
//!
//! - Domain map loading (country code to search URL template)
//! - Page URL building with Google's fixed stride of 10
//! - HTTP fetching with a rotated User-Agent per request
//! - HTML parsing into [`SearchResult`] records ranked continuously across pages
//!
//! # Example
//!
//! ```no_run
//! use gsearch_core::{DomainMap, GoogleScraper, Result, SearchQuery};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let domains = DomainMap::load("google_domains.json")?;
//!     let scraper = GoogleScraper::new(domains)?;
//!
//!     let results = scraper.scrape(&SearchQuery::new("rust web scraping", 2)).await?;
//!
//!     for result in &results {
//!         println!("{}: {}", result.rank, result.url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Any failure aborts the whole run: a non-200 response on page 3 means no
//! results at all, not the results of pages 1 and 2.

mod client;
mod domains;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;
pub mod user_agent;

// Re-export fetcher types
pub use client::{ClientConfig, HttpFetcher, PageFetcher, RequestPacer};

// Re-export configuration types
pub use domains::{DEFAULT_DOMAINS_PATH, DomainMap};

// Re-export error types
pub use error::{Result, SearchError};

// Re-export parser API
pub use parser::{ParsedPage, ResultSelectors, is_external_link, parse_results};

// Re-export main scraper API
pub use scraper::GoogleScraper;

// Re-export data types
pub use types::{
    DEFAULT_COUNTRY, DEFAULT_LANGUAGE, DEFAULT_RESULTS_PER_PAGE, SearchQuery, SearchResult,
};

// Re-export URL helpers
pub use url::{build_page_url, build_search_urls, normalize_term};

// Re-export User-Agent rotation
pub use user_agent::{IndexPicker, SeededPicker, SequencePicker, UserAgentPool};
