//! Main scraper API
//!
//! Drives URL building, fetching and parsing across all requested pages,
//! one page at a time.

use tracing::{debug, info};

use crate::client::{ClientConfig, HttpFetcher, PageFetcher};
use crate::domains::DomainMap;
use crate::error::Result;
use crate::parser::{ResultSelectors, parse_results};
use crate::types::{SearchQuery, SearchResult};
use crate::url::build_search_urls;

/// Paginated Google scraper
///
/// Pages are fetched strictly in order and the next request is only sent
/// once the previous page has been parsed. The first failure aborts the
/// whole run and no partial results are returned.
pub struct GoogleScraper<F = HttpFetcher> {
    domains: DomainMap,
    fetcher: F,
    selectors: ResultSelectors,
}

impl GoogleScraper<HttpFetcher> {
    /// Create a scraper using the default HTTP fetcher
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built
    pub fn new(domains: DomainMap) -> Result<Self> {
        Self::with_config(domains, ClientConfig::default())
    }

    /// Create a scraper with a custom HTTP fetcher configuration
    pub fn with_config(domains: DomainMap, config: ClientConfig) -> Result<Self> {
        Ok(Self::with_fetcher(domains, HttpFetcher::with_config(config)?))
    }
}

impl<F: PageFetcher> GoogleScraper<F> {
    /// Create a scraper on top of any page fetcher
    pub fn with_fetcher(domains: DomainMap, fetcher: F) -> Self {
        Self {
            domains,
            fetcher,
            selectors: ResultSelectors::default(),
        }
    }

    /// Replace the result markup signatures
    pub fn with_selectors(mut self, selectors: ResultSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Scrape every requested page and return all results ranked from 1
    ///
    /// # Errors
    /// - `UnsupportedCountry` before any request if the country is unknown
    /// - `TransportError` / `BlockedOrError` if any page fails to fetch
    /// - `ParseError` if any page cannot be parsed
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> gsearch_core::Result<()> {
    /// use gsearch_core::{DomainMap, GoogleScraper, SearchQuery};
    /// let domains = DomainMap::load("google_domains.json")?;
    /// let scraper = GoogleScraper::new(domains)?;
    /// for result in scraper.scrape(&SearchQuery::new("rust web scraping", 2)).await? {
    ///     println!("{}", result);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scrape(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        info!(
            term = %query.term,
            country = %query.country,
            pages = query.pages,
            "Searching Google"
        );

        let urls = build_search_urls(&self.domains, query)?;

        let mut results = Vec::new();
        let mut rank_offset = 0;

        for (page, url) in urls.iter().enumerate() {
            debug!(page, url = %url, "Scraping page");

            let html = self.fetcher.fetch(url).await?;
            let parsed = parse_results(&html, rank_offset, &self.selectors)?;

            rank_offset = parsed.rank_offset;
            results.extend(parsed.results);
        }

        info!(total = results.len(), "Search complete");
        Ok(results)
    }
}
