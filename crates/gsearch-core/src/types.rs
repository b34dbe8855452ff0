//! Core data types for the search scraper

use std::fmt;

use serde::{Deserialize, Serialize};

/// Country code used when none is given
pub const DEFAULT_COUNTRY: &str = "com";

/// Interface language used when none is given
pub const DEFAULT_LANGUAGE: &str = "en";

/// Results requested per page when none is given
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 30;

/// One organic result extracted from a search results page
///
/// `rank` is 1-based and continuous across all pages of a single scrape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Position of the result within the whole scrape run
    pub rank: u32,

    /// Absolute URL of the result
    pub url: String,

    /// Heading text, empty if the markup lacks one
    pub title: String,

    /// Snippet text, empty if the markup lacks one
    pub description: String,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}\n   {}", self.rank, self.title, self.url)?;
        if !self.description.is_empty() {
            write!(f, "\n   {}", self.description)?;
        }
        Ok(())
    }
}

/// Parameters of one scrape run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Raw search term as typed by the user
    pub term: String,

    /// Key into the domain map (e.g. "com", "co.uk")
    pub country: String,

    /// Interface language passed as `hl`
    pub language: String,

    /// Number of result pages to fetch
    pub pages: u32,

    /// Results requested per page, passed as `num`
    pub results_per_page: u32,
}

impl SearchQuery {
    /// Create a query with the default country, language and page size
    pub fn new(term: impl Into<String>, pages: u32) -> Self {
        Self {
            term: term.into(),
            country: DEFAULT_COUNTRY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            pages,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn results_per_page(mut self, count: u32) -> Self {
        self.results_per_page = count;
        self
    }
}
