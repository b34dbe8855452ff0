//! URL helper functions for Google result pages
//!
//! Provides the search term normalization and the per-page URL builder.

use crate::domains::DomainMap;
use crate::error::Result;
use crate::types::SearchQuery;

/// Offset between consecutive result pages
///
/// Google pages by 10 regardless of the `num` parameter.
pub const PAGE_STRIDE: u32 = 10;

/// Normalizes a search term the way Google encodes it in the query string
///
/// Surrounding whitespace is trimmed and every remaining space becomes `+`.
/// No other percent-encoding is applied.
///
/// # Example
/// ```
/// use gsearch_core::url::normalize_term;
/// assert_eq!(normalize_term("  rust web scraping "), "rust+web+scraping");
/// ```
pub fn normalize_term(term: &str) -> String {
    term.trim().replace(' ', "+")
}

/// Builds the URL of a single result page
///
/// # Arguments
/// * `template` - Domain template ending with the query parameter prefix
/// * `term` - Already normalized search term
/// * `page` - 0-based page index
///
/// # Example
/// ```
/// use gsearch_core::url::build_page_url;
/// let url = build_page_url("https://www.google.com/search?q=", "rust", "en", 30, 1);
/// assert_eq!(
///     url,
///     "https://www.google.com/search?q=rust&num=30&hl=en&start=10&filter=0"
/// );
/// ```
pub fn build_page_url(
    template: &str,
    term: &str,
    language: &str,
    results_per_page: u32,
    page: u32,
) -> String {
    let start = u64::from(page) * u64::from(PAGE_STRIDE);
    format!(
        "{}{}&num={}&hl={}&start={}&filter=0",
        template, term, results_per_page, language, start
    )
}

/// Builds one request URL per result page, in page order
///
/// # Returns
/// Exactly `query.pages` URLs; empty when `query.pages` is 0
///
/// # Errors
/// `UnsupportedCountry` if `query.country` has no entry in `domains`
pub fn build_search_urls(domains: &DomainMap, query: &SearchQuery) -> Result<Vec<String>> {
    let template = domains.resolve(&query.country)?;
    let term = normalize_term(&query.term);

    Ok((0..query.pages)
        .map(|page| {
            build_page_url(
                template,
                &term,
                &query.language,
                query.results_per_page,
                page,
            )
        })
        .collect())
}
