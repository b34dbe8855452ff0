//! Result page parser
//!
//! Turns one Google results page into ranked [`SearchResult`] records.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::Result;
use crate::parser::selectors::{CompiledSelectors, ResultSelectors};
use crate::types::SearchResult;

/// Records extracted from one page plus the rank counter to carry forward
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPage {
    /// Records in document order
    pub results: Vec<SearchResult>,
    /// Last rank assigned so far; pass it as `rank_offset` for the next page
    pub rank_offset: u32,
}

/// Parses a results page and ranks every organic result on it
///
/// The first emitted record gets rank `rank_offset + 1`. Blocks whose link
/// is empty, `#` or relative are skipped and consume no rank.
///
/// # Arguments
/// * `html` - Raw HTML of the results page
/// * `rank_offset` - Number of results already emitted by previous pages
/// * `selectors` - Markup signatures of a result block
///
/// A page without any result block, including an empty body, yields no
/// records and leaves the counter unchanged.
///
/// # Errors
/// `ParseError` if a selector does not compile
pub fn parse_results(
    html: &str,
    rank_offset: u32,
    selectors: &ResultSelectors,
) -> Result<ParsedPage> {
    let compiled = selectors.compile()?;
    let document = Html::parse_document(html);

    let mut rank = rank_offset;
    let mut results = Vec::new();
    let mut skipped = 0usize;

    for block in document.select(&compiled.container) {
        let Some(url) = block_link(&block, &compiled) else {
            skipped += 1;
            continue;
        };

        rank += 1;
        results.push(SearchResult {
            rank,
            url,
            title: joined_text(&block, &compiled.title),
            description: joined_text(&block, &compiled.snippet),
        });
    }

    debug!(emitted = results.len(), skipped, rank_offset = rank, "Parsed result page");

    Ok(ParsedPage {
        results,
        rank_offset: rank,
    })
}

/// Whether a link points outside Google's own pages
///
/// Empty links, bare `#` anchors and relative paths (ads, sitelinks,
/// internal navigation) are rejected.
pub fn is_external_link(url: &str) -> bool {
    !url.is_empty() && url != "#" && !url.starts_with('/')
}

/// The trimmed href of the block's first anchor, if it is external
///
/// Only the first anchor counts: when it has no href the block is dropped
/// even if a later anchor would qualify.
fn block_link(block: &ElementRef, selectors: &CompiledSelectors) -> Option<String> {
    let href = block
        .select(&selectors.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or_default()
        .trim();

    is_external_link(href).then(|| href.to_string())
}

/// Text of every match concatenated in document order, then trimmed
fn joined_text(block: &ElementRef, selector: &Selector) -> String {
    block
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}
