//! CSS signatures of Google's result markup
//!
//! Google changes its markup without notice. Everything the parser knows
//! about the page structure is in this file.

use scraper::Selector;

use crate::error::{Result, SearchError};

/// One organic result block
pub const RESULT_CONTAINER: &str = "div.g";

/// Result link, the first anchor inside the container is used
pub const RESULT_LINK: &str = "a";

/// Result heading; legacy `h3.r` and current plain `h3`
pub const RESULT_TITLE: &str = "h3.r, h3";

/// Result snippet; legacy `span.st` and current `div.VwiC3b`
pub const RESULT_SNIPPET: &str = "span.st, div.VwiC3b";

/// Selector strings for one result block and its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSelectors {
    pub container: String,
    pub link: String,
    pub title: String,
    pub snippet: String,
}

impl Default for ResultSelectors {
    fn default() -> Self {
        Self {
            container: RESULT_CONTAINER.to_string(),
            link: RESULT_LINK.to_string(),
            title: RESULT_TITLE.to_string(),
            snippet: RESULT_SNIPPET.to_string(),
        }
    }
}

/// Selectors compiled and ready to query a document
pub(crate) struct CompiledSelectors {
    pub container: Selector,
    pub link: Selector,
    pub title: Selector,
    pub snippet: Selector,
}

impl ResultSelectors {
    /// # Errors
    /// `ParseError` naming the selector that failed to compile
    pub(crate) fn compile(&self) -> Result<CompiledSelectors> {
        Ok(CompiledSelectors {
            container: compile_one(&self.container)?,
            link: compile_one(&self.link)?,
            title: compile_one(&self.title)?,
            snippet: compile_one(&self.snippet)?,
        })
    }
}

fn compile_one(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| SearchError::ParseError(format!("Invalid selector {:?}: {:?}", selector, e)))
}
