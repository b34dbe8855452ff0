//! HTML parsers for Google result pages
//!
//! Markup signatures live in [`selectors`]; extraction lives in [`results`].

pub mod results;
pub mod selectors;

pub use results::{ParsedPage, is_external_link, parse_results};
pub use selectors::ResultSelectors;
