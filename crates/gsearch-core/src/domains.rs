//! Country code to search domain mapping
//!
//! The mapping is a flat JSON object whose values are URL templates ending
//! right where the search term gets appended, e.g.
//! `{"com": "https://www.google.com/search?q="}`.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, SearchError};

/// Location of the domain map relative to the working directory
pub const DEFAULT_DOMAINS_PATH: &str = "google_domains.json";

/// Read-only mapping from country code to URL template
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainMap {
    templates: HashMap<String, String>,
}

impl DomainMap {
    /// Load the mapping from a JSON file
    ///
    /// # Errors
    /// `ConfigUnavailable` if the file cannot be read or is not a flat
    /// string-to-string object
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            SearchError::ConfigUnavailable(format!("file read error ({}): {}", path.display(), e))
        })?;
        Self::from_json_str(&data)
    }

    /// Parse the mapping from an in-memory JSON string
    ///
    /// # Errors
    /// `ConfigUnavailable` if the JSON is not a flat string-to-string object
    pub fn from_json_str(json: &str) -> Result<Self> {
        let templates: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| SearchError::ConfigUnavailable(format!("invalid domain map: {}", e)))?;
        Ok(Self { templates })
    }

    /// Look up the URL template for a country code
    ///
    /// # Errors
    /// `UnsupportedCountry` carrying the code if it has no entry. An entry
    /// with an empty template counts as missing.
    pub fn resolve(&self, country: &str) -> Result<&str> {
        self.templates
            .get(country)
            .map(String::as_str)
            .filter(|template| !template.is_empty())
            .ok_or_else(|| SearchError::UnsupportedCountry(country.to_string()))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<(String, String)> for DomainMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}
