//! Text search against the Open Food Facts search endpoint.

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{self, FoodLogConfig};
use crate::error::{FoodLogError, Result};
use crate::models::FoodRecord;
use crate::normalize::normalize_product;
use crate::transport::FoodSource;

// ---------------------------------------------------------------------------
// FoodSearch
// ---------------------------------------------------------------------------

/// Query interface for free-text food search.
pub struct FoodSearch<'a> {
    source: &'a dyn FoodSource,
    config: &'a FoodLogConfig,
}

impl<'a> FoodSearch<'a> {
    /// Create a new `FoodSearch` bound to the given source and config.
    pub fn new(source: &'a dyn FoodSource, config: &'a FoodLogConfig) -> Self {
        Self { source, config }
    }

    /// Search for foods matching `term`.
    ///
    /// Returns at most `page_size` records in the order the server ranked
    /// them. A blank term returns nothing without touching the network.
    /// Transport and parse failures are logged and yield an empty list.
    pub fn search(&self, term: &str) -> Vec<FoodRecord> {
        match self.try_search(term) {
            Ok(foods) => foods,
            Err(e) => {
                warn!(term, error = %e, "food search failed");
                Vec::new()
            }
        }
    }

    /// Same as [`search`](Self::search) but surfaces failures.
    pub fn try_search(&self, term: &str) -> Result<Vec<FoodRecord>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let url = search_url(self.config, term)?;
        let body = self.source.get_json(&url)?;
        let foods = parse_search_response(&body, &self.config.locale, self.config.page_size)?;
        debug!(term, results = foods.len(), "food search complete");
        Ok(foods)
    }
}

/// Build the search URL for `term`.
pub fn search_url(config: &FoodLogConfig, term: &str) -> Result<Url> {
    let mut url = super::endpoint(&config.base_url, config::SEARCH_PATH)?;
    url.query_pairs_mut()
        .append_pair("search_terms", term)
        .append_pair("search_simple", "1")
        .append_pair("action", "process")
        .append_pair("json", "1")
        .append_pair("fields", &config::product_fields(&config.locale))
        .append_pair("page_size", &config.page_size.to_string());
    Ok(url)
}

/// Extract and normalize the `products` array of a search response.
///
/// A missing array means zero results. Entries that are not objects are
/// skipped.
pub fn parse_search_response(body: &Value, locale: &str, limit: usize) -> Result<Vec<FoodRecord>> {
    let obj = body.as_object().ok_or_else(|| {
        FoodLogError::MalformedPayload("search response is not an object".into())
    })?;

    let Some(products) = obj.get("products").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    let foods = products
        .iter()
        .filter_map(|p| match normalize_product(p, locale) {
            Ok(food) => Some(food),
            Err(e) => {
                warn!(error = %e, "skipping search result");
                None
            }
        })
        .take(limit)
        .collect();
    Ok(foods)
}
