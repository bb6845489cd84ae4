//! Single-product lookup by scanned barcode.

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{self, FoodLogConfig};
use crate::error::{FoodLogError, Result};
use crate::models::FoodRecord;
use crate::normalize::normalize_product_with_code;
use crate::transport::FoodSource;

// ---------------------------------------------------------------------------
// LookupOutcome
// ---------------------------------------------------------------------------

/// Result of a barcode lookup. A miss is a value, not an error, so the
/// caller can re-arm scanning.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(FoodRecord),
    NotFound,
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    pub fn into_food(self) -> Option<FoodRecord> {
        match self {
            LookupOutcome::Found(food) => Some(food),
            LookupOutcome::NotFound => None,
        }
    }
}

impl From<Option<FoodRecord>> for LookupOutcome {
    fn from(food: Option<FoodRecord>) -> Self {
        food.map_or(LookupOutcome::NotFound, LookupOutcome::Found)
    }
}

// ---------------------------------------------------------------------------
// BarcodeLookup
// ---------------------------------------------------------------------------

/// Query interface for product-by-code lookups.
pub struct BarcodeLookup<'a> {
    source: &'a dyn FoodSource,
    config: &'a FoodLogConfig,
}

impl<'a> BarcodeLookup<'a> {
    /// Create a new `BarcodeLookup` bound to the given source and config.
    pub fn new(source: &'a dyn FoodSource, config: &'a FoodLogConfig) -> Self {
        Self { source, config }
    }

    /// Resolve `code` to a food.
    ///
    /// Transport failures are logged and reported as [`LookupOutcome::NotFound`]:
    /// at this layer a failed request and an unknown product are both
    /// "scan again".
    pub fn lookup(&self, code: &str) -> LookupOutcome {
        match self.try_lookup(code) {
            Ok(food) => food.into(),
            Err(e) => {
                warn!(code, error = %e, "barcode lookup failed");
                LookupOutcome::NotFound
            }
        }
    }

    /// Same as [`lookup`](Self::lookup) but surfaces failures. `Ok(None)`
    /// means the server does not know the product.
    pub fn try_lookup(&self, code: &str) -> Result<Option<FoodRecord>> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(None);
        }

        let url = product_url(self.config, code)?;
        let body = self.source.get_json(&url)?;
        let food = parse_product_response(&body, &self.config.locale, code)?;
        debug!(code, found = food.is_some(), "barcode lookup complete");
        Ok(food)
    }
}

/// Build the product URL for `code`. The code is escaped as a path segment.
pub fn product_url(config: &FoodLogConfig, code: &str) -> Result<Url> {
    let file = format!("{}.json", code);
    let mut segments: Vec<&str> = config::PRODUCT_PATH.to_vec();
    segments.push(&file);

    let mut url = super::endpoint(&config.base_url, &segments)?;
    url.query_pairs_mut()
        .append_pair("fields", &config::product_fields(&config.locale));
    Ok(url)
}

/// Interpret a product response: `status == 1` with a `product` object is a
/// hit, anything else a miss.
pub fn parse_product_response(body: &Value, locale: &str, code: &str) -> Result<Option<FoodRecord>> {
    let obj = body.as_object().ok_or_else(|| {
        FoodLogError::MalformedPayload("product response is not an object".into())
    })?;

    let found = obj.get("status").and_then(Value::as_i64) == Some(1);
    match obj.get("product") {
        Some(product) if found && !product.is_null() => {
            normalize_product_with_code(product, locale, code).map(Some)
        }
        _ => Ok(None),
    }
}
