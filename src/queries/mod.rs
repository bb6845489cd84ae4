//! Query modules for the Food Log SDK.
//!
//! Each module provides a query struct that borrows a [`FoodSource`](crate::transport::FoodSource)
//! and the SDK's [`FoodLogConfig`](crate::config::FoodLogConfig), and returns
//! normalized [`FoodRecord`](crate::models::FoodRecord)s.

pub mod barcode;
pub mod search;

pub use barcode::{BarcodeLookup, LookupOutcome};
pub use search::FoodSearch;

use reqwest::Url;

use crate::error::{FoodLogError, Result};

/// Append path segments to the configured base URL.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FoodLogError::InvalidArgument(format!("base URL cannot take a path: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    url.set_query(None);
    Ok(url)
}
