//! HTTP transport for the Open Food Facts API.
//!
//! Query wrappers build fully-qualified URLs and hand them to a
//! [`FoodSource`]. [`HttpSource`] is the production implementation; tests
//! and offline callers plug in their own.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Fetches a JSON document for a URL.
///
/// Implementations must be shareable across threads so a single source can
/// back both the blocking SDK and the async wrappers.
pub trait FoodSource: Send + Sync {
    fn get_json(&self, url: &Url) -> Result<Value>;
}

/// [`FoodSource`] backed by a blocking `reqwest` client.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Create a source with the given request timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }
}

impl FoodSource for HttpSource {
    fn get_json(&self, url: &Url) -> Result<Value> {
        debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send()?.error_for_status()?;
        Ok(resp.json()?)
    }
}
