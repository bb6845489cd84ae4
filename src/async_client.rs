//! Async wrapper around [`FoodLogSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use foodlog_sdk::AsyncFoodLogSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncFoodLogSdk::builder().build().await.unwrap();
//!
//!     let foods = sdk.search("yaourt").await.unwrap();
//!     let outcome = sdk.lookup("3017620422003").await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::debounce::SearchDebouncer;
use crate::error::{FoodLogError, Result};
use crate::models::FoodRecord;
use crate::queries::LookupOutcome;
use crate::transport::FoodSource;
use crate::FoodLogSdk;

// ---------------------------------------------------------------------------
// AsyncFoodLogSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncFoodLogSdk`] instance.
#[derive(Default)]
pub struct AsyncFoodLogSdkBuilder {
    base_url: Option<String>,
    locale: Option<String>,
    page_size: Option<usize>,
    debounce: Option<Duration>,
    timeout: Option<Duration>,
    source: Option<Arc<dyn FoodSource>>,
}

impl AsyncFoodLogSdkBuilder {
    /// Set the Open Food Facts host.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the locale used for display names.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Maximum number of search results.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Quiet period used by [`AsyncFoodLogSdk::debouncer`].
    pub fn debounce(mut self, window: Duration) -> Self {
        self.debounce = Some(window);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the HTTP transport.
    pub fn source(mut self, source: Arc<dyn FoodSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is created on the blocking thread pool so
    /// it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncFoodLogSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = FoodLogSdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(locale) = self.locale {
                builder = builder.locale(locale);
            }
            if let Some(page_size) = self.page_size {
                builder = builder.page_size(page_size);
            }
            if let Some(window) = self.debounce {
                builder = builder.debounce(window);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(source) = self.source {
                builder = builder.source(source);
            }
            let sdk = builder.build()?;
            Ok(AsyncFoodLogSdk::from_sdk(sdk))
        })
        .await
        .map_err(|e| FoodLogError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncFoodLogSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`FoodLogSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The SDK is shared behind an [`Arc`];
/// cloning the wrapper is cheap.
#[derive(Clone)]
pub struct AsyncFoodLogSdk {
    inner: Arc<FoodLogSdk>,
}

impl AsyncFoodLogSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncFoodLogSdkBuilder {
        AsyncFoodLogSdkBuilder::default()
    }

    /// Wrap an already built SDK.
    pub fn from_sdk(sdk: FoodLogSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&FoodLogSdk) -> T + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| FoodLogError::InvalidArgument(format!("Task join error: {e}")))
    }

    /// Search for foods. Failures degrade to an empty list, as with
    /// [`FoodSearch::search`](crate::FoodSearch::search).
    pub async fn search(&self, term: &str) -> Result<Vec<FoodRecord>> {
        let term = term.to_string();
        self.run(move |s| s.search().search(&term)).await
    }

    /// Resolve a scanned barcode.
    pub async fn lookup(&self, code: &str) -> Result<LookupOutcome> {
        let code = code.to_string();
        self.run(move |s| s.barcode().lookup(&code)).await
    }

    /// Create a debounced search driver using the configured window.
    pub fn debouncer(&self) -> SearchDebouncer {
        SearchDebouncer::new(self.inner.clone())
    }

    /// Access the wrapped SDK.
    pub fn sdk(&self) -> &FoodLogSdk {
        &self.inner
    }
}
