//! Food Log SDK for Rust.
//!
//! Searches the Open Food Facts database, resolves scanned barcodes and
//! builds meals with per-meal nutrition totals. Everything except the two
//! lookups is plain in-memory state owned by the caller.
//!
//! # Quick start
//!
//! ```no_run
//! use foodlog_sdk::{FoodLogSdk, MealDraft, MealStore, MealType};
//!
//! let sdk = FoodLogSdk::builder().build().unwrap();
//! let mut store = MealStore::new();
//! let mut draft = MealDraft::new();
//!
//! for food in sdk.search().search("nutella").into_iter().take(1) {
//!     draft.toggle(food);
//! }
//! draft.choose(MealType::Snack);
//! let id = draft.commit(&mut store).unwrap();
//! println!("{}", store.get(id).unwrap());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod aggregator;
pub mod config;
#[cfg(feature = "async")]
pub mod debounce;
pub mod error;
pub mod models;
pub mod normalize;
pub mod queries;
pub mod selection;
pub mod sequence;
pub mod session;
pub mod store;
pub mod transport;

pub use aggregator::MealAggregator;
#[cfg(feature = "async")]
pub use async_client::AsyncFoodLogSdk;
pub use config::FoodLogConfig;
#[cfg(feature = "async")]
pub use debounce::{SearchDebouncer, SearchUpdate};
pub use error::{FoodLogError, Result};
pub use models::{FoodRecord, Macros, MealId, MealRecord, MealType, NutritionTotals};
pub use queries::{BarcodeLookup, FoodSearch, LookupOutcome};
pub use selection::SelectionSet;
pub use sequence::{RequestSequencer, Ticket};
pub use session::{scan_into, MealDraft, ScanGate, ScanOutcome};
pub use store::MealStore;
pub use transport::{FoodSource, HttpSource};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// FoodLogSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FoodLogSdk`] instance.
///
/// Use [`FoodLogSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FoodLogSdkBuilder::build) to create the SDK.
#[derive(Default)]
pub struct FoodLogSdkBuilder {
    base_url: Option<String>,
    locale: Option<String>,
    page_size: Option<usize>,
    debounce: Option<Duration>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    source: Option<Arc<dyn FoodSource>>,
}

impl FoodLogSdkBuilder {
    /// Set the Open Food Facts host. Defaults to `https://fr.openfoodfacts.org`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the locale whose `product_name_<locale>` field is preferred for
    /// display names. Defaults to `fr`.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Maximum number of search results. Defaults to 10.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Quiet period before a debounced search fires. Defaults to 500ms.
    pub fn debounce(mut self, window: Duration) -> Self {
        self.debounce = Some(window);
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds. Ignored when a custom source is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the `User-Agent` header. Open Food Facts asks clients to identify
    /// themselves. Ignored when a custom source is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the HTTP transport.
    pub fn source(mut self, source: Arc<dyn FoodSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Validate the settings and build the SDK.
    ///
    /// No request is made here.
    pub fn build(self) -> Result<FoodLogSdk> {
        let defaults = FoodLogConfig::default();

        let base_url = match self.base_url {
            Some(raw) => reqwest::Url::parse(&raw)
                .map_err(|e| FoodLogError::InvalidArgument(format!("invalid base URL {raw:?}: {e}")))?,
            None => defaults.base_url,
        };

        let locale = self.locale.unwrap_or(defaults.locale);
        if locale.trim().is_empty() {
            return Err(FoodLogError::InvalidArgument("locale must not be empty".into()));
        }

        let page_size = self.page_size.unwrap_or(defaults.page_size);
        if page_size == 0 {
            return Err(FoodLogError::InvalidArgument("page size must be at least 1".into()));
        }

        let config = FoodLogConfig {
            base_url,
            locale: locale.trim().to_string(),
            page_size,
            debounce: self.debounce.unwrap_or(defaults.debounce),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        };

        let source: Arc<dyn FoodSource> = match self.source {
            Some(source) => source,
            None => Arc::new(HttpSource::new(config.timeout, &config.user_agent)?),
        };

        Ok(FoodLogSdk { source, config })
    }
}

// ---------------------------------------------------------------------------
// FoodLogSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Food Log SDK.
///
/// Owns the transport and the resolved configuration, and hands out
/// lightweight borrowing query wrappers.
///
/// Created via [`FoodLogSdk::builder()`].
pub struct FoodLogSdk {
    source: Arc<dyn FoodSource>,
    config: FoodLogConfig,
}

impl FoodLogSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> FoodLogSdkBuilder {
        FoodLogSdkBuilder::default()
    }

    /// Access the food search interface.
    pub fn search(&self) -> FoodSearch<'_> {
        FoodSearch::new(self.source.as_ref(), &self.config)
    }

    /// Access the barcode lookup interface.
    pub fn barcode(&self) -> BarcodeLookup<'_> {
        BarcodeLookup::new(self.source.as_ref(), &self.config)
    }

    pub fn config(&self) -> &FoodLogConfig {
        &self.config
    }

    /// Return the underlying transport.
    pub fn source(&self) -> &Arc<dyn FoodSource> {
        &self.source
    }
}

impl fmt::Display for FoodLogSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FoodLogSdk(base_url={}, locale={}, page_size={})",
            self.config.base_url, self.config.locale, self.config.page_size
        )
    }
}
