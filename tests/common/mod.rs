//! Shared test fixtures for the Food Log SDK integration tests.
//!
//! Provides `FakeSource`, an in-process [`FoodSource`] that answers from a
//! closure and records every URL it was asked for, plus payload builders
//! shaped like Open Food Facts responses.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use foodlog_sdk::{FoodLogError, FoodLogSdk, FoodRecord, FoodSource, Macros, Result};
use reqwest::Url;
use serde_json::{json, Value};

type Handler = Box<dyn Fn(&Url) -> Result<Value> + Send + Sync>;

pub struct FakeSource {
    handler: Handler,
    delay: Option<Duration>,
    calls: Mutex<Vec<Url>>,
}

impl FakeSource {
    pub fn new<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&Url) -> Result<Value> + Send + Sync + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
            delay: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Sleep before answering requests whose search term equals `slow_term`.
    pub fn with_slow_term<F>(handler: F, delay: Duration) -> Arc<Self>
    where
        F: Fn(&Url) -> Result<Value> + Send + Sync + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
            delay: Some(delay),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Always answer with the same body.
    pub fn fixed(body: Value) -> Arc<Self> {
        Self::new(move |_| Ok(body.clone()))
    }

    /// Always fail as if the network were down.
    pub fn failing() -> Arc<Self> {
        Self::new(|url| Err(FoodLogError::NotFound(format!("connection refused: {}", url))))
    }

    pub fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl FoodSource for FakeSource {
    fn get_json(&self, url: &Url) -> Result<Value> {
        self.calls.lock().unwrap().push(url.clone());
        if let Some(delay) = self.delay {
            if query_param(url, "search_terms").as_deref() == Some("slow") {
                std::thread::sleep(delay);
            }
        }
        (self.handler)(url)
    }
}

/// Build an SDK on top of `source`.
pub fn sdk_with(source: Arc<FakeSource>) -> FoodLogSdk {
    FoodLogSdk::builder().source(source).build().unwrap()
}

pub fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

pub fn product_json(code: &str, name: &str, kcal: f64) -> Value {
    json!({
        "code": code,
        "product_name": name,
        "brands": "Marque",
        "image_url": format!("https://images.example/{}.jpg", code),
        "nutriscore_grade": "b",
        "nutriments": {
            "energy-kcal_100g": kcal,
            "proteins_100g": 5.0,
            "carbohydrates_100g": 20.0,
            "fat_100g": 2.5
        }
    })
}

pub fn search_body(products: Vec<Value>) -> Value {
    json!({
        "count": products.len(),
        "page": 1,
        "products": products
    })
}

pub fn product_found(product: Value) -> Value {
    json!({ "status": 1, "status_verbose": "product found", "product": product })
}

pub fn product_missing(code: &str) -> Value {
    json!({ "code": code, "status": 0, "status_verbose": "product not found" })
}

/// A hand-built food record.
pub fn food(code: &str, kcal: f64) -> FoodRecord {
    FoodRecord {
        code: code.to_string(),
        display_name: format!("Food {}", code),
        brand: None,
        image_url: None,
        calories_per_100g: kcal,
        macros: Macros::default(),
        nutriscore_grade: None,
    }
}

pub fn food_with_macros(code: &str, kcal: f64, proteins: f64, carbs: f64, fat: f64) -> FoodRecord {
    FoodRecord {
        macros: Macros {
            proteins_per_100g: proteins,
            carbohydrates_per_100g: carbs,
            fat_per_100g: fat,
        },
        ..food(code, kcal)
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
