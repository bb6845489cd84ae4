//! Mapping of raw Open Food Facts product payloads into [`FoodRecord`]s.
//!
//! Missing fields never fail: names fall back to the generic name and then
//! to [`UNKNOWN_NAME`](config::UNKNOWN_NAME), nutrients default to zero.
//! Only a payload that is not a JSON object is rejected.

use serde_json::{Map, Value};

use crate::config;
use crate::error::{FoodLogError, Result};
use crate::models::{FoodRecord, Macros};

/// Normalize a product payload using the given locale for the localized name.
pub fn normalize_product(payload: &Value, locale: &str) -> Result<FoodRecord> {
    let obj = payload.as_object().ok_or_else(|| {
        FoodLogError::MalformedPayload(format!(
            "expected a product object, got {}",
            json_kind(payload)
        ))
    })?;

    let nutriments = obj.get("nutriments").and_then(Value::as_object);
    let nutrient = |key: &str| nutriments.and_then(|n| number_field(n, key)).unwrap_or(0.0);

    Ok(FoodRecord {
        code: code_field(obj).unwrap_or_default(),
        display_name: display_name(obj, locale),
        brand: text_field(obj, "brands"),
        image_url: text_field(obj, "image_url"),
        calories_per_100g: nutrient(config::ENERGY_KCAL_KEY),
        macros: Macros {
            proteins_per_100g: nutrient(config::PROTEINS_KEY),
            carbohydrates_per_100g: nutrient(config::CARBOHYDRATES_KEY),
            fat_per_100g: nutrient(config::FAT_KEY),
        },
        nutriscore_grade: text_field(obj, "nutriscore_grade").map(|g| g.to_uppercase()),
    })
}

/// Like [`normalize_product`], but uses `code` when the payload has none.
///
/// The product endpoint is keyed by the scanned code, so that code is the
/// product's identity even when the body leaves it out.
pub fn normalize_product_with_code(payload: &Value, locale: &str, code: &str) -> Result<FoodRecord> {
    let mut food = normalize_product(payload, locale)?;
    if food.code.is_empty() {
        food.code = code.to_string();
    }
    Ok(food)
}

fn display_name(obj: &Map<String, Value>, locale: &str) -> String {
    text_field(obj, &config::localized_name_key(locale))
        .or_else(|| text_field(obj, "product_name"))
        .unwrap_or_else(|| config::UNKNOWN_NAME.to_string())
}

/// Non-empty trimmed string field.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Codes come back as strings, but older products sometimes carry integers.
fn code_field(obj: &Map<String, Value>) -> Option<String> {
    match obj.get("code")? {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric nutriment value. Accepts numbers and numeric strings; negative
/// and non-finite values count as absent.
fn number_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match obj.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (value.is_finite() && value >= 0.0).then_some(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
