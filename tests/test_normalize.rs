//! Product normalization tests.

mod common;

use foodlog_sdk::normalize::{normalize_product, normalize_product_with_code};
use foodlog_sdk::FoodLogError;
use serde_json::json;

// ---------------------------------------------------------------------------
// display name
// ---------------------------------------------------------------------------

#[test]
fn localized_name_is_preferred() {
    let payload = json!({
        "code": "1",
        "product_name": "Chocolate spread",
        "product_name_fr": "Pâte à tartiner"
    });
    let food = normalize_product(&payload, "fr").unwrap();
    assert_eq!(food.display_name, "Pâte à tartiner");
}

#[test]
fn generic_name_used_when_localized_is_blank() {
    let payload = json!({
        "code": "1",
        "product_name": "Chocolate spread",
        "product_name_fr": "   "
    });
    let food = normalize_product(&payload, "fr").unwrap();
    assert_eq!(food.display_name, "Chocolate spread");
}

#[test]
fn placeholder_when_no_name() {
    let food = normalize_product(&json!({ "code": "1" }), "fr").unwrap();
    assert_eq!(food.display_name, "Nom inconnu");
}

#[test]
fn locale_selects_the_localized_field() {
    let payload = json!({
        "code": "1",
        "product_name_fr": "Lait",
        "product_name_en": "Milk"
    });
    assert_eq!(normalize_product(&payload, "en").unwrap().display_name, "Milk");
    assert_eq!(normalize_product(&payload, "fr").unwrap().display_name, "Lait");
}

// ---------------------------------------------------------------------------
// nutrients
// ---------------------------------------------------------------------------

#[test]
fn nutrients_are_read_per_100g() {
    let payload = common::product_json("3017620422003", "Nutella", 539.0);
    let food = normalize_product(&payload, "fr").unwrap();
    assert_eq!(food.calories_per_100g, 539.0);
    assert_eq!(food.macros.proteins_per_100g, 5.0);
    assert_eq!(food.macros.carbohydrates_per_100g, 20.0);
    assert_eq!(food.macros.fat_per_100g, 2.5);
}

#[test]
fn missing_nutriments_default_to_zero() {
    let food = normalize_product(&json!({ "code": "1" }), "fr").unwrap();
    assert_eq!(food.calories_per_100g, 0.0);
    assert_eq!(food.macros.proteins_per_100g, 0.0);
    assert_eq!(food.macros.carbohydrates_per_100g, 0.0);
    assert_eq!(food.macros.fat_per_100g, 0.0);
}

#[test]
fn each_macro_defaults_independently() {
    let payload = json!({
        "code": "1",
        "nutriments": { "energy-kcal_100g": 120, "fat_100g": 3.2 }
    });
    let food = normalize_product(&payload, "fr").unwrap();
    assert_eq!(food.calories_per_100g, 120.0);
    assert_eq!(food.macros.fat_per_100g, 3.2);
    assert_eq!(food.macros.proteins_per_100g, 0.0);
    assert_eq!(food.macros.carbohydrates_per_100g, 0.0);
}

#[test]
fn numeric_strings_are_accepted() {
    let payload = json!({ "code": "1", "nutriments": { "energy-kcal_100g": "42.5" } });
    let food = normalize_product(&payload, "fr").unwrap();
    assert_eq!(food.calories_per_100g, 42.5);
}

#[test]
fn non_numeric_and_negative_values_become_zero() {
    let payloads = [
        json!({ "code": "1", "nutriments": { "energy-kcal_100g": "n/a" } }),
        json!({ "code": "1", "nutriments": { "energy-kcal_100g": -12 } }),
        json!({ "code": "1", "nutriments": { "energy-kcal_100g": null } }),
        json!({ "code": "1", "nutriments": { "energy-kcal_100g": [1, 2] } }),
        json!({ "code": "1", "nutriments": "none" }),
    ];
    for payload in &payloads {
        let food = normalize_product(payload, "fr").unwrap();
        assert!(food.calories_per_100g >= 0.0);
        assert_eq!(food.calories_per_100g, 0.0, "payload: {}", payload);
    }
}

// ---------------------------------------------------------------------------
// optional fields
// ---------------------------------------------------------------------------

#[test]
fn brand_image_and_grade_are_optional() {
    let food = normalize_product(&json!({ "code": "1", "brands": "" }), "fr").unwrap();
    assert!(food.brand.is_none());
    assert!(food.image_url.is_none());
    assert!(food.nutriscore_grade.is_none());
}

#[test]
fn nutriscore_grade_is_uppercased() {
    let payload = common::product_json("1", "Yaourt", 60.0);
    let food = normalize_product(&payload, "fr").unwrap();
    assert_eq!(food.nutriscore_grade.as_deref(), Some("B"));
    assert_eq!(food.brand.as_deref(), Some("Marque"));
    assert_eq!(food.image_url.as_deref(), Some("https://images.example/1.jpg"));
}

#[test]
fn integer_codes_are_stringified() {
    let food = normalize_product(&json!({ "code": 3017620422003_u64 }), "fr").unwrap();
    assert_eq!(food.code, "3017620422003");
}

#[test]
fn missing_code_falls_back_to_scanned_code() {
    let food = normalize_product_with_code(&json!({ "product_name": "Pain" }), "fr", "123").unwrap();
    assert_eq!(food.code, "123");

    let food = normalize_product_with_code(&json!({ "code": "456" }), "fr", "123").unwrap();
    assert_eq!(food.code, "456");
}

// ---------------------------------------------------------------------------
// malformed payloads
// ---------------------------------------------------------------------------

#[test]
fn non_object_payload_is_rejected() {
    for payload in [json!(null), json!("code"), json!([1, 2]), json!(12)] {
        let err = normalize_product(&payload, "fr").unwrap_err();
        assert!(matches!(err, FoodLogError::MalformedPayload(_)));
    }
}
