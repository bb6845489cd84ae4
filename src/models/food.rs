use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macros
// ---------------------------------------------------------------------------

/// Macronutrients per 100g. Each value is zero when the source omits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub proteins_per_100g: f64,
    pub carbohydrates_per_100g: f64,
    pub fat_per_100g: f64,
}

// ---------------------------------------------------------------------------
// FoodRecord
// ---------------------------------------------------------------------------

/// A normalized food product.
///
/// Built by [`normalize_product`](crate::normalize::normalize_product) from an
/// Open Food Facts payload and never mutated afterwards. `code` is the
/// identity used by [`SelectionSet`](crate::SelectionSet) and meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub code: String,
    pub display_name: String,
    pub brand: Option<String>,
    pub image_url: Option<String>,
    pub calories_per_100g: f64,
    pub macros: Macros,
    pub nutriscore_grade: Option<String>,
}
