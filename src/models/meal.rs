use std::fmt;
use std::ops::Add;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::food::FoodRecord;

// ---------------------------------------------------------------------------
// MealType
// ---------------------------------------------------------------------------

/// The suggested meal categories. A meal may carry any other label too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// Display label stored on the meal record.
    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Petit déjeuner",
            MealType::Lunch => "Déjeuner",
            MealType::Dinner => "Dîner",
            MealType::Snack => "Snack",
        }
    }

    /// Match a label back to a suggested category, if it is one.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<MealType> for String {
    fn from(t: MealType) -> Self {
        t.label().to_string()
    }
}

// ---------------------------------------------------------------------------
// MealId
// ---------------------------------------------------------------------------

/// Identifier generated when a meal is committed. Independent of `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(Uuid);

impl MealId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MealId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ---------------------------------------------------------------------------
// NutritionTotals
// ---------------------------------------------------------------------------

/// Sums over the foods of a meal.
///
/// Values are the plain sum of each food's per-100g figures. No portion
/// size is applied, so `calories` reads as "kcal per 100g, summed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub proteins: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

impl Add<&FoodRecord> for NutritionTotals {
    type Output = NutritionTotals;

    fn add(self, food: &FoodRecord) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories + food.calories_per_100g,
            proteins: self.proteins + food.macros.proteins_per_100g,
            carbohydrates: self.carbohydrates + food.macros.carbohydrates_per_100g,
            fat: self.fat + food.macros.fat_per_100g,
        }
    }
}

// ---------------------------------------------------------------------------
// MealRecord
// ---------------------------------------------------------------------------

/// A committed meal. Created by [`MealAggregator::commit`](crate::MealAggregator::commit);
/// fields are private so a record cannot change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    id: MealId,
    meal_type: String,
    foods: Vec<FoodRecord>,
    created_at: DateTime<Utc>,
}

impl MealRecord {
    pub(crate) fn new(meal_type: String, foods: Vec<FoodRecord>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: MealId::new(),
            meal_type,
            foods,
            created_at,
        }
    }

    pub fn id(&self) -> MealId {
        self.id
    }

    pub fn meal_type(&self) -> &str {
        &self.meal_type
    }

    /// Foods in selection order.
    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Derived totals, recomputed on every call.
    pub fn totals(&self) -> NutritionTotals {
        self.foods
            .iter()
            .fold(NutritionTotals::default(), |acc, food| acc + food)
    }

    pub fn total_calories(&self) -> f64 {
        self.foods.iter().map(|f| f.calories_per_100g).sum()
    }
}

impl fmt::Display for MealRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} • {} • {} kcal",
            self.meal_type,
            self.created_at.format("%d/%m/%Y"),
            self.total_calories()
        )
    }
}
