//! Turning a pending selection into a committed meal.

use chrono::{DateTime, Utc};

use crate::error::{FoodLogError, Result};
use crate::models::MealRecord;
use crate::selection::SelectionSet;

/// Builds [`MealRecord`]s from a meal type and a [`SelectionSet`].
///
/// The aggregator never touches a [`MealStore`](crate::MealStore); storing
/// the result is up to the caller.
pub struct MealAggregator;

impl MealAggregator {
    /// Commit a meal stamped with the current time.
    ///
    /// Fails with [`FoodLogError::Validation`] when `meal_type` is unset or
    /// blank, or when the selection is empty.
    pub fn commit(meal_type: Option<&str>, selection: &SelectionSet) -> Result<MealRecord> {
        Self::commit_at(meal_type, selection, Utc::now())
    }

    /// Commit a meal with an explicit creation time.
    pub fn commit_at(
        meal_type: Option<&str>,
        selection: &SelectionSet,
        created_at: DateTime<Utc>,
    ) -> Result<MealRecord> {
        let meal_type = meal_type
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| FoodLogError::Validation("a meal type must be chosen".into()))?;

        if selection.is_empty() {
            return Err(FoodLogError::Validation(
                "a meal needs at least one food".into(),
            ));
        }

        Ok(MealRecord::new(
            meal_type.to_string(),
            selection.as_slice().to_vec(),
            created_at,
        ))
    }
}
