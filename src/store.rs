//! In-memory list of committed meals for the session.

use tracing::info;

use crate::models::{MealId, MealRecord};

/// Ordered, in-memory meal list. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct MealStore {
    meals: Vec<MealRecord>,
}

impl MealStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a meal and return its id.
    pub fn add(&mut self, meal: MealRecord) -> MealId {
        let id = meal.id();
        info!(%id, meal_type = meal.meal_type(), foods = meal.foods().len(), "meal added");
        self.meals.push(meal);
        id
    }

    /// Remove every meal matching `predicate`. Returns how many were removed.
    pub fn remove<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&MealRecord) -> bool,
    {
        let before = self.meals.len();
        self.meals.retain(|m| !predicate(m));
        let removed = before - self.meals.len();
        if removed > 0 {
            info!(removed, "meals removed");
        }
        removed
    }

    /// Remove the meal with `id`.
    pub fn remove_by_id(&mut self, id: MealId) -> Option<MealRecord> {
        let idx = self.meals.iter().position(|m| m.id() == id)?;
        self.remove_at(idx)
    }

    /// Remove the meal at `index`, if in range.
    pub fn remove_at(&mut self, index: usize) -> Option<MealRecord> {
        if index >= self.meals.len() {
            return None;
        }
        let meal = self.meals.remove(index);
        info!(id = %meal.id(), "meal removed");
        Some(meal)
    }

    pub fn get(&self, id: MealId) -> Option<&MealRecord> {
        self.meals.iter().find(|m| m.id() == id)
    }

    /// Meals in insertion order.
    pub fn list(&self) -> &[MealRecord] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
