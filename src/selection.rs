//! The pending selection of a meal being built.

use crate::models::FoodRecord;

/// Ordered set of foods keyed by `code`.
///
/// Insertion order is selection order. No two elements share a code. Sets
/// hold a handful of items, so lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    foods: Vec<FoodRecord>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the presence of `food`: add it if its code is absent, otherwise
    /// remove the element with that code. Returns `true` if the food is now
    /// selected.
    pub fn toggle(&mut self, food: FoodRecord) -> bool {
        if self.remove(&food.code).is_some() {
            false
        } else {
            self.foods.push(food);
            true
        }
    }

    /// Add `food` unless its code is already present. Returns `true` if it
    /// was inserted.
    pub fn add(&mut self, food: FoodRecord) -> bool {
        if self.contains(&food.code) {
            return false;
        }
        self.foods.push(food);
        true
    }

    /// Remove the element with `code`, if any.
    pub fn remove(&mut self, code: &str) -> Option<FoodRecord> {
        let idx = self.foods.iter().position(|f| f.code == code)?;
        Some(self.foods.remove(idx))
    }

    pub fn clear(&mut self) {
        self.foods.clear();
    }

    pub fn contains(&self, code: &str) -> bool {
        self.foods.iter().any(|f| f.code == code)
    }

    pub fn get(&self, code: &str) -> Option<&FoodRecord> {
        self.foods.iter().find(|f| f.code == code)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodRecord> {
        self.foods.iter()
    }

    pub fn as_slice(&self) -> &[FoodRecord] {
        &self.foods
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a FoodRecord;
    type IntoIter = std::slice::Iter<'a, FoodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.foods.iter()
    }
}

impl FromIterator<FoodRecord> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = FoodRecord>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for food in iter {
            set.add(food);
        }
        set
    }
}
