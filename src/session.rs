//! Explicit session state for building a meal and scanning products into it.
//!
//! A [`MealDraft`] owns the meal type and the pending [`SelectionSet`];
//! committing writes into a [`MealStore`] the caller passes in. A
//! [`ScanGate`] keeps a scanner from firing a second lookup while one is
//! being handled.

use tracing::{debug, info};

use crate::aggregator::MealAggregator;
use crate::error::Result;
use crate::models::{FoodRecord, MealId, MealType};
use crate::queries::barcode::{BarcodeLookup, LookupOutcome};
use crate::selection::SelectionSet;
use crate::store::MealStore;

// ---------------------------------------------------------------------------
// MealDraft
// ---------------------------------------------------------------------------

/// A meal being built: chosen type plus selected foods.
#[derive(Debug, Clone, Default)]
pub struct MealDraft {
    meal_type: Option<String>,
    selection: SelectionSet,
}

impl MealDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_meal_type(&mut self, meal_type: impl Into<String>) {
        self.meal_type = Some(meal_type.into());
    }

    pub fn choose(&mut self, meal_type: MealType) {
        self.set_meal_type(meal_type);
    }

    pub fn meal_type(&self) -> Option<&str> {
        self.meal_type.as_deref()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    /// Tap on a search result.
    pub fn toggle(&mut self, food: FoodRecord) -> bool {
        self.selection.toggle(food)
    }

    /// Add without flipping, as the scan flow does.
    pub fn add(&mut self, food: FoodRecord) -> bool {
        self.selection.add(food)
    }

    pub fn remove(&mut self, code: &str) -> Option<FoodRecord> {
        self.selection.remove(code)
    }

    /// Commit the draft into `store` and reset it.
    ///
    /// On a validation error nothing changes: the draft keeps its state and
    /// the store is untouched.
    pub fn commit(&mut self, store: &mut MealStore) -> Result<MealId> {
        let meal = MealAggregator::commit(self.meal_type.as_deref(), &self.selection)?;
        let id = store.add(meal);
        self.abandon();
        Ok(id)
    }

    /// Drop the meal type and selection.
    pub fn abandon(&mut self) {
        self.meal_type = None;
        self.selection.clear();
    }
}

// ---------------------------------------------------------------------------
// ScanGate
// ---------------------------------------------------------------------------

/// One-shot latch in front of a barcode scanner.
///
/// Scanners report the same code many times per second. The gate lets the
/// first code through and ignores the rest until it is re-armed.
#[derive(Debug, Clone)]
pub struct ScanGate {
    armed: bool,
}

impl Default for ScanGate {
    fn default() -> Self {
        Self { armed: true }
    }
}

impl ScanGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Claim the gate for a decoded code. Returns `false` if a previous code
    /// is still being handled.
    pub fn try_begin(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }

    pub fn rearm(&mut self) {
        self.armed = true;
    }
}

// ---------------------------------------------------------------------------
// scan_into
// ---------------------------------------------------------------------------

/// What happened to a decoded barcode.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The product was found and added to the draft.
    Added(FoodRecord),
    /// The product was found but its code was already selected.
    AlreadySelected(FoodRecord),
    /// No product for this code. The gate is armed again.
    NotFound,
    /// The gate was closed; the code was dropped without a lookup.
    Ignored,
}

/// Resolve a decoded barcode and add the product to `draft`.
///
/// A miss re-arms `gate` so the user can scan again. A hit leaves the gate
/// closed until the caller calls [`ScanGate::rearm`], typically when the
/// scanner is shown again.
pub fn scan_into(
    lookup: &BarcodeLookup<'_>,
    gate: &mut ScanGate,
    draft: &mut MealDraft,
    code: &str,
) -> ScanOutcome {
    if !gate.try_begin() {
        debug!(code, "scan ignored, gate closed");
        return ScanOutcome::Ignored;
    }

    match lookup.lookup(code) {
        LookupOutcome::Found(food) => {
            if draft.add(food.clone()) {
                info!(code = %food.code, "scanned food added");
                ScanOutcome::Added(food)
            } else {
                ScanOutcome::AlreadySelected(food)
            }
        }
        LookupOutcome::NotFound => {
            gate.rearm();
            ScanOutcome::NotFound
        }
    }
}
