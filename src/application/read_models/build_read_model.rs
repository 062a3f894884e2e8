//! Build read model for query operations
//!
//! Aggregates everything a presentation layer needs after a mutation:
//! the selection, issues, totals, progress and session state.

use crate::build_configuration::domain::{BuildSnapshot, BuildState, CompatibilityIssue, Slot};
use rust_decimal::Decimal;
use serde::Serialize;

/// Main read model for a build session
///
/// Rebuilt from scratch after every mutation; nothing is cached beyond
/// the last computed instance.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReadModel {
    /// Immutable selection the model was computed from
    #[serde(skip)]
    pub snapshot: BuildSnapshot,
    /// One entry per slot, in slot order
    pub slots: Vec<SlotView>,
    /// Compatibility issues in rule order
    pub issues: Vec<CompatibilityIssue>,
    /// Exact sum of the selected prices
    pub total_price: Decimal,
    /// Occupied slots divided by slot count
    pub completion_fraction: f64,
    /// `completion_fraction` as a rounded percentage, for display
    pub completion_percent: u8,
    pub state: BuildState,
    /// Whether the build may be committed to the cart
    pub can_commit: bool,
}

impl BuildReadModel {
    /// Issue messages in rule order
    pub fn issue_messages(&self) -> Vec<&str> {
        self.issues.iter().map(CompatibilityIssue::message).collect()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn slot(&self, slot: Slot) -> Option<&SlotView> {
        self.slots.iter().find(|view| view.slot == slot)
    }

    pub fn selected_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|view| view.component.is_some())
            .count()
    }
}

/// View representation of one build slot
#[derive(Debug, Clone, Serialize)]
pub struct SlotView {
    pub slot: Slot,
    /// Human readable slot label
    pub label: String,
    pub component: Option<ComponentView>,
}

/// Flattened view of a selected catalog component
#[derive(Debug, Clone, Serialize)]
pub struct ComponentView {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub price: Decimal,
    pub stock: u32,
}
