//! Item model.
//!
//! An item is a candidate for selection: it carries a value (the benefit
//! of including it) and a weight (the capacity it consumes). Items are
//! immutable once constructed.
//!
//! # Reference
//! Kellerer et al. (2004), "Knapsack Problems", Ch. 1.1

use serde::{Deserialize, Serialize};

/// A candidate item for 0-1 selection.
///
/// Identity is by name; names are assumed unique within one instance
/// (enforced by [`crate::validation::validate_instance`]).
///
/// # Numeric Representation
/// `value` is any non-negative finite number. `weight` must be a
/// non-negative finite integer value — the DP solver indexes a table by
/// weight. Both constraints are checked by validation, not by the type
/// system, so that invalid inputs are reported rather than unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier.
    pub name: String,
    /// Benefit of selecting this item.
    pub value: f64,
    /// Capacity consumed by this item (integer-valued).
    pub weight: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, value: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }

    /// Value per unit of weight.
    ///
    /// Returns `None` for zero-weight items (infinite density: such items
    /// are always worth selecting when their value is positive).
    pub fn density(&self) -> Option<f64> {
        if self.weight == 0.0 {
            None
        } else {
            Some(self.value / self.weight)
        }
    }

    /// Whether this item alone fits within the given capacity.
    pub fn fits(&self, capacity: i64) -> bool {
        self.weight <= capacity as f64
    }
}
