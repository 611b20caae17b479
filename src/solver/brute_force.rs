//! Exhaustive 0-1 knapsack solver.
//!
//! Enumerates every subset of the items and keeps the best feasible one.
//! Exponential: useful only to cross-check the DP solver on small
//! instances, never as the default path.
//!
//! # Reference
//! Kellerer et al. (2004), "Knapsack Problems", Ch. 2.1

use crate::models::{Instance, Selection};
use crate::solver::SolveResult;
use crate::validation::{validate_instance, ValidationError, ValidationErrorKind};

/// Exact 0-1 selection solver via subset enumeration.
///
/// Visits subsets in ascending bitmask order over item positions and
/// replaces the incumbent only on strict value improvement, so the first
/// subset reaching the optimal value wins. This tie-break differs from
/// [`DpSolver`](super::DpSolver)'s; the two always agree on the optimal
/// value but may report different optimal subsets when several tie.
#[derive(Debug, Clone, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    /// Largest instance this solver accepts (2^20 subsets).
    pub const MAX_ITEMS: usize = 20;

    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solves the instance to optimality by enumerating all subsets.
    ///
    /// Returns the validation errors if the instance is invalid, or a
    /// single `InstanceTooLarge` error when the item count exceeds
    /// [`Self::MAX_ITEMS`].
    pub fn solve(&self, instance: &Instance) -> SolveResult {
        validate_instance(instance)?;

        let n = instance.item_count();
        if n > Self::MAX_ITEMS {
            return Err(vec![ValidationError::new(
                ValidationErrorKind::InstanceTooLarge,
                format!(
                    "Exhaustive enumeration limited to {} items, got {n}",
                    Self::MAX_ITEMS
                ),
            )]);
        }

        let capacity = instance.capacity as f64;
        let mut best_value = 0.0f64;
        let mut best_mask = 0u32;

        for mask in 0u32..(1u32 << n) {
            let mut weight = 0.0;
            let mut value = 0.0;
            for (i, item) in instance.items.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    weight += item.weight;
                    value += item.value;
                }
            }
            if weight <= capacity && value > best_value {
                best_value = value;
                best_mask = mask;
            }
        }

        let mut chosen = Vec::new();
        let mut total_weight = 0i64;
        for (i, item) in instance.items.iter().enumerate() {
            if best_mask & (1 << i) != 0 {
                chosen.push(item.name.clone());
                total_weight += item.weight as i64;
            }
        }

        Ok(Selection::new(best_value, chosen, total_weight))
    }
}
