//! Selection (solution) model.
//!
//! A selection is a solution to a 0-1 selection problem: the chosen item
//! names, their total value, and their total weight. Solvers guarantee
//! `total_weight <= capacity` for the instance they were given.
//!
//! # Reference
//! Kellerer et al. (2004), "Knapsack Problems", Ch. 1.2

use serde::{Deserialize, Serialize};

/// A solution to a 0-1 selection problem.
///
/// `chosen` lists selected item names in instance input order, without
/// duplicates. Two selections with the same chosen set always have the
/// same totals, so equality on this type is set equality in practice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Sum of chosen item values.
    pub total_value: f64,
    /// Chosen item names, in instance input order.
    pub chosen: Vec<String>,
    /// Sum of chosen item weights.
    pub total_weight: i64,
}

impl Selection {
    /// Creates an empty selection (value 0, nothing chosen).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a selection from its parts.
    pub fn new(total_value: f64, chosen: Vec<String>, total_weight: i64) -> Self {
        Self {
            total_value,
            chosen,
            total_weight,
        }
    }

    /// Whether the named item was chosen.
    pub fn contains(&self, name: &str) -> bool {
        self.chosen.iter().any(|c| c == name)
    }

    /// Number of chosen items.
    pub fn chosen_count(&self) -> usize {
        self.chosen.len()
    }

    /// Whether nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Unused capacity under the given budget.
    pub fn slack(&self, capacity: i64) -> i64 {
        capacity - self.total_weight
    }

    /// Whether this selection fits within the given capacity.
    pub fn is_within(&self, capacity: i64) -> bool {
        self.total_weight <= capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_selection() -> Selection {
        Selection::new(
            49.0,
            vec![
                "Login OAuth".into(),
                "Payment Gateway".into(),
                "Notifications".into(),
                "Analytics".into(),
            ],
            200,
        )
    }

    #[test]
    fn test_selection_contains() {
        let s = sample_selection();
        assert!(s.contains("Payment Gateway"));
        assert!(!s.contains("Reporting Module"));
        assert_eq!(s.chosen_count(), 4);
    }

    #[test]
    fn test_selection_slack() {
        let s = sample_selection();
        assert_eq!(s.slack(200), 0);
        assert_eq!(s.slack(250), 50);
        assert!(s.is_within(200));
        assert!(!s.is_within(199));
    }

    #[test]
    fn test_selection_empty() {
        let s = Selection::empty();
        assert!(s.is_empty());
        assert_eq!(s.total_value, 0.0);
        assert_eq!(s.total_weight, 0);
        assert_eq!(s.slack(10), 10);
    }

    #[test]
    fn test_selection_serde_roundtrip() {
        let s = sample_selection();
        let json = serde_json::to_string(&s).unwrap();
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
