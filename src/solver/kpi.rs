//! Selection quality metrics (KPIs).
//!
//! Computes standard indicators from a solved selection and the instance
//! it came from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slack | capacity - total chosen weight |
//! | Utilization | total chosen weight / capacity |
//! | Value Density | total chosen value / total chosen weight |
//! | Coverage | chosen items / candidate items |

use crate::models::{Instance, Selection};

/// Selection performance indicators.
#[derive(Debug, Clone)]
pub struct SelectionKpi {
    /// Total value of the chosen items.
    pub total_value: f64,
    /// Total weight of the chosen items.
    pub total_weight: i64,
    /// Instance capacity.
    pub capacity: i64,
    /// Unused capacity.
    pub slack: i64,
    /// Fraction of capacity consumed (0.0..1.0). Zero when capacity is zero.
    pub utilization: f64,
    /// Value per unit of chosen weight. Zero when nothing with weight was chosen.
    pub value_density: f64,
    /// Number of chosen items.
    pub chosen_count: usize,
    /// Number of candidate items.
    pub item_count: usize,
}

impl SelectionKpi {
    /// Computes KPIs from a selection and its source instance.
    pub fn calculate(instance: &Instance, selection: &Selection) -> Self {
        let utilization = if instance.capacity > 0 {
            selection.total_weight as f64 / instance.capacity as f64
        } else {
            0.0
        };
        let value_density = if selection.total_weight > 0 {
            selection.total_value / selection.total_weight as f64
        } else {
            0.0
        };

        Self {
            total_value: selection.total_value,
            total_weight: selection.total_weight,
            capacity: instance.capacity,
            slack: selection.slack(instance.capacity),
            utilization,
            value_density,
            chosen_count: selection.chosen_count(),
            item_count: instance.item_count(),
        }
    }
}
