//! Problem instance model.
//!
//! An instance is an ordered sequence of items plus a scalar capacity.
//! It is constructed once and never mutated afterward; solvers borrow it
//! and derive a [`Selection`](super::Selection).
//!
//! # Reference
//! Kellerer et al. (2004), "Knapsack Problems", Ch. 1.2

use serde::{Deserialize, Serialize};

use super::Item;

/// A 0-1 selection problem instance.
///
/// Item order is significant: solvers report chosen items in input order,
/// and tie-breaking between equal-value solutions is resolved by position.
///
/// # Example
///
/// ```
/// use u_knapsack::models::{Instance, Item};
///
/// let instance = Instance::new(200)
///     .with_item(Item::new("Login OAuth", 10.0, 40.0))
///     .with_item(Item::new("Notifications", 7.0, 20.0));
///
/// assert_eq!(instance.item_count(), 2);
/// assert_eq!(instance.total_weight(), 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Candidate items, in input order.
    pub items: Vec<Item>,
    /// Capacity budget. Negative values are representable but rejected
    /// by validation.
    pub capacity: i64,
}

impl Instance {
    /// Creates an empty instance with the given capacity.
    pub fn new(capacity: i64) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Adds an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Adds items from an iterator of `(name, value, weight)` triples.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = (S, f64, f64)>,
        S: Into<String>,
    {
        self.items
            .extend(items.into_iter().map(|(n, v, w)| Item::new(n, v, w)));
        self
    }

    /// Number of candidate items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance has no candidate items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item weights (selected or not).
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|i| i.weight).sum()
    }

    /// Sum of all item values (selected or not).
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|i| i.value).sum()
    }

    /// Finds an item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }
}
