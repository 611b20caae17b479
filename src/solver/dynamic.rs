//! Dynamic-programming 0-1 knapsack solver.
//!
//! # Algorithm
//!
//! 1. Validate the instance (no table is allocated on invalid input).
//! 2. Fill `best[i][w]` = optimal value using only the first `i` items
//!    within budget `w`: `best[0][w] = 0`; for item `i` with weight `p`
//!    and value `v`, `best[i][w] = best[i-1][w]` when `p > w`, otherwise
//!    `max(best[i-1][w], best[i-1][w-p] + v)`.
//! 3. Reconstruct the chosen set by walking `i = n..1` at a running
//!    budget: item `i` was taken iff `best[i][w] != best[i-1][w]`.
//!
//! # Complexity
//! O(n × capacity) time and space. Pseudo-polynomial: the cost scales
//! with the numeric capacity, so the method expects bounded integer
//! capacities.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15 (0-1 knapsack
//! exercise); Kellerer et al. (2004), Ch. 2.3 (Bellman recursion)

use crate::models::{Instance, Selection};
use crate::solver::SolveResult;
use crate::validation::validate_instance;

/// Exact 0-1 selection solver via dynamic programming.
///
/// # Tie-breaking
/// When several subsets achieve the optimal value, the reconstruction
/// walk excludes the higher-indexed item on each tie (the `best[i-1][w]`
/// branch is preferred whenever it matches). The reported subset is
/// therefore deterministic across runs for a given item order.
///
/// # Example
///
/// ```
/// use u_knapsack::models::Instance;
/// use u_knapsack::solver::DpSolver;
///
/// let instance = Instance::new(50).with_items(vec![
///     ("X", 60.0, 10.0),
///     ("Y", 100.0, 20.0),
///     ("Z", 120.0, 30.0),
/// ]);
///
/// let selection = DpSolver::new().solve(&instance).unwrap();
/// assert_eq!(selection.total_value, 220.0);
/// assert_eq!(selection.chosen, vec!["Y", "Z"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DpSolver;

impl DpSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solves the instance to optimality.
    ///
    /// Returns the validation errors if the instance is invalid. An empty
    /// item list or a zero capacity yields the empty selection, which is
    /// a valid degenerate solution, not an error.
    pub fn solve(&self, instance: &Instance) -> SolveResult {
        validate_instance(instance)?;

        let n = instance.item_count();
        let capacity = instance.capacity as usize;
        // Validation guarantees weights are non-negative integer-valued.
        let weights: Vec<usize> = instance.items.iter().map(|i| i.weight as usize).collect();

        let mut best = vec![vec![0.0f64; capacity + 1]; n + 1];
        for i in 1..=n {
            let weight = weights[i - 1];
            let value = instance.items[i - 1].value;
            for w in 0..=capacity {
                let skip = best[i - 1][w];
                best[i][w] = if weight <= w {
                    skip.max(best[i - 1][w - weight] + value)
                } else {
                    skip
                };
            }
        }

        // Walk the table backwards: a cell that differs from the row above
        // can only have come from taking item i.
        let mut taken = Vec::new();
        let mut w = capacity;
        for i in (1..=n).rev() {
            if best[i][w] != best[i - 1][w] {
                taken.push(i - 1);
                w -= weights[i - 1];
            }
        }
        taken.reverse();

        let total_weight: i64 = taken.iter().map(|&i| weights[i] as i64).sum();
        let chosen = taken
            .into_iter()
            .map(|i| instance.items[i].name.clone())
            .collect();

        Ok(Selection::new(best[n][capacity], chosen, total_weight))
    }
}
