//! Exact solvers and selection quality metrics.
//!
//! Provides two exact solvers and a KPI evaluator:
//!
//! - [`DpSolver`] — dynamic programming over a value table, O(n × capacity).
//!   The default solver.
//! - [`BruteForceSolver`] — exhaustive subset enumeration, O(2^n).
//!   Verification only; refuses instances above [`BruteForceSolver::MAX_ITEMS`].
//! - [`SelectionKpi`] — post-solve metrics (slack, utilization, density).
//!
//! Both solvers validate their input first and return the collected
//! validation errors without partial computation. On valid input they
//! agree on the optimal value; they may differ on which optimal subset
//! they report when several subsets tie, since each applies its own
//! deterministic tie-break.
//!
//! # References
//!
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", Ch. 2
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

mod brute_force;
mod dynamic;
mod kpi;

pub use brute_force::BruteForceSolver;
pub use dynamic::DpSolver;
pub use kpi::SelectionKpi;

use crate::models::Selection;
use crate::validation::ValidationError;

/// Result of a solve call: an optimal selection, or the input problems
/// that prevented solving.
pub type SolveResult = Result<Selection, Vec<ValidationError>>;
