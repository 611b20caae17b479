//! 0-1 selection (knapsack) framework for the U-Engine ecosystem.
//!
//! Provides domain models, validation, and exact solvers for 0-1 selection
//! problems: choose the subset of items with maximum total value whose
//! total weight does not exceed a capacity.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Item`, `Instance`, `Selection`
//! - **`validation`**: Input integrity checks (duplicate names, negative
//!   capacity, fractional weights)
//! - **`solver`**: `DpSolver` (exact, pseudo-polynomial DP),
//!   `BruteForceSolver` (exhaustive verification), `SelectionKpi`
//! - **`generator`**: Seeded random instance construction
//!
//! # Architecture
//!
//! This crate sits at Layer 3 (Frameworks) in the U-Engine ecosystem.
//! It contains only 0-1 selection domain logic — no scheduling, nesting,
//! or routing concepts. The DP solver is exact; its running time is
//! polynomial in the numeric capacity rather than its bit length, so it
//! is intended for bounded integer capacities.
//!
//! # References
//!
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer
//!   Implementations"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

pub mod generator;
pub mod models;
pub mod solver;
pub mod validation;
