//! Selection domain models.
//!
//! Provides the core data types for representing 0-1 selection problems
//! and solutions. Domain-agnostic within selection — applicable to
//! feature prioritization, budget allocation, and cargo loading alike.
//!
//! # Domain Mappings
//!
//! | u-knapsack | Sprint Planning | Budgeting | Logistics |
//! |------------|-----------------|-----------|-----------|
//! | Item | Feature/Requirement | Project | Parcel |
//! | Item value | Business Value | Expected Return | Freight Revenue |
//! | Item weight | Effort (hours) | Cost | Mass |
//! | Capacity | Sprint Hours | Budget | Truck Payload |
//! | Selection | Sprint Backlog | Portfolio | Load Plan |

mod instance;
mod item;
mod selection;

pub use instance::Instance;
pub use item::Item;
pub use selection::Selection;
