//! Input validation for selection problems.
//!
//! Checks structural and numeric integrity of an instance before any
//! solver runs. Detects:
//! - Negative capacity
//! - Negative or non-finite item values
//! - Negative, non-finite, or fractional item weights
//! - Duplicate item names
//!
//! Solvers validate first and attempt no partial computation on invalid
//! input; in particular the DP table is never allocated for a rejected
//! instance.

use crate::models::Instance;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Instance capacity is below zero.
    NegativeCapacity,
    /// An item value is negative or not finite.
    InvalidValue,
    /// An item weight is negative, not finite, or not integer-valued.
    InvalidWeight,
    /// Two items share the same name.
    DuplicateName,
    /// Instance exceeds a solver's item-count limit (exhaustive solver only).
    InstanceTooLarge,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an instance for solving.
///
/// Checks:
/// 1. Capacity is non-negative
/// 2. All item values are finite and non-negative
/// 3. All item weights are finite, non-negative, and integer-valued
/// 4. No duplicate item names
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    if instance.capacity < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeCapacity,
            format!("Capacity must be non-negative, got {}", instance.capacity),
        ));
    }

    let mut names = HashSet::new();
    for item in &instance.items {
        if !names.insert(item.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate item name: {}", item.name),
            ));
        }

        if !item.value.is_finite() || item.value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!(
                    "Item '{}' has invalid value {} (must be finite and non-negative)",
                    item.name, item.value
                ),
            ));
        }

        if !item.weight.is_finite() || item.weight < 0.0 || item.weight.fract() != 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!(
                    "Item '{}' has invalid weight {} (must be a non-negative integer)",
                    item.name, item.weight
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Instance, Item};

    fn sample_instance() -> Instance {
        Instance::new(200).with_items(vec![
            ("Login OAuth", 10.0, 40.0),
            ("Reporting Module", 15.0, 70.0),
            ("Payment Gateway", 20.0, 90.0),
        ])
    }

    #[test]
    fn test_valid_instance() {
        assert!(validate_instance(&sample_instance()).is_ok());
    }

    #[test]
    fn test_negative_capacity() {
        let instance = Instance::new(-1).with_item(Item::new("A", 1.0, 1.0));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeCapacity));
    }

    #[test]
    fn test_negative_value() {
        let instance = Instance::new(10).with_item(Item::new("A", -5.0, 1.0));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidValue));
    }

    #[test]
    fn test_non_finite_value() {
        let instance = Instance::new(10).with_item(Item::new("A", f64::NAN, 1.0));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidValue));
    }

    #[test]
    fn test_fractional_weight() {
        let instance = Instance::new(10).with_item(Item::new("A", 1.0, 2.5));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidWeight));
    }

    #[test]
    fn test_negative_weight() {
        let instance = Instance::new(10).with_item(Item::new("A", 1.0, -3.0));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidWeight));
    }

    #[test]
    fn test_duplicate_name() {
        let instance = Instance::new(10)
            .with_item(Item::new("A", 1.0, 1.0))
            .with_item(Item::new("A", 2.0, 2.0));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_multiple_errors() {
        // Negative capacity + fractional weight + negative value
        let instance = Instance::new(-5)
            .with_item(Item::new("A", -1.0, 1.5))
            .with_item(Item::new("B", 2.0, 2.0));
        let errors = validate_instance(&instance).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_zero_weight_and_zero_capacity_are_valid() {
        let instance = Instance::new(0).with_item(Item::new("free", 3.0, 0.0));
        assert!(validate_instance(&instance).is_ok());
    }
}
