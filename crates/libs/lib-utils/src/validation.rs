//! # Validation Utilities
//!
//! Range and presence checks used when validating configuration.

use rust_decimal::Decimal;

/// Validate that a list has at least one element.
pub fn validate_not_empty<T>(values: &[T], field_name: &str) -> Result<(), String> {
    if values.is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate that `value` lies within `[min, max]` inclusive.
pub fn validate_within(value: Decimal, min: Decimal, max: Decimal, field_name: &str) -> Result<(), String> {
    if value < min || value > max {
        Err(format!("{} must be between {} and {}, got {}", field_name, min, max, value))
    } else {
        Ok(())
    }
}

/// Validate that every value is distinct.
pub fn validate_unique(values: &[Decimal], field_name: &str) -> Result<(), String> {
    for (i, value) in values.iter().enumerate() {
        if values[..i].contains(value) {
            return Err(format!("{} contains duplicate value {}", field_name, value));
        }
    }
    Ok(())
}
