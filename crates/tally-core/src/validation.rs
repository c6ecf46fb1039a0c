//! # Validation Module
//!
//! Input rules for cart mutations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Validation Layers                             │
//! │                                                                     │
//! │  Layer 1: Shell parsing (apps/terminal)                             │
//! │  ├── Numeric text → f64 / i64 (a parse failure rejects the          │
//! │  │   whole command; the cart is never touched)                      │
//! │  └── 1-based ordinal guard for removals                             │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - field rules, applied by the shell           │
//! │  ├── name non-empty                                                 │
//! │  ├── unit price ≥ 0                                                 │
//! │  └── quantity ≥ 0                                                   │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Cart - stores verbatim, no validation of its own          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The discount deliberately has no range rule: any parseable number is
//! accepted, and a discount larger than the item sum produces a negative
//! total.

use crate::error::ValidationError;
use crate::money::Amount;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Milk").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for free items)
/// - NaN fails the comparison and is rejected with the same error
pub fn validate_unit_price(price: Amount) -> ValidationResult<()> {
    if !(price.value() >= 0.0) {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - Must be non-negative (zero is allowed; the line then contributes
///   nothing to the total)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative { field: "quantity" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Milk").is_ok());
        assert!(validate_item_name("Coca-Cola 330ml").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Amount::new(2.5)).is_ok());
        assert!(validate_unit_price(Amount::new(0.0)).is_ok());

        assert!(validate_unit_price(Amount::new(-1.0)).is_err());
        assert!(validate_unit_price(Amount::new(f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(2).is_ok());

        assert!(validate_quantity(-1).is_err());
    }
}
