//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  tally-core errors (this file)                                      │
//! │  ├── CoreError        - Cart operation failures                     │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  apps/terminal errors (separate crate)                              │
//! │  ├── ShellError       - What the user sees at the prompt            │
//! │  └── SinkError        - Invoice file write failures                 │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → ShellError → user message      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, cart size, field name)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable at the shell boundary

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart operation errors.
///
/// These represent operations the cart itself rejects. A rejected
/// operation leaves the cart untouched.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Removal index outside the current item sequence.
    ///
    /// ## When This Occurs
    /// - The shell's 1-based ordinal guard was bypassed (library callers)
    /// - The cart shrank between rendering and removal
    #[error("item index {index} is out of range for a cart of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The cart stores whatever it is given; these rules are applied by the
/// shell *before* a mutation is attempted, so a failure means no partial
/// state change happened.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "item index 3 is out of range for a cart of 2 items"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative { field: "price" };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required { field: "name" };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
