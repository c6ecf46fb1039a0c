//! # Shell Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Error Flow in Tally POS                           │
//! │                                                                     │
//! │  User Input                  Shell                                  │
//! │  ──────────                  ─────                                  │
//! │                                                                     │
//! │  "remove abc"                                                       │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  Command Handler                                              │  │
//! │  │  Result<String, ShellError>                                   │  │
//! │  │         │                                                     │  │
//! │  │         ▼                                                     │  │
//! │  │  Parse failed? ──── InvalidNumber ───────────────┐            │  │
//! │  │         │                                        │            │  │
//! │  │         ▼                                        ▼            │  │
//! │  │  Guard failed? ──── InvalidItemNumber ────── ShellError ─────►│  │
//! │  │         │           EmptyCart                                 │  │
//! │  │         ▼                                                     │  │
//! │  │  Sink failed? ───── Sink(SinkError)                           │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  Every variant renders a complete user-facing message via Display;  │
//! │  the REPL prints it and keeps running. Nothing here is fatal, and   │
//! │  a rejected command never leaves the cart half-mutated.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::sink::SinkError;
use tally_core::{CoreError, ValidationError};

/// The cart-reading action that was attempted on an empty cart.
///
/// Each action has its own notice text, matching what the display surface
/// shows the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyCartAction {
    View,
    Generate,
    Download,
}

impl EmptyCartAction {
    fn notice(&self) -> &'static str {
        match self {
            EmptyCartAction::View => "",
            EmptyCartAction::Generate => " Cannot generate invoice.",
            EmptyCartAction::Download => " Cannot download invoice.",
        }
    }
}

/// Error returned from terminal command handlers.
///
/// `Display` is the exact text shown at the prompt.
#[derive(Debug, Error)]
pub enum ShellError {
    /// User-supplied numeric text did not parse. Raised before any core
    /// call, so the cart is untouched (no partial add).
    #[error("Invalid {field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    /// Removal ordinal outside `[1, size]`. Raised by the 1-based guard
    /// before the cart is asked to remove anything.
    #[error("Invalid item number.")]
    InvalidItemNumber,

    /// "view", "invoice", or "download" on an empty cart. No total is
    /// computed and no reset happens.
    #[error("Cart is empty.{}", .action.notice())]
    EmptyCart { action: EmptyCartAction },

    /// The invoice sink could not persist the text. The cart is NOT
    /// reset; the user may retry the download.
    #[error("Failed to save invoice to file: {0}")]
    Sink(#[from] SinkError),

    /// Input field rules (name/price/quantity) rejected the command.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Cart-level rejection; backstops the shell guards.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Unrecognized command keyword.
    #[error("Unknown command '{0}'. Type 'help' for available commands.")]
    UnknownCommand(String),

    /// Recognized command with the wrong shape.
    #[error("Usage: {0}")]
    Usage(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_messages_match_action() {
        let view = ShellError::EmptyCart {
            action: EmptyCartAction::View,
        };
        assert_eq!(view.to_string(), "Cart is empty.");

        let generate = ShellError::EmptyCart {
            action: EmptyCartAction::Generate,
        };
        assert_eq!(generate.to_string(), "Cart is empty. Cannot generate invoice.");

        let download = ShellError::EmptyCart {
            action: EmptyCartAction::Download,
        };
        assert_eq!(download.to_string(), "Cart is empty. Cannot download invoice.");
    }

    #[test]
    fn test_invalid_number_message() {
        let err = ShellError::InvalidNumber {
            field: "price",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid price: 'abc' is not a number");
    }

    #[test]
    fn test_invalid_item_number_message() {
        assert_eq!(ShellError::InvalidItemNumber.to_string(), "Invalid item number.");
    }
}
