//! # tally-core: Pure Business Logic for Tally POS
//!
//! This crate is the **heart** of Tally POS. It holds one billing session's
//! cart state and everything derived from it, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Tally POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 apps/terminal (CLI shell)                     │  │
//! │  │   add / remove / view / discount / invoice / download         │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ tally-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌──────────┐  ┌──────────┐  ┌────────────┐  ┌────────────┐  │  │
//! │  │   │  money   │  │   cart   │  │ validation │  │   error    │  │  │
//! │  │   │  Amount  │  │ LineItem │  │   rules    │  │ CoreError  │  │  │
//! │  │   │          │  │   Cart   │  │            │  │            │  │  │
//! │  │   └──────────┘  └──────────┘  └────────────┘  └────────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS            │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │              Invoice sink (apps/terminal::sink)               │  │
//! │  │              invoice.txt, overwritten per download            │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Amount`: monetary values and their invoice display text
//! - [`cart`] - `LineItem` and `Cart`, including invoice rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules applied by the shell before mutation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every operation is deterministic - same cart,
//!    same text
//! 2. **No I/O**: the invoice file and every prompt belong to the shell
//! 3. **Verbatim Storage**: the cart stores what it is given; validation
//!    is the caller's responsibility and lives in [`validation`]
//! 4. **Explicit Errors**: errors are typed enums, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Amount, Cart, LineItem};
//!
//! let mut cart = Cart::new();
//! cart.add_item(LineItem::new("Milk", Amount::new(2.5), 2));
//! cart.add_item(LineItem::new("Bread", Amount::new(1.0), 3));
//!
//! assert_eq!(cart.total(), Amount::new(8.0));
//!
//! cart.set_discount(Amount::new(1.5));
//! assert_eq!(cart.total(), Amount::new(6.5));
//!
//! let invoice = cart.format_invoice();
//! assert!(invoice.contains("Total: $6.5"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Cart` instead of
// `use tally_core::cart::Cart`.

pub use cart::{Cart, LineItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Amount;
