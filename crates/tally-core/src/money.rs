//! # Money Module
//!
//! Provides the `Amount` type for monetary values.
//!
//! ## Why a Float-Backed Amount?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FORMATTING CONTRACT                                            │
//! │                                                                     │
//! │  Invoices render numbers with the "natural" double-to-text          │
//! │  conversion, not fixed two-decimal currency text:                   │
//! │                                                                     │
//! │    8      → "8.0"     (never "8.00")                                │
//! │    2.5    → "2.5"                                                   │
//! │    -0.5   → "-0.5"    (totals may go negative; no clamping)         │
//! │                                                                     │
//! │  Persisted invoices are compared byte-for-byte against what was     │
//! │  shown on screen, so Amount owns this conversion in ONE place and   │
//! │  every surface (view, invoice, file) goes through it.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Amount;
//!
//! let price = Amount::new(2.5);
//! let line = price * 2;                    // $5.0
//! let total = line + Amount::new(3.0);     // $8.0
//!
//! assert_eq!(total.to_string(), "$8.0");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value for one billing session.
///
/// ## Design Decisions
/// - **f64 (signed)**: totals are allowed to go negative when the discount
///   exceeds the item sum; nothing is clamped or rounded internally
/// - **Single field tuple struct**: zero-cost abstraction over f64
/// - **Display owns the text**: `"$"` + shortest float text with a forced
///   `.0` on integral values, so `$8.0` and `$-0.5` come out exactly as
///   the invoice format requires
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(f64);

impl Amount {
    /// Creates an Amount from a raw numeric value.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Amount;
    ///
    /// let price = Amount::new(10.99);
    /// assert_eq!(price.value(), 10.99);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Amount(value)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns zero.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Amount;
    ///
    /// assert!(Amount::zero().is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation renders the invoice text for this value.
///
/// The numeric part uses Rust's shortest round-trip float formatting with
/// a forced `.0` on integral values (`{:?}`), which matches the billing
/// text this system emits: `$8.0`, `$2.5`, `$-0.5`. The sign sits between
/// the `$` and the digits because the invoice concatenates `"$"` with the
/// number text.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:?}", self.0)
    }
}

/// Addition of two Amount values.
impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Amount values.
impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Amount {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Amount(self.0 * qty as f64)
    }
}

/// Summation of line totals.
impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
