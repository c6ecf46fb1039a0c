//! # Cart Module
//!
//! One billing session's cart: an ordered sequence of line items plus a
//! single flat discount.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                               │
//! │                                                                     │
//! │  Shell Action             Core Call               State Change      │
//! │  ────────────             ─────────               ────────────      │
//! │                                                                     │
//! │  add <item> ────────────► add_item(item) ───────► items.push(item)  │
//! │                                                                     │
//! │  remove <n> ────────────► remove_item(n-1) ─────► items.remove(i)   │
//! │                                                                     │
//! │  discount <amt> ────────► set_discount(amt) ────► discount = amt    │
//! │                                                                     │
//! │  view / invoice ────────► total(), format_invoice()  (read only)    │
//! │                                                                     │
//! │  invoice / download ────► reset() ──────────────► items.clear(),    │
//! │  (after success only)                             discount = 0      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order is significant: it is the display order and the basis
//!   of the 1-based ordinals users type to remove items
//! - The discount applies once to the whole cart, never per item
//! - `total = Σ(unit_price × quantity) − discount`, with no rounding and
//!   no floor at zero (a discount larger than the item sum goes negative)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Amount;

// =============================================================================
// LineItem
// =============================================================================

/// One product entry in the cart.
///
/// ## Design Notes
/// - A pure value type: constructed once, read-only afterwards
/// - Fields are stored verbatim; input rules live in [`crate::validation`]
///   and are applied by the shell before construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name as entered
    name: String,

    /// Price per unit
    unit_price: Amount,

    /// Units purchased
    quantity: i64,
}

impl LineItem {
    /// Creates a new line item. No validation is performed at this layer.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Amount, LineItem};
    ///
    /// let item = LineItem::new("Milk", Amount::new(2.5), 2);
    /// assert_eq!(item.line_total(), Amount::new(5.0));
    /// ```
    pub fn new(name: impl Into<String>, unit_price: Amount, quantity: i64) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Product name as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price per unit.
    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    /// Units purchased.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Amount {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The mutable aggregate of line items and discount for one billing session.
///
/// ## Lifecycle
/// Created empty at session start. [`Cart::reset`] returns it to that state
/// and is invoked exactly once per successful invoice generation or
/// download, never otherwise. There is no other state machine: the cart
/// only moves between "has N items" states.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Items in insertion order
    items: Vec<LineItem>,

    /// Flat subtractive discount for the whole cart (not a percentage)
    discount: Amount,

    /// When the cart was created or last reset
    opened_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart with no discount.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            discount: Amount::zero(),
            opened_at: Utc::now(),
        }
    }

    /// Appends an item to the end of the sequence.
    ///
    /// Always succeeds; there is no capacity limit and duplicates are
    /// kept as separate lines.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes and returns the item at a zero-based index.
    ///
    /// Later items shift down by one position; the relative order of the
    /// remaining items is unchanged. An out-of-range index is rejected
    /// with [`CoreError::IndexOutOfRange`] and the cart is left untouched.
    ///
    /// The shell translates user-entered 1-based ordinals and guards the
    /// range before calling; this check backstops library callers.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Read-only access to the item at a zero-based index.
    pub fn item(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Current count of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the current discount. Last call wins; discounts are never
    /// accumulated.
    pub fn set_discount(&mut self, amount: Amount) {
        self.discount = amount;
    }

    /// The current flat discount.
    pub fn discount(&self) -> Amount {
        self.discount
    }

    /// When the cart was created or last reset.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Calculates the cart total: `Σ(unit_price × quantity) − discount`.
    ///
    /// No rounding is applied and the result is not clamped; a discount
    /// exceeding the item sum yields a negative total.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Amount, Cart, LineItem};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item(LineItem::new("Bread", Amount::new(1.0), 1));
    /// cart.set_discount(Amount::new(1.5));
    ///
    /// assert_eq!(cart.total(), Amount::new(-0.5));
    /// ```
    pub fn total(&self) -> Amount {
        self.items.iter().map(|item| item.line_total()).sum::<Amount>() - self.discount
    }

    /// Renders the invoice text for the current cart state.
    ///
    /// A pure function of cart state: no mutation, deterministic for
    /// identical input. This exact text is both displayed on screen and
    /// handed to the invoice sink for persistence.
    ///
    /// ## Format
    /// ```text
    /// ----------- INVOICE -----------
    /// 1. Milk	$2.5	Qty: 2
    /// 2. Bread	$1.0	Qty: 3
    /// -------------------------------
    /// Total: $8.0
    /// Discount: $0.0
    /// -------------------------------
    /// ```
    /// One line per item, tab-separated, 1-based ordinals in insertion
    /// order. Numbers use [`Amount`]'s natural display text.
    pub fn format_invoice(&self) -> String {
        let mut text = String::from("----------- INVOICE -----------\n");
        for (i, item) in self.items.iter().enumerate() {
            text.push_str(&format!(
                "{}. {}\t{}\tQty: {}\n",
                i + 1,
                item.name(),
                item.unit_price(),
                item.quantity()
            ));
        }
        text.push_str("-------------------------------\n");
        text.push_str(&format!("Total: {}\n", self.total()));
        text.push_str(&format!("Discount: {}\n", self.discount));
        text.push_str("-------------------------------\n");
        text
    }

    /// Clears all items and sets the discount back to zero.
    ///
    /// Called by the shell exactly once per successful invoice generation
    /// or successful invoice download. A failed download must NOT reach
    /// this method.
    pub fn reset(&mut self) {
        self.items.clear();
        self.discount = Amount::zero();
        self.opened_at = Utc::now();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn milk_and_bread() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(LineItem::new("Milk", Amount::new(2.5), 2));
        cart.add_item(LineItem::new("Bread", Amount::new(1.0), 3));
        cart
    }

    #[test]
    fn test_add_item_appends_in_order() {
        let cart = milk_and_bread();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item(0).unwrap().name(), "Milk");
        assert_eq!(cart.item(1).unwrap().name(), "Bread");
        assert!(cart.item(2).is_none());
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("Milk", Amount::new(2.5), 2);
        assert_eq!(item.line_total(), Amount::new(5.0));

        let free = LineItem::new("Sample", Amount::new(0.0), 5);
        assert_eq!(free.line_total(), Amount::new(0.0));
    }

    #[test]
    fn test_total_without_discount() {
        // Milk 2.50 × 2 + Bread 1.00 × 3 = 8.00
        let cart = milk_and_bread();
        assert_eq!(cart.total(), Amount::new(8.0));
    }

    #[test]
    fn test_total_with_discount() {
        let mut cart = milk_and_bread();
        cart.set_discount(Amount::new(1.5));
        assert_eq!(cart.total(), Amount::new(6.5));
    }

    #[test]
    fn test_discount_overwrites_not_accumulates() {
        let mut cart = milk_and_bread();
        cart.set_discount(Amount::new(5.0));
        cart.set_discount(Amount::new(3.0));

        // Effective discount is 3, not 8
        assert_eq!(cart.discount(), Amount::new(3.0));
        assert_eq!(cart.total(), Amount::new(5.0));
    }

    #[test]
    fn test_negative_total_not_clamped() {
        let mut cart = Cart::new();
        cart.add_item(LineItem::new("Milk", Amount::new(2.5), 2));
        cart.add_item(LineItem::new("Bread", Amount::new(1.0), 1));
        cart.set_discount(Amount::new(1.5));

        cart.remove_item(0).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item(0).unwrap().name(), "Bread");
        assert_eq!(cart.total(), Amount::new(-0.5));
        assert!(cart.total().is_negative());
    }

    #[test]
    fn test_remove_item_returns_removed_and_shifts() {
        let mut cart = Cart::new();
        cart.add_item(LineItem::new("A", Amount::new(1.0), 1));
        cart.add_item(LineItem::new("B", Amount::new(2.0), 1));
        cart.add_item(LineItem::new("C", Amount::new(3.0), 1));

        let removed = cart.remove_item(1).unwrap();

        assert_eq!(removed.name(), "B");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item(0).unwrap().name(), "A");
        assert_eq!(cart.item(1).unwrap().name(), "C");
    }

    #[test]
    fn test_remove_item_out_of_range_leaves_cart_unchanged() {
        let mut cart = milk_and_bread();
        cart.set_discount(Amount::new(1.5));
        let total_before = cart.total();

        let err = cart.remove_item(2).unwrap_err();

        assert!(matches!(err, CoreError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), total_before);
    }

    #[test]
    fn test_remove_from_empty_cart_is_rejected() {
        let mut cart = Cart::new();
        assert!(cart.remove_item(0).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut cart = milk_and_bread();
        cart.set_discount(Amount::new(2.0));

        cart.reset();

        assert_eq!(cart.len(), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.discount(), Amount::zero());
        assert_eq!(cart.total(), Amount::new(0.0));
    }

    #[test]
    fn test_format_invoice_exact_text() {
        let cart = milk_and_bread();

        assert_eq!(
            cart.format_invoice(),
            "----------- INVOICE -----------\n\
             1. Milk\t$2.5\tQty: 2\n\
             2. Bread\t$1.0\tQty: 3\n\
             -------------------------------\n\
             Total: $8.0\n\
             Discount: $0.0\n\
             -------------------------------\n"
        );
    }

    #[test]
    fn test_format_invoice_with_discount_and_negative_total() {
        let mut cart = Cart::new();
        cart.add_item(LineItem::new("Bread", Amount::new(1.0), 1));
        cart.set_discount(Amount::new(1.5));

        let invoice = cart.format_invoice();
        assert!(invoice.contains("Total: $-0.5\n"));
        assert!(invoice.contains("Discount: $1.5\n"));
    }

    #[test]
    fn test_format_invoice_idempotent_and_pure() {
        let mut cart = milk_and_bread();
        cart.set_discount(Amount::new(1.5));

        let first = cart.format_invoice();
        let second = cart.format_invoice();

        assert_eq!(first, second);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.discount(), Amount::new(1.5));
    }

    #[test]
    fn test_format_invoice_empty_cart_is_still_well_formed() {
        // The shell short-circuits empty carts before asking for an
        // invoice, but the renderer itself stays total.
        let cart = Cart::new();
        assert_eq!(
            cart.format_invoice(),
            "----------- INVOICE -----------\n\
             -------------------------------\n\
             Total: $0.0\n\
             Discount: $0.0\n\
             -------------------------------\n"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cart = milk_and_bread();
        cart.set_discount(Amount::new(1.5));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(back.items(), cart.items());
        assert_eq!(back.discount(), cart.discount());
        assert_eq!(back.format_invoice(), cart.format_invoice());
    }
}

// =============================================================================
// Property Tests
// =============================================================================
