//! # Cart Commands
//!
//! Handlers for the cart-mutating and cart-viewing actions.
//!
//! Each handler follows the same shape: parse inputs, apply field rules,
//! call the core, render the result. A failure at any step returns before
//! the cart is touched.

use tracing::debug;

use crate::commands::parse_number;
use crate::error::{EmptyCartAction, ShellError};
use crate::render;
use crate::session::Session;
use tally_core::{validation, Amount, LineItem};

/// Adds an item to the cart.
///
/// ## Behavior
/// - Price and quantity must parse; a parse failure prevents the add
///   entirely (no partial state change)
/// - Field rules: non-empty name, price ≥ 0, quantity ≥ 0
/// - Duplicates are kept as separate lines, in entry order
pub fn add<S>(
    session: &mut Session<S>,
    name: &str,
    price: &str,
    quantity: &str,
) -> Result<String, ShellError> {
    let price: f64 = parse_number("price", price)?;
    let quantity: i64 = parse_number("quantity", quantity)?;
    let unit_price = Amount::new(price);

    validation::validate_item_name(name)?;
    validation::validate_unit_price(unit_price)?;
    validation::validate_quantity(quantity)?;

    session.cart.add_item(LineItem::new(name, unit_price, quantity));
    debug!(name = %name, price = %unit_price, quantity, "item added");

    Ok("Item added to cart!".to_string())
}

/// Removes an item by its 1-based ordinal as shown by `view`.
///
/// ## Behavior
/// Ordinals outside `[1, size]` are rejected here, before the cart is
/// asked to remove anything; the user sees "Invalid item number." and
/// the cart is unchanged.
pub fn remove<S>(session: &mut Session<S>, ordinal: &str) -> Result<String, ShellError> {
    let ordinal: i64 = parse_number("item number", ordinal)?;

    if ordinal < 1 || ordinal as usize > session.cart.len() {
        return Err(ShellError::InvalidItemNumber);
    }

    let removed = session.cart.remove_item(ordinal as usize - 1)?;
    debug!(name = %removed.name(), ordinal, "item removed");

    Ok("Item removed from cart!".to_string())
}

/// Renders the cart contents and total.
pub fn view<S>(session: &Session<S>) -> Result<String, ShellError> {
    if session.cart.is_empty() {
        return Err(ShellError::EmptyCart {
            action: EmptyCartAction::View,
        });
    }

    Ok(render::cart_view(&session.cart))
}

/// Sets the flat cart discount. Last call wins.
pub fn discount<S>(session: &mut Session<S>, amount: &str) -> Result<String, ShellError> {
    let amount: f64 = parse_number("discount", amount)?;

    session.cart.set_discount(Amount::new(amount));
    debug!(discount = amount, "discount applied");

    Ok("Discount applied!".to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
