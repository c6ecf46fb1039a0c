//! # Rendering
//!
//! Text rendering for the terminal display surface.
//!
//! The cart view is the shell's own rendering of cart state; the invoice
//! text itself comes from `tally_core::Cart::format_invoice` because that
//! exact text is also what gets persisted.

use tally_core::Cart;

/// Help text listing the command grammar.
pub const HELP: &str = "\
Commands:
  add <name> <price> <quantity>   Add an item to the cart
  remove <item number>            Remove an item (numbers as shown by 'view')
  view                            Show the cart contents and total
  discount <amount>               Apply a flat discount to the whole cart
  invoice                         Print the invoice and start a new cart
  download                        Save the invoice to a file and start a new cart
  help                            Show this help
  quit                            Exit";

/// Renders the cart-items view.
///
/// ## Format
/// ```text
/// ------ Cart Items ------
/// 1. Milk	$2.5	Qty: 2
/// 2. Bread	$1.0	Qty: 3
/// ------------------------
/// Total: $8.0
/// ------------------------
/// ```
/// Same tab-separated line shape as the invoice, but headed as a cart
/// view and without the discount line. Callers guard against empty carts
/// before asking for this.
pub fn cart_view(cart: &Cart) -> String {
    let mut text = String::from("------ Cart Items ------\n");
    for (i, item) in cart.items().iter().enumerate() {
        text.push_str(&format!(
            "{}. {}\t{}\tQty: {}\n",
            i + 1,
            item.name(),
            item.unit_price(),
            item.quantity()
        ));
    }
    text.push_str("------------------------\n");
    text.push_str(&format!("Total: {}\n", cart.total()));
    text.push_str("------------------------\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{Amount, LineItem};

    #[test]
    fn test_cart_view_exact_text() {
        let mut cart = Cart::new();
        cart.add_item(LineItem::new("Milk", Amount::new(2.5), 2));
        cart.add_item(LineItem::new("Bread", Amount::new(1.0), 3));

        assert_eq!(
            cart_view(&cart),
            "------ Cart Items ------\n\
             1. Milk\t$2.5\tQty: 2\n\
             2. Bread\t$1.0\tQty: 3\n\
             ------------------------\n\
             Total: $8.0\n\
             ------------------------\n"
        );
    }

    #[test]
    fn test_cart_view_reflects_discount_in_total() {
        let mut cart = Cart::new();
        cart.add_item(LineItem::new("Milk", Amount::new(2.5), 2));
        cart.set_discount(Amount::new(1.0));

        let view = cart_view(&cart);
        assert!(view.contains("Total: $4.0\n"));
        // The view shows the discounted total but not the discount itself
        assert!(!view.contains("Discount"));
    }
}
