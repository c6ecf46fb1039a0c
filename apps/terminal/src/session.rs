//! # Session State
//!
//! Owns the one live cart per terminal session, plus the configured
//! invoice sink.
//!
//! ## Ownership Model
//! The shell is a single-threaded REPL: exactly one logical actor drives
//! the cart, one command at a time, so the cart is a plain owned value
//! with no locking. Every command handler borrows the session, mutates
//! synchronously, and returns before the next prompt is read.
//!
//! Clearing after an invoice goes through [`tally_core::Cart::reset`] on
//! this same instance; the session never swaps the cart for a new object.

use tally_core::Cart;

/// One terminal session: the live cart and the invoice destination.
#[derive(Debug)]
pub struct Session<S> {
    /// The cart being built up by the current billing session
    pub cart: Cart,

    /// Where `download` persists invoice text
    pub sink: S,
}

impl<S> Session<S> {
    /// Creates a session with an empty cart and the given sink.
    pub fn new(sink: S) -> Self {
        Session {
            cart: Cart::new(),
            sink,
        }
    }
}
