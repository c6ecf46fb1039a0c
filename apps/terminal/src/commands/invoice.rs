//! # Invoice Commands
//!
//! Handlers for invoice generation and download.
//!
//! ## Reset Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   When the Cart Resets                              │
//! │                                                                     │
//! │  invoice ──► empty? ──► notice, NO reset                            │
//! │                 │                                                   │
//! │                 ▼                                                   │
//! │          format_invoice ──► shown ──► reset()          ✓ once       │
//! │                                                                     │
//! │  download ─► empty? ──► notice, NO reset                            │
//! │                 │                                                   │
//! │                 ▼                                                   │
//! │          format_invoice ──► sink.write ──┬─ Ok ──► reset()  ✓ once  │
//! │                                          │                          │
//! │                                          └─ Err ─► cart KEPT,       │
//! │                                                    user may retry   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{error, info};

use crate::error::{EmptyCartAction, ShellError};
use crate::session::Session;
use crate::sink::InvoiceSink;

/// Prints the invoice for the current cart and starts a new one.
///
/// The returned text is exactly what `download` would persist.
pub fn generate<S>(session: &mut Session<S>) -> Result<String, ShellError> {
    if session.cart.is_empty() {
        return Err(ShellError::EmptyCart {
            action: EmptyCartAction::Generate,
        });
    }

    let invoice = session.cart.format_invoice();
    // a shown invoice closes the billing session
    session.cart.reset();
    info!("invoice generated");

    Ok(invoice)
}

/// Persists the invoice through the sink, then starts a new cart.
///
/// The write completes fully before the cart is touched: on a sink
/// failure the cart keeps its items and discount so the user can fix the
/// destination and retry.
pub fn download<S: InvoiceSink>(session: &mut Session<S>) -> Result<String, ShellError> {
    if session.cart.is_empty() {
        return Err(ShellError::EmptyCart {
            action: EmptyCartAction::Download,
        });
    }

    let invoice = session.cart.format_invoice();
    session.sink.write(&invoice).map_err(|err| {
        error!(%err, "invoice write failed");
        err
    })?;

    session.cart.reset();
    info!("invoice downloaded");

    Ok("Invoice saved to file.".to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
