//! GST computation for one invoice.
//!
//! A supply is intra-state when the supplier's state equals the place of
//! supply; the line tax is then split between CGST and SGST. Otherwise the
//! whole amount is IGST. All arithmetic uses [`rust_decimal::Decimal`] and each
//! line is rounded to paise on its own before anything is summed.

mod breakdown;
mod engine;
mod line;

pub use breakdown::{LineTax, RateSummary, SupplyType, TaxBreakdown, TaxTotals};
pub use engine::{compute_tax, round2, supply_type};
pub use line::LineItem;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxError {
    /// `line` is 1-based, matching the serial number printed on the invoice.
    #[error("Invalid line item {line}: {reason}")]
    InvalidLineItem { line: usize, reason: String },

    #[error("Invoice totals exceed the representable amount range")]
    TotalsOverflow,
}
