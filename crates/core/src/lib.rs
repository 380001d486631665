//! # gstdoc-core
//!
//! The last step before rendering: merges a resolved layout, a computed tax
//! breakdown and the invoice/party data into a [`ResolvedDocument`].
//!
//! - **model**: the invoice and party input structures
//! - **assemble**: per-section rendering into IDF nodes
//! - **validate**: collects every GSTIN/HSN/invoice-number problem of an invoice
//! - **words** / **format**: amount-in-words and Indian number formatting
//!
//! Nothing here touches the filesystem or holds state; identical inputs give
//! identical documents.

// Re-export foundation crates
pub use gstdoc_idf as idf;
pub use gstdoc_tax as tax;
pub use gstdoc_types as types;

pub mod assemble;
pub mod error;
pub mod format;
pub mod model;
pub mod validate;
pub mod words;

pub use assemble::assemble;
pub use error::AssemblyError;
pub use idf::{DocNode, DocSection, ResolvedDocument, TableNode};
pub use model::{BankDetails, InvoiceData, InvoiceInput, Party, PartyData};
pub use validate::validate_invoice;
pub use words::amount_in_words;
