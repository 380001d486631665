//! # gstdoc
//!
//! GST invoice documents from declarative templates.
//!
//! Templates live in a catalog with exactly one default. A template's sections
//! may be borrowed from other templates; the resolver flattens that inheritance
//! and caches the result. For each invoice the pipeline computes CGST/SGST or
//! IGST per line, validates GSTINs, HSN codes and the invoice number, and
//! assembles a renderer-agnostic document tree.

// Re-export workspace crates
pub use gstdoc_core as assembly;
pub use gstdoc_idf as idf;
pub use gstdoc_json_template as json_template;
pub use gstdoc_registry as registry;
pub use gstdoc_resolver as resolver;
pub use gstdoc_tax as tax;
pub use gstdoc_template_core as template_core;
pub use gstdoc_types as types;
pub use gstdoc_validation as validation;

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{ExecutionMode, InvoicePipeline, PipelineBuilder, PipelineConfig, TemplateSelector};

// Commonly used types
pub use gstdoc_core::{InvoiceData, InvoiceInput, Party, PartyData, ResolvedDocument};
pub use gstdoc_types::{GstRate, PaperSize, StateCode, TemplateId};
