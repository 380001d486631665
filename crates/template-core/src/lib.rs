//! Core data model for invoice templates
//!
//! This crate defines the in-memory form of a template after it has been read
//! from its authoring format. Everything here is immutable once built; the only
//! piece of mutable catalog state (which template is the default) lives in the
//! registry, not on the definitions.
//!
//! ## Key Abstractions
//!
//! - **`TemplateDefinition`**: metadata, requirements, rules and layout of one template
//! - **`SectionSpec`**: a layout section, either concrete or inherited from another template
//! - **`ValidationRules`** / **`TaxLogic`**: per-template policy consumed by the engines
//! - **`TemplateParser`**: trait for turning an authoring source into definitions

mod layout;
mod rules;

pub use layout::{PaperSpec, SectionBody, SectionData, SectionRef, SectionSpec, TemplateLayout};
pub use rules::{
    GstinChecksum, HsnDigits, InvoiceNumberRules, RoundOff, SplitBias, TaxLogic, ValidationRules,
};

use gstdoc_types::{PaperSize, SectionId, TemplateId};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while reading or checking a template definition.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template parsing failed: {0}")]
    ParseError(String),

    #[error("Template '{template}' is invalid: {message}")]
    InvalidDefinition { template: TemplateId, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// What a template demands from the invoice it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirements {
    /// GSTINs and a GST tax breakdown must be present.
    pub gst: bool,
    /// Every line item must carry an HSN/SAC code.
    pub hsn: bool,
    /// Document title, e.g. "Tax Invoice" or "Bill of Supply".
    pub title: String,
}

/// A complete, immutable template definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDefinition {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    pub requires: Requirements,
    pub sort_order: i32,
    /// Seed-time default flag. The registry decides the live default.
    pub is_default: bool,
    pub validation: ValidationRules,
    pub tax_logic: TaxLogic,
    pub layout: TemplateLayout,
}

impl TemplateDefinition {
    pub fn supports_paper(&self, size: PaperSize) -> bool {
        self.layout.paper.sizes.contains(&size)
    }

    pub fn section(&self, id: &SectionId) -> Option<&SectionSpec> {
        self.layout.sections.iter().find(|s| &s.id == id)
    }

    /// Structural checks that do not need any other template.
    ///
    /// Cross-template references are checked by the resolver, not here.
    pub fn check(&self) -> Result<(), TemplateError> {
        let invalid = |message: String| TemplateError::InvalidDefinition {
            template: self.id.clone(),
            message,
        };

        if self.id.as_str().is_empty() || self.id.as_str().contains('.') {
            return Err(invalid("template id must be non-empty and contain no '.'".into()));
        }
        if self.layout.paper.sizes.is_empty() {
            return Err(invalid("at least one paper size is required".into()));
        }
        if self.layout.sections.is_empty() {
            return Err(invalid("layout has no sections".into()));
        }

        let mut seen = HashSet::new();
        for section in &self.layout.sections {
            if !seen.insert(&section.id) {
                return Err(invalid(format!("duplicate section id '{}'", section.id)));
            }
        }

        let numbers = &self.validation.invoice_number;
        if numbers.min_length == 0 || numbers.min_length > numbers.max_length {
            return Err(invalid(format!(
                "invoice number bounds {}..={} are not a valid range",
                numbers.min_length, numbers.max_length
            )));
        }
        if self.requires.hsn && self.validation.hsn_digits.is_none() {
            return Err(invalid("requires HSN but declares no hsn_digits".into()));
        }
        Ok(())
    }
}

/// A parser responsible for turning a template source string into definitions.
pub trait TemplateParser {
    /// Parses one source, which may hold a single template or several.
    fn parse(&self, template_source: &str) -> Result<Vec<TemplateDefinition>, TemplateError>;
}
