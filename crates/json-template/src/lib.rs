//! JSON authoring format for invoice templates.
//!
//! Templates are authored as JSON documents of the shape
//! `{template_id, name, description, requires, validation, tax_logic, layout}`
//! and compiled into `TemplateDefinition`s. The crate also carries the built-in
//! catalog that the registry is seeded with at startup.

pub mod ast;
pub mod builtin;
pub mod error;
pub mod processor;

pub use ast::{JsonSection, JsonTemplateFile};
pub use builtin::{BUILTIN_SOURCES, builtin_definitions};
pub use error::JsonTemplateError;
pub use processor::JsonParser;
