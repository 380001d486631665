//! Template registry.
//!
//! Holds the catalog of template definitions in an indexed arena. The catalog
//! itself is replaced wholesale on reload; the "default template" is a separate
//! atomically swapped index into the current catalog, so readers always observe
//! exactly one default.

mod catalog;
mod registry;

pub use catalog::Catalog;
pub use registry::{TemplateEntry, TemplateRegistry, UpsertOutcome};

use gstdoc_json_template::JsonTemplateError;
use gstdoc_template_core::TemplateError;
use gstdoc_types::TemplateId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Template not found: {0}")]
    NotFound(TemplateId),

    #[error("No default template is configured")]
    NoDefaultConfigured,

    #[error("Template '{0}' is defined more than once")]
    DuplicateTemplate(TemplateId),

    #[error("More than one template is flagged as default: {0:?}")]
    MultipleDefaults(Vec<TemplateId>),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Built-in catalog failed to compile: {0}")]
    Builtin(#[from] JsonTemplateError),
}
