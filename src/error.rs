// src/error.rs
use gstdoc_core::AssemblyError;
use gstdoc_json_template::JsonTemplateError;
use gstdoc_registry::RegistryError;
use gstdoc_resolver::ResolveError;
use gstdoc_tax::TaxError;
use gstdoc_template_core::TemplateError;
use gstdoc_validation::ValidationReport;
use itertools::Itertools;
use thiserror::Error;

/// A comprehensive error type for the whole invoice pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Preflight found {} broken template(s):\n  {}", .0.len(), .0.iter().join("\n  "))]
    Preflight(Vec<ResolveError>),

    #[error("Tax computation failed: {0}")]
    Tax(#[from] TaxError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationReport),

    #[error("Assembly failed: {0}")]
    Assembly(#[from] AssemblyError),
}

impl From<JsonTemplateError> for PipelineError {
    fn from(e: JsonTemplateError) -> Self {
        PipelineError::Template(e.into())
    }
}
