// src/pipeline/builder.rs
use super::config::{ExecutionMode, PipelineConfig};
use super::orchestrator::InvoicePipeline;
use crate::error::PipelineError;
use gstdoc_json_template::{JsonParser, builtin_definitions};
use gstdoc_registry::{RegistryError, TemplateRegistry};
use gstdoc_resolver::Resolver;
use gstdoc_template_core::TemplateDefinition;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating an `InvoicePipeline`.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    builtin: bool,
    custom: Vec<TemplateDefinition>,
    config: PipelineConfig,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Seeds the catalog with the built-in templates. Custom templates with
    /// the same id replace them.
    pub fn with_builtin_templates(mut self) -> Self {
        self.builtin = true;
        self
    }

    /// Loads one JSON file holding a template object or an array of them.
    pub fn with_template_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read template from '{}': {}", path_ref.display(), e),
            ))
        })?;
        let definitions = JsonParser.parse_source(&source)?;
        log::info!("Loaded {} template(s) from {}", definitions.len(), path_ref.display());
        self.custom.extend(definitions);
        Ok(self)
    }

    /// Loads every `*.json` file in `dir`, in file-name order.
    pub fn with_template_dir<P: AsRef<Path>>(mut self, dir: P) -> Result<Self, PipelineError> {
        let mut paths = fs::read_dir(dir.as_ref())?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, io::Error>>()?;
        paths.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"));
        paths.sort();
        if paths.is_empty() {
            log::warn!("No template files found in {}", dir.as_ref().display());
        }
        for path in paths {
            self = self.with_template_file(path)?;
        }
        Ok(self)
    }

    pub fn with_template_source(mut self, source: &str) -> Result<Self, PipelineError> {
        self.custom.extend(JsonParser.parse_source(source)?);
        Ok(self)
    }

    pub fn with_template_definition(mut self, definition: TemplateDefinition) -> Self {
        self.custom.push(definition);
        self
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.config.strict_validation = strict;
        self
    }

    pub fn with_preflight(mut self, preflight: bool) -> Self {
        self.config.preflight = preflight;
        self
    }

    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution = mode;
        self
    }

    /// Consumes the builder and creates the `InvoicePipeline`.
    ///
    /// A custom template flagged `is_default` takes the default over from the
    /// built-in one. With preflight enabled, every template is resolved here
    /// and any inheritance error fails the build.
    pub fn build(self) -> Result<InvoicePipeline, PipelineError> {
        let definitions = self.catalog()?;
        if definitions.is_empty() {
            return Err(PipelineError::Config(
                "No templates configured. Use `with_builtin_templates` or `with_template_file`."
                    .to_string(),
            ));
        }

        let registry = Arc::new(TemplateRegistry::from_definitions(definitions)?);
        let resolver = Resolver::new(Arc::clone(&registry));
        if self.config.preflight {
            resolver.preflight().map_err(PipelineError::Preflight)?;
        }
        Ok(InvoicePipeline::new(registry, resolver, self.config))
    }

    fn catalog(&self) -> Result<Vec<TemplateDefinition>, PipelineError> {
        let mut definitions = if self.builtin { builtin_definitions()? } else { Vec::new() };

        let mut custom_ids = HashSet::new();
        for definition in &self.custom {
            if !custom_ids.insert(definition.id.clone()) {
                return Err(RegistryError::DuplicateTemplate(definition.id.clone()).into());
            }
            match definitions.iter_mut().find(|d| d.id == definition.id) {
                Some(slot) => {
                    log::info!("Custom template '{}' replaces the built-in one", definition.id);
                    *slot = definition.clone();
                }
                None => definitions.push(definition.clone()),
            }
        }

        let custom_defaults: Vec<_> = self.custom.iter().filter(|d| d.is_default).collect();
        if let [chosen] = custom_defaults.as_slice() {
            let chosen = chosen.id.clone();
            for definition in &mut definitions {
                definition.is_default = definition.id == chosen;
            }
        }
        Ok(definitions)
    }
}
