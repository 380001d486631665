// src/pipeline/orchestrator.rs
use super::config::{ExecutionMode, PipelineConfig};
use crate::error::PipelineError;
use gstdoc_core::{InvoiceInput, ResolvedDocument, assemble, validate_invoice};
use gstdoc_registry::{TemplateEntry, TemplateRegistry};
use gstdoc_resolver::{ResolvedLayout, Resolver};
use gstdoc_tax::{TaxBreakdown, TaxError, compute_tax};
use gstdoc_template_core::TemplateDefinition;
use gstdoc_types::{PaperSize, TemplateId};
use gstdoc_validation::ValidationReport;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which template a request is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSelector {
    /// The registry's current default.
    #[default]
    Default,
    Id(TemplateId),
}

impl FromStr for TemplateSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.eq_ignore_ascii_case("default") {
            TemplateSelector::Default
        } else {
            TemplateSelector::Id(TemplateId::new(s))
        })
    }
}

impl fmt::Display for TemplateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSelector::Default => f.write_str("default"),
            TemplateSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// The invoice pipeline. Cheap to share across threads; all state lives in
/// the registry and the resolver cache.
#[derive(Debug)]
pub struct InvoicePipeline {
    registry: Arc<TemplateRegistry>,
    resolver: Resolver,
    config: PipelineConfig,
}

impl InvoicePipeline {
    pub(crate) fn new(
        registry: Arc<TemplateRegistry>,
        resolver: Resolver,
        config: PipelineConfig,
    ) -> Self {
        Self { registry, resolver, config }
    }

    pub fn registry(&self) -> &Arc<TemplateRegistry> {
        &self.registry
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn list_templates(&self) -> Vec<TemplateEntry> {
        self.registry.list_templates()
    }

    pub fn set_default(&self, id: &TemplateId) -> Result<(), PipelineError> {
        Ok(self.registry.set_default(id)?)
    }

    pub fn template(&self, selector: &TemplateSelector) -> Result<Arc<TemplateDefinition>, PipelineError> {
        let definition = match selector {
            TemplateSelector::Default => self.registry.get_default()?,
            TemplateSelector::Id(id) => self.registry.get_template(id)?,
        };
        Ok(definition)
    }

    pub fn resolve(&self, selector: &TemplateSelector) -> Result<Arc<ResolvedLayout>, PipelineError> {
        let definition = self.template(selector)?;
        Ok(self.resolver.resolve(&definition.id)?)
    }

    /// Runs only the validation stage.
    pub fn validate(
        &self,
        selector: &TemplateSelector,
        input: &InvoiceInput,
    ) -> Result<ValidationReport, PipelineError> {
        let definition = self.template(selector)?;
        Ok(validate_invoice(&definition, &input.invoice, &input.parties))
    }

    /// Renders one invoice. Without an explicit `paper`, the configured paper
    /// size is used if the template supports it, else the template's first size.
    pub fn render(
        &self,
        selector: &TemplateSelector,
        input: &InvoiceInput,
        paper: Option<PaperSize>,
    ) -> Result<ResolvedDocument, PipelineError> {
        let definition = self.template(selector)?;
        let layout = self.resolver.resolve(&definition.id)?;
        let paper = paper.unwrap_or_else(|| self.paper_for(&definition));

        let (tax, report) = self.run_engines(&definition, input);
        if !report.is_clean() {
            if self.config.strict_validation {
                return Err(PipelineError::Validation(report));
            }
            for issue in report.issues() {
                log::warn!("Invoice '{}': {}: {}", input.invoice.number, issue.field, issue.error);
            }
        }
        let tax = tax?;

        let document = assemble(
            &definition,
            &layout,
            &tax,
            &input.invoice,
            &input.parties,
            paper,
        )?;
        log::info!(
            "Rendered invoice '{}' with '{}' ({:?}, total {})",
            input.invoice.number,
            definition.id,
            tax.supply_type,
            tax.invoice_total
        );
        Ok(document)
    }

    fn paper_for(&self, definition: &TemplateDefinition) -> PaperSize {
        let sizes = &definition.layout.paper.sizes;
        if sizes.contains(&self.config.default_paper) {
            self.config.default_paper
        } else {
            sizes.first().copied().unwrap_or(self.config.default_paper)
        }
    }

    fn run_engines(
        &self,
        definition: &TemplateDefinition,
        input: &InvoiceInput,
    ) -> (Result<TaxBreakdown, TaxError>, ValidationReport) {
        let invoice = &input.invoice;
        let parties = &input.parties;
        let tax = || {
            compute_tax(
                parties.supplier.state,
                invoice.place_of_supply(parties),
                &invoice.lines,
                &definition.tax_logic,
            )
        };
        let validate = || validate_invoice(definition, invoice, parties);

        match self.config.execution {
            #[cfg(feature = "rayon-executor")]
            ExecutionMode::Parallel => rayon::join(tax, validate),
            _ => {
                let report = validate();
                (tax(), report)
            }
        }
    }
}
