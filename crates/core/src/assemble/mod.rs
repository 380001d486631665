//! Document assembly.
//!
//! Walks the resolved section list in order and renders each section from its
//! configuration `data` plus the invoice. Required-field checks run first so a
//! failing request never yields a partial document.

mod config;
mod sections;

use crate::error::AssemblyError;
use crate::model::{InvoiceData, PartyData};
use config::SectionConfig;
use gstdoc_idf::{DocSection, ResolvedDocument};
use gstdoc_resolver::ResolvedLayout;
use gstdoc_tax::TaxBreakdown;
use gstdoc_template_core::TemplateDefinition;
use gstdoc_types::PaperSize;

/// Everything a section renderer may read.
pub(crate) struct Context<'a> {
    pub template: &'a TemplateDefinition,
    pub tax: &'a TaxBreakdown,
    pub invoice: &'a InvoiceData,
    pub parties: &'a PartyData,
}

pub fn assemble(
    template: &TemplateDefinition,
    layout: &ResolvedLayout,
    tax: &TaxBreakdown,
    invoice: &InvoiceData,
    parties: &PartyData,
    paper: PaperSize,
) -> Result<ResolvedDocument, AssemblyError> {
    if layout.template != template.id {
        return Err(AssemblyError::LayoutMismatch {
            expected: template.id.clone(),
            found: layout.template.clone(),
        });
    }
    if !template.supports_paper(paper) {
        return Err(AssemblyError::UnsupportedPaperSize { template: template.id.clone(), paper });
    }
    check_required(template, invoice, parties)?;
    if tax.lines.len() != invoice.lines.len() {
        return Err(AssemblyError::BreakdownMismatch {
            lines: invoice.lines.len(),
            taxed: tax.lines.len(),
        });
    }

    let ctx = Context { template, tax, invoice, parties };
    let sections = layout
        .sections
        .iter()
        .map(|section| {
            let config = SectionConfig::new(section);
            Ok(DocSection {
                id: section.id.clone(),
                kind: section.kind,
                origin: section.origin.to_string(),
                nodes: sections::render(&ctx, &config)?,
            })
        })
        .collect::<Result<Vec<_>, AssemblyError>>()?;

    log::debug!(
        "Assembled '{}' for invoice '{}' on {} ({} sections)",
        template.id,
        invoice.number,
        paper,
        sections.len()
    );

    Ok(ResolvedDocument {
        template: template.id.clone(),
        title: template.requires.title.clone(),
        paper,
        orientation: layout.paper.orientation,
        margins_mm: layout.paper.margins_mm,
        sections,
    })
}

fn check_required(
    template: &TemplateDefinition,
    invoice: &InvoiceData,
    parties: &PartyData,
) -> Result<(), AssemblyError> {
    if invoice.number.trim().is_empty() {
        return Err(AssemblyError::missing("invoice.number"));
    }
    if invoice.lines.is_empty() {
        return Err(AssemblyError::missing("invoice.lines"));
    }
    if parties.supplier.name.trim().is_empty() {
        return Err(AssemblyError::missing("supplier.name"));
    }
    if parties.customer.name.trim().is_empty() {
        return Err(AssemblyError::missing("customer.name"));
    }
    if (template.requires.gst || template.validation.gstin_required)
        && parties.supplier.gstin().is_none()
    {
        return Err(AssemblyError::missing("supplier.gstin"));
    }
    if template.requires.hsn {
        if let Some(idx) = invoice
            .lines
            .iter()
            .position(|l| l.hsn.as_deref().is_none_or(|h| h.trim().is_empty()))
        {
            return Err(AssemblyError::missing(format!("lines[{}].hsn", idx + 1)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
