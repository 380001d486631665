use crate::model::{InvoiceData, Party, PartyData};
use gstdoc_template_core::TemplateDefinition;
use gstdoc_types::GstRate;
use gstdoc_validation::{
    Gstin, ValidationError, ValidationReport, validate_hsn, validate_invoice_number,
};

/// Checks every identifier on the invoice against the template's rules and
/// returns all problems found, not just the first.
pub fn validate_invoice(
    template: &TemplateDefinition,
    invoice: &InvoiceData,
    parties: &PartyData,
) -> ValidationReport {
    let rules = &template.validation;
    let mut report = ValidationReport::new();

    report.check(
        "invoice.number",
        validate_invoice_number(&invoice.number, &rules.invoice_number),
    );

    check_party(&mut report, "supplier", &parties.supplier, rules.gstin_required, template);
    check_party(&mut report, "customer", &parties.customer, false, template);

    for (idx, line) in invoice.lines.iter().enumerate() {
        let field = format!("lines[{}].hsn", idx + 1);
        match (line.hsn.as_deref().filter(|h| !h.is_empty()), rules.hsn_digits) {
            (Some(code), Some(digits)) => report.check(field, validate_hsn(code, digits)),
            (None, _) if template.requires.hsn => report.push(field, ValidationError::MissingHsn),
            _ => {}
        }
        if !template.requires.gst && line.gst_rate != GstRate::Zero {
            report.push(
                format!("lines[{}].gst_rate", idx + 1),
                ValidationError::TaxOnNonGstDocument { rate: line.gst_rate.to_string() },
            );
        }
    }

    if report.is_clean() {
        log::debug!("Invoice '{}' passed validation for '{}'", invoice.number, template.id);
    }
    report
}

fn check_party(
    report: &mut ValidationReport,
    role: &str,
    party: &Party,
    required: bool,
    template: &TemplateDefinition,
) {
    let field = format!("{}.gstin", role);
    let Some(value) = party.gstin() else {
        if required {
            report.push(field, ValidationError::MissingGstin);
        }
        return;
    };
    match Gstin::parse(value, template.validation.gstin_checksum) {
        Ok(gstin) if gstin.state() != party.state => report.push(
            field,
            ValidationError::StateMismatch {
                gstin_state: gstin.state().to_string(),
                party_state: party.state.to_string(),
            },
        ),
        Ok(_) => {}
        Err(err) => report.push(field, err),
    }
}
