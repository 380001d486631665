//! The built-in template catalog.
//!
//! Sources are compiled into the binary. Several templates borrow sections from
//! `GST_TABULAR_A4A5_V1` or `GST_DETAILED_A4_V1`, so the catalog only resolves
//! when loaded as a whole.

use crate::error::JsonTemplateError;
use crate::processor::JsonParser;
use gstdoc_template_core::TemplateDefinition;

/// `(file name, JSON source)` for every built-in template.
pub const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("gst_tabular_a4a5_v1.json", include_str!("../templates/gst_tabular_a4a5_v1.json")),
    ("gst_detailed_a4_v1.json", include_str!("../templates/gst_detailed_a4_v1.json")),
    ("gst_compact_a5_v1.json", include_str!("../templates/gst_compact_a5_v1.json")),
    ("gst_services_a4_v1.json", include_str!("../templates/gst_services_a4_v1.json")),
    ("gst_export_a4_v1.json", include_str!("../templates/gst_export_a4_v1.json")),
    ("bill_of_supply_v1.json", include_str!("../templates/bill_of_supply_v1.json")),
];

/// Compiles the built-in catalog.
pub fn builtin_definitions() -> Result<Vec<TemplateDefinition>, JsonTemplateError> {
    let parser = JsonParser;
    let mut definitions = Vec::with_capacity(BUILTIN_SOURCES.len());
    for (name, source) in BUILTIN_SOURCES {
        log::debug!("Compiling built-in template {}", name);
        definitions.extend(parser.parse_source(source)?);
    }
    Ok(definitions)
}
