// Processor that implements TemplateParser for JSON templates
use crate::ast::{JsonSection, JsonTemplateFile};
use crate::error::JsonTemplateError;
use gstdoc_template_core::{
    InvoiceNumberRules, PaperSpec, Requirements, SectionBody, SectionRef, SectionSpec, TaxLogic,
    TemplateDefinition, TemplateError, TemplateLayout, TemplateParser, ValidationRules,
};
use gstdoc_types::{SectionId, SectionKind, TemplateId};
use serde_json::Value;

const INHERIT: &str = "inherit";

/// JSON template parser
pub struct JsonParser;

impl JsonParser {
    /// Compiles one parsed template file.
    pub fn compile(&self, file: JsonTemplateFile) -> Result<TemplateDefinition, JsonTemplateError> {
        let template_id = file.template_id.clone();
        let sections = file
            .layout
            .sections
            .iter()
            .map(|s| compile_section(&template_id, s))
            .collect::<Result<Vec<_>, _>>()?;

        let invoice_number = file
            .validation
            .invoice_number
            .map(|n| InvoiceNumberRules { min_length: n.min_length, max_length: n.max_length })
            .unwrap_or_default();

        let definition = TemplateDefinition {
            id: TemplateId::from(file.template_id),
            name: file.name,
            description: file.description,
            requires: Requirements {
                gst: file.requires.gst,
                hsn: file.requires.hsn_required,
                title: file.requires.title,
            },
            sort_order: file.sort_order,
            is_default: file.is_default,
            validation: ValidationRules {
                invoice_number,
                hsn_digits: file.validation.hsn_digits,
                gstin_required: file.validation.gstin_required.unwrap_or(file.requires.gst),
                gstin_checksum: file.validation.gstin_checksum,
            },
            tax_logic: TaxLogic {
                odd_paise_to: file.tax_logic.odd_paise_to,
                round_off: file.tax_logic.round_off,
            },
            layout: TemplateLayout {
                paper: PaperSpec {
                    sizes: file.layout.paper.sizes.into_iter().collect(),
                    orientation: file.layout.paper.orientation,
                    margins_mm: file.layout.paper.margins_mm,
                },
                sections,
            },
        };

        definition.check()?;
        log::debug!(
            "Compiled template '{}' with {} sections",
            definition.id,
            definition.layout.sections.len()
        );
        Ok(definition)
    }

    /// Parses a source holding either one template object or an array of them.
    pub fn parse_source(&self, source: &str) -> Result<Vec<TemplateDefinition>, JsonTemplateError> {
        let value: Value = serde_json::from_str(source)?;
        let files: Vec<JsonTemplateFile> = match value {
            Value::Array(items) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<_, _>>()?,
            other => vec![serde_json::from_value(other)?],
        };
        files.into_iter().map(|f| self.compile(f)).collect()
    }
}

impl TemplateParser for JsonParser {
    fn parse(&self, template_source: &str) -> Result<Vec<TemplateDefinition>, TemplateError> {
        self.parse_source(template_source).map_err(TemplateError::from)
    }
}

fn compile_section(template: &str, section: &JsonSection) -> Result<SectionSpec, JsonTemplateError> {
    let fail = |message: String| JsonTemplateError::Compilation {
        template: template.to_string(),
        message,
    };

    let body = if section.section_type == INHERIT {
        if !section.data.is_empty() {
            return Err(fail(format!(
                "section '{}' inherits and may only carry 'overrides', not 'data'",
                section.id
            )));
        }
        let from_template = section.from_template.as_deref().ok_or_else(|| {
            fail(format!("section '{}' inherits but names no from_template", section.id))
        })?;
        let from = match &section.from_section {
            Some(from_section) => SectionRef::new(from_template, from_section.as_str()),
            None => from_template.parse::<SectionRef>().map_err(fail)?,
        };
        SectionBody::Inherited { from, overrides: section.overrides.clone() }
    } else {
        if section.from_template.is_some() || !section.overrides.is_empty() {
            return Err(fail(format!(
                "section '{}' of type '{}' cannot use from_template or overrides",
                section.id, section.section_type
            )));
        }
        let kind = section
            .section_type
            .parse::<SectionKind>()
            .map_err(|e| fail(e.to_string()))?;
        SectionBody::Concrete { kind, data: section.data.clone() }
    };

    Ok(SectionSpec { id: SectionId::from(section.id.as_str()), body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gstdoc_template_core::{GstinChecksum, HsnDigits, RoundOff};
    use gstdoc_types::PaperSize;
    use serde_json::json;

    fn minimal(sections: Value) -> Value {
        json!({
            "template_id": "T_MIN",
            "name": "Minimal",
            "requires": { "gst": true, "hsn_required": true, "title": "Tax Invoice" },
            "validation": { "hsn_digits": 6 },
            "layout": { "paper": { "sizes": ["A4", "A5"] }, "sections": sections }
        })
    }

    #[test]
    fn test_compiles_concrete_and_inherited_sections() {
        let source = minimal(json!([
            { "id": "header", "type": "header", "data": { "fields": ["name"] } },
            { "id": "items", "type": "inherit", "from_template": "OTHER.items" },
            { "id": "sign", "type": "inherit", "from_template": "OTHER", "from_section": "signature",
              "overrides": { "label": "Proprietor" } }
        ]));
        let defs = JsonParser.parse_source(&source.to_string()).unwrap();
        assert_eq!(defs.len(), 1);

        let def = &defs[0];
        assert_eq!(def.id.as_str(), "T_MIN");
        assert!(def.validation.gstin_required);
        assert_eq!(def.validation.hsn_digits, Some(HsnDigits::Six));
        assert_eq!(def.validation.gstin_checksum, GstinChecksum::Iso7064Mod37_36);
        assert_eq!(def.tax_logic.round_off, RoundOff::None);
        assert!(def.supports_paper(PaperSize::A5));

        match &def.layout.sections[1].body {
            SectionBody::Inherited { from, .. } => assert_eq!(from.to_string(), "OTHER.items"),
            other => panic!("expected inherited section, got {:?}", other),
        }
        match &def.layout.sections[2].body {
            SectionBody::Inherited { from, overrides } => {
                assert_eq!(from.to_string(), "OTHER.signature");
                assert_eq!(overrides["label"], json!("Proprietor"));
            }
            other => panic!("expected inherited section, got {:?}", other),
        }
    }

    #[test]
    fn test_array_source_yields_all_templates() {
        let mut second = minimal(json!([{ "id": "header", "type": "header" }]));
        second["template_id"] = json!("T_TWO");
        let source = json!([minimal(json!([{ "id": "header", "type": "header" }])), second]);
        let defs = JsonParser.parse_source(&source.to_string()).unwrap();
        let ids: Vec<_> = defs.iter().map(|d| d.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["T_MIN", "T_TWO"]);
    }

    #[test]
    fn test_unknown_section_type_is_rejected() {
        let source = minimal(json!([{ "id": "x", "type": "watermark" }]));
        let err = JsonParser.parse_source(&source.to_string()).unwrap_err();
        assert!(matches!(err, JsonTemplateError::Compilation { .. }));
    }

    #[test]
    fn test_inherit_without_reference_is_rejected() {
        let source = minimal(json!([{ "id": "x", "type": "inherit" }]));
        assert!(JsonParser.parse_source(&source.to_string()).is_err());

        let source = minimal(json!([{ "id": "x", "type": "inherit", "from_template": "NODOT" }]));
        assert!(JsonParser.parse_source(&source.to_string()).is_err());
    }

    #[test]
    fn test_invalid_hsn_digit_count_fails_to_parse() {
        let mut source = minimal(json!([{ "id": "header", "type": "header" }]));
        source["validation"]["hsn_digits"] = json!(5);
        assert!(matches!(
            JsonParser.parse_source(&source.to_string()),
            Err(JsonTemplateError::JsonParse(_))
        ));
    }

    #[test]
    fn test_trait_maps_errors_to_template_error() {
        let err = JsonParser.parse("{ not json").unwrap_err();
        assert!(matches!(err, TemplateError::ParseError(_)));
    }
}
