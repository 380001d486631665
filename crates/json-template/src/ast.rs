//! The JSON template format as it is parsed from the source file by Serde.
//! This is the **input** representation; `processor` compiles it into
//! `TemplateDefinition`.

use gstdoc_template_core::{GstinChecksum, HsnDigits, RoundOff, SplitBias};
use gstdoc_types::{Orientation, PaperSize};
use serde::{Deserialize, Serialize};

pub type JsonObject = serde_json::Map<String, serde_json::Value>;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct JsonTemplateFile {
    pub template_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_default: bool,
    pub requires: JsonRequires,
    #[serde(default)]
    pub validation: JsonValidation,
    #[serde(default)]
    pub tax_logic: JsonTaxLogic,
    pub layout: JsonLayout,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct JsonRequires {
    pub gst: bool,
    #[serde(default)]
    pub hsn_required: bool,
    pub title: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct JsonValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<JsonInvoiceNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn_digits: Option<HsnDigits>,
    /// Defaults to `requires.gst` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gstin_required: Option<bool>,
    #[serde(default)]
    pub gstin_checksum: GstinChecksum,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct JsonInvoiceNumber {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_min_length() -> usize {
    1
}

fn default_max_length() -> usize {
    16
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct JsonTaxLogic {
    #[serde(default)]
    pub odd_paise_to: SplitBias,
    #[serde(default)]
    pub round_off: RoundOff,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct JsonLayout {
    #[serde(default)]
    pub paper: JsonPaper,
    pub sections: Vec<JsonSection>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct JsonPaper {
    #[serde(default = "default_sizes")]
    pub sizes: Vec<PaperSize>,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_margins")]
    pub margins_mm: u16,
}

impl Default for JsonPaper {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            orientation: Orientation::default(),
            margins_mm: default_margins(),
        }
    }
}

fn default_sizes() -> Vec<PaperSize> {
    vec![PaperSize::A4]
}

fn default_margins() -> u16 {
    10
}

/// A section entry. `type` is either a concrete section type or `"inherit"`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct JsonSection {
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: String,
    /// `"<template>.<section>"`, or a bare template id when `from_section` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_section: Option<String>,
    #[serde(default, skip_serializing_if = "JsonObject::is_empty")]
    pub data: JsonObject,
    #[serde(default, skip_serializing_if = "JsonObject::is_empty")]
    pub overrides: JsonObject,
}
