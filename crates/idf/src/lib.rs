//! Intermediate Document Format (IDF)
//! The finished, inheritance-free document handed to an HTML/PDF renderer.
//! Every value is already formatted as text; a renderer only decides how it looks.

use gstdoc_types::{Orientation, PaperSize, SectionId, SectionKind, TemplateId};
use serde::Serialize;

/// The root of an assembled invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDocument {
    pub template: TemplateId,
    pub title: String,
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub margins_mm: u16,
    pub sections: Vec<DocSection>,
}

impl ResolvedDocument {
    pub fn section(&self, id: &str) -> Option<&DocSection> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &DocSection> {
        self.sections.iter().filter(move |s| s.kind == kind)
    }
}

/// One materialized layout section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocSection {
    pub id: SectionId,
    pub kind: SectionKind,
    /// `template.section` of the concrete definition the section came from.
    pub origin: String,
    pub nodes: Vec<DocNode>,
}

impl DocSection {
    /// First field with `key`, searching groups depth-first.
    pub fn field(&self, key: &str) -> Option<&str> {
        find_field(&self.nodes, key)
    }

    pub fn table(&self) -> Option<&TableNode> {
        self.nodes.iter().find_map(|n| match n {
            DocNode::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn group(&self, label: &str) -> Option<&[DocNode]> {
        self.nodes.iter().find_map(|n| match n {
            DocNode::Group { label: Some(l), children } if l == label => Some(children.as_slice()),
            _ => None,
        })
    }
}

fn find_field<'a>(nodes: &'a [DocNode], key: &str) -> Option<&'a str> {
    nodes.iter().find_map(|node| match node {
        DocNode::Field { key: k, value, .. } if k == key => Some(value.as_str()),
        DocNode::Group { children, .. } => find_field(children, key),
        _ => None,
    })
}

/// A block-level element of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum DocNode {
    Heading { level: u8, text: String },
    /// A labelled value such as `GSTIN: 27AABCU9603R1ZM`.
    Field { key: String, label: String, value: String },
    /// Related nodes rendered together (e.g. the "Bill To" block).
    Group { label: Option<String>, children: Vec<DocNode> },
    Table(TableNode),
    Text { text: String },
}

impl DocNode {
    pub fn field(key: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        DocNode::Field { key: key.into(), label: label.into(), value: value.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        DocNode::Text { text: text.into() }
    }

    /// Returns a string identifier for the node type.
    pub fn kind(&self) -> &'static str {
        match self {
            DocNode::Heading { .. } => "heading",
            DocNode::Field { .. } => "field",
            DocNode::Group { .. } => "group",
            DocNode::Table(_) => "table",
            DocNode::Text { .. } => "text",
        }
    }
}

// --- Table-specific Structures ---

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TableNode {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    pub footer: Vec<TableRow>,
}

impl TableNode {
    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// The cell in `row` under column `key`.
    pub fn cell(&self, row: usize, key: &str) -> Option<&str> {
        let col = self.column_index(key)?;
        self.rows.get(row)?.cells.get(col).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    pub align: Align,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}
