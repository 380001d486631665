use gstdoc_types::{Orientation, PaperSize, SectionId, SectionKind, TemplateId};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Free-form configuration attached to a concrete section (column lists, labels, ...).
pub type SectionData = serde_json::Map<String, serde_json::Value>;

/// Page setup declared by a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperSpec {
    pub sizes: BTreeSet<PaperSize>,
    pub orientation: Orientation,
    pub margins_mm: u16,
}

impl Default for PaperSpec {
    fn default() -> Self {
        Self {
            sizes: BTreeSet::from([PaperSize::A4]),
            orientation: Orientation::Portrait,
            margins_mm: 10,
        }
    }
}

/// The ordered section list of a template.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TemplateLayout {
    pub paper: PaperSpec,
    pub sections: Vec<SectionSpec>,
}

/// One entry of a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSpec {
    pub id: SectionId,
    pub body: SectionBody,
}

impl SectionSpec {
    pub fn concrete(id: impl Into<SectionId>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            body: SectionBody::Concrete { kind, data: SectionData::new() },
        }
    }

    pub fn inherited(id: impl Into<SectionId>, from: SectionRef) -> Self {
        Self {
            id: id.into(),
            body: SectionBody::Inherited { from, overrides: SectionData::new() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBody {
    /// A section rendered directly.
    Concrete { kind: SectionKind, data: SectionData },
    /// A section borrowed from another template, with optional top-level overrides.
    Inherited { from: SectionRef, overrides: SectionData },
}

/// A `template.section` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionRef {
    pub template: TemplateId,
    pub section: SectionId,
}

impl SectionRef {
    pub fn new(template: impl Into<TemplateId>, section: impl Into<SectionId>) -> Self {
        Self { template: template.into(), section: section.into() }
    }
}

impl FromStr for SectionRef {
    type Err = String;

    /// Splits `"GST_TABULAR_A4A5_V1.header"` at its last `.`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('.') {
            Some((template, section)) if !template.is_empty() && !section.is_empty() => {
                Ok(Self::new(template, section))
            }
            _ => Err(format!("'{}' is not a '<template>.<section>' reference", s)),
        }
    }
}

impl fmt::Display for SectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.template, self.section)
    }
}

impl Serialize for SectionRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
