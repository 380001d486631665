//! Template inheritance resolution.
//!
//! A section declared as `inherit` borrows the materialized form of a section
//! in another template, which may itself be inherited. Resolution is a
//! depth-first walk memoized per `(template, section)` pair, with the pairs on
//! the current path tracked so that cycles are reported instead of followed.

mod cache;
mod resolve;

pub use cache::Resolver;
pub use resolve::{ResolvedLayout, ResolvedSection, resolve_in};

use gstdoc_template_core::SectionRef;
use gstdoc_types::TemplateId;
use itertools::Itertools;
use std::fmt;
use thiserror::Error;

/// Which half of a `template.section` reference could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPart {
    Template,
    Section,
}

impl fmt::Display for MissingPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingPart::Template => f.write_str("template"),
            MissingPart::Section => f.write_str("section"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Template not found: {0}")]
    NotFound(TemplateId),

    #[error("Cyclic inheritance: {}", .cycle.iter().join(" -> "))]
    CyclicInheritance { cycle: Vec<SectionRef> },

    #[error("Unresolved reference '{reference}' in '{referenced_by}': no such {missing}")]
    UnresolvedReference {
        reference: SectionRef,
        referenced_by: SectionRef,
        missing: MissingPart,
    },
}
