use crate::{MissingPart, ResolveError};
use gstdoc_registry::Catalog;
use gstdoc_template_core::{PaperSpec, SectionBody, SectionData, SectionRef};
use gstdoc_types::{SectionId, SectionKind, TemplateId};
use serde::Serialize;
use std::collections::HashMap;

/// A concrete section after inheritance has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSection {
    /// The id under which the section appears in the resolved template.
    pub id: SectionId,
    pub kind: SectionKind,
    pub data: SectionData,
    /// The concrete section the content ultimately comes from.
    pub origin: SectionRef,
}

/// An inheritance-free section list for one template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLayout {
    pub template: TemplateId,
    /// Catalog generation the layout was resolved against.
    pub generation: u64,
    pub paper: PaperSpec,
    pub sections: Vec<ResolvedSection>,
}

/// Resolves `template` against one catalog snapshot, without any caching
/// beyond the current run.
pub fn resolve_in(catalog: &Catalog, template: &TemplateId) -> Result<ResolvedLayout, ResolveError> {
    let definition = catalog
        .get(template)
        .ok_or_else(|| ResolveError::NotFound(template.clone()))?;

    let mut run = ResolutionRun { catalog, memo: HashMap::new(), path: Vec::new() };
    let sections = definition
        .layout
        .sections
        .iter()
        .map(|section| run.section(&SectionRef::new(template.clone(), section.id.clone()), None))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedLayout {
        template: template.clone(),
        generation: catalog.generation(),
        paper: definition.layout.paper.clone(),
        sections,
    })
}

struct ResolutionRun<'a> {
    catalog: &'a Catalog,
    memo: HashMap<SectionRef, ResolvedSection>,
    path: Vec<SectionRef>,
}

impl ResolutionRun<'_> {
    fn section(
        &mut self,
        key: &SectionRef,
        referenced_by: Option<&SectionRef>,
    ) -> Result<ResolvedSection, ResolveError> {
        if let Some(done) = self.memo.get(key) {
            return Ok(done.clone());
        }
        if let Some(start) = self.path.iter().position(|p| p == key) {
            let mut cycle = self.path[start..].to_vec();
            cycle.push(key.clone());
            return Err(ResolveError::CyclicInheritance { cycle });
        }

        let unresolved = |missing| ResolveError::UnresolvedReference {
            reference: key.clone(),
            referenced_by: referenced_by.cloned().unwrap_or_else(|| key.clone()),
            missing,
        };
        let catalog = self.catalog;
        let definition = catalog
            .get(&key.template)
            .ok_or_else(|| unresolved(MissingPart::Template))?;
        let spec = definition
            .section(&key.section)
            .ok_or_else(|| unresolved(MissingPart::Section))?;

        self.path.push(key.clone());
        let resolved = match &spec.body {
            SectionBody::Concrete { kind, data } => ResolvedSection {
                id: key.section.clone(),
                kind: *kind,
                data: data.clone(),
                origin: key.clone(),
            },
            SectionBody::Inherited { from, overrides } => {
                let mut base = self.section(from, Some(key))?;
                base.id = key.section.clone();
                for (field, value) in overrides {
                    base.data.insert(field.clone(), value.clone());
                }
                base
            }
        };
        self.path.pop();

        self.memo.insert(key.clone(), resolved.clone());
        Ok(resolved)
    }
}
