use gstdoc_template_core::TemplateDefinition;
use gstdoc_types::TemplateId;
use std::collections::HashMap;
use std::sync::Arc;

/// An immutable snapshot of all template definitions.
///
/// Entries are kept in listing order (`sort_order`, then id) and indexed by id.
#[derive(Debug, Default)]
pub struct Catalog {
    generation: u64,
    entries: Vec<Arc<TemplateDefinition>>,
    index: HashMap<TemplateId, usize>,
}

impl Catalog {
    pub(crate) fn build(generation: u64, mut entries: Vec<Arc<TemplateDefinition>>) -> Self {
        entries.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.id.cmp(&b.id)));
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, def)| (def.id.clone(), i))
            .collect();
        Self { generation, entries, index }
    }

    /// Incremented every time the set of definitions changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, id: &TemplateId) -> Option<&Arc<TemplateDefinition>> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub(crate) fn position(&self, id: &TemplateId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn at(&self, position: usize) -> Option<&Arc<TemplateDefinition>> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<TemplateDefinition>> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &TemplateId> {
        self.entries.iter().map(|d| &d.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[Arc<TemplateDefinition>] {
        &self.entries
    }
}
