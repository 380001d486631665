use crate::ResolveError;
use crate::resolve::{ResolvedLayout, resolve_in};
use gstdoc_registry::TemplateRegistry;
use gstdoc_types::TemplateId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Resolves templates from a registry through a shared read-through cache.
///
/// Entries are tagged with the catalog generation they were built from; an
/// entry from an older generation is never returned. Concurrent first
/// resolutions of one template may both compute it, and both results are equal.
#[derive(Debug)]
pub struct Resolver {
    registry: Arc<TemplateRegistry>,
    cache: RwLock<HashMap<TemplateId, Arc<ResolvedLayout>>>,
}

impl Resolver {
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self { registry, cache: RwLock::new(HashMap::new()) }
    }

    pub fn registry(&self) -> &Arc<TemplateRegistry> {
        &self.registry
    }

    pub fn resolve(&self, template: &TemplateId) -> Result<Arc<ResolvedLayout>, ResolveError> {
        let catalog = self.registry.snapshot();
        let generation = catalog.generation();

        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(template)
            .filter(|layout| layout.generation == generation)
        {
            return Ok(Arc::clone(hit));
        }

        let layout = match resolve_in(&catalog, template) {
            Ok(layout) => Arc::new(layout),
            Err(err) => {
                if !matches!(err, ResolveError::NotFound(_)) {
                    log::error!("Template '{}' failed to resolve: {}", template, err);
                }
                return Err(err);
            }
        };
        log::debug!(
            "Resolved template '{}' ({} sections, generation {})",
            template,
            layout.sections.len(),
            generation
        );

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let keep_existing = cache
            .get(template)
            .is_some_and(|existing| existing.generation > generation);
        if !keep_existing {
            cache.insert(template.clone(), Arc::clone(&layout));
        }
        Ok(layout)
    }

    /// Resolves every template in the catalog, returning all failures.
    pub fn preflight(&self) -> Result<usize, Vec<ResolveError>> {
        let catalog = self.registry.snapshot();
        let errors: Vec<_> = catalog
            .ids()
            .filter_map(|id| self.resolve(id).err())
            .collect();
        if errors.is_empty() {
            log::info!("Preflight resolved {} templates", catalog.len());
            Ok(catalog.len())
        } else {
            Err(errors)
        }
    }

    pub fn clear_cache(&self) {
        self.cache.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
