use crate::RegistryError;
use crate::catalog::Catalog;
use gstdoc_json_template::builtin_definitions;
use gstdoc_template_core::TemplateDefinition;
use gstdoc_types::TemplateId;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

const NO_DEFAULT: usize = usize::MAX;

/// A listed template together with its live default flag.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    pub definition: Arc<TemplateDefinition>,
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
    Unchanged,
}

/// Thread-safe template catalog.
///
/// Reads take a shared lock on the current catalog snapshot. `set_default` also
/// only needs the shared lock: it validates the id against the snapshot and then
/// swaps the default index, which a concurrent `reload` cannot interleave with.
#[derive(Debug)]
pub struct TemplateRegistry {
    catalog: RwLock<Arc<Catalog>>,
    default: AtomicUsize,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry {
    /// An empty registry with no default.
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Arc::new(Catalog::default())),
            default: AtomicUsize::new(NO_DEFAULT),
        }
    }

    /// A registry loaded with `definitions`; exactly one must be flagged default.
    pub fn from_definitions(definitions: Vec<TemplateDefinition>) -> Result<Self, RegistryError> {
        let registry = Self::new();
        registry.reload(definitions)?;
        Ok(registry)
    }

    /// A registry seeded with the built-in catalog.
    pub fn with_builtin_catalog() -> Result<Self, RegistryError> {
        Self::from_definitions(builtin_definitions()?)
    }

    /// Upserts the built-in catalog. Running it again is a no-op.
    pub fn seed_builtin(&self) -> Result<usize, RegistryError> {
        let mut changed = 0;
        for definition in builtin_definitions()? {
            if self.upsert(definition)? != UpsertOutcome::Unchanged {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// The current catalog snapshot. Holding it does not block writers.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    pub fn generation(&self) -> u64 {
        self.snapshot().generation()
    }

    pub fn get_template(&self, id: &TemplateId) -> Result<Arc<TemplateDefinition>, RegistryError> {
        self.snapshot()
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.clone()))
    }

    /// All templates ordered by `sort_order`, each tagged with the live default flag.
    pub fn list_templates(&self) -> Vec<TemplateEntry> {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        let default = self.default.load(Ordering::Acquire);
        catalog
            .iter()
            .enumerate()
            .map(|(i, def)| TemplateEntry { definition: Arc::clone(def), is_default: i == default })
            .collect()
    }

    pub fn get_default(&self) -> Result<Arc<TemplateDefinition>, RegistryError> {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        let default = self.default.load(Ordering::Acquire);
        match catalog.at(default) {
            Some(def) => Ok(Arc::clone(def)),
            None => {
                log::error!(
                    "Registry has no default template (catalog generation {}, {} templates)",
                    catalog.generation(),
                    catalog.len()
                );
                Err(RegistryError::NoDefaultConfigured)
            }
        }
    }

    /// Makes `id` the default, replacing any previous default in one step.
    pub fn set_default(&self, id: &TemplateId) -> Result<(), RegistryError> {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        let position = catalog
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        let previous = self.default.swap(position, Ordering::AcqRel);
        if previous != position {
            log::info!(
                "Default template changed from {} to '{}'",
                catalog.at(previous).map(|d| d.id.as_str()).unwrap_or("<none>"),
                id
            );
        }
        Ok(())
    }

    /// Inserts or replaces one definition.
    ///
    /// The default is kept on the same template id. If no default exists yet and
    /// the definition carries the seed default flag, it becomes the default.
    pub fn upsert(&self, definition: TemplateDefinition) -> Result<UpsertOutcome, RegistryError> {
        definition.check()?;
        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        let current = Arc::clone(&*guard);

        let outcome = match current.get(&definition.id) {
            Some(existing) if **existing == definition => return Ok(UpsertOutcome::Unchanged),
            Some(_) => UpsertOutcome::Replaced,
            None => UpsertOutcome::Inserted,
        };

        let default_id = current
            .at(self.default.load(Ordering::Acquire))
            .map(|d| d.id.clone());
        let claims_default = definition.is_default;
        let id = definition.id.clone();

        let mut entries: Vec<_> = current
            .entries()
            .iter()
            .filter(|d| d.id != id)
            .cloned()
            .collect();
        entries.push(Arc::new(definition));
        let next = Catalog::build(current.generation() + 1, entries);

        let default_position = match default_id {
            Some(default_id) => next.position(&default_id),
            None if claims_default => next.position(&id),
            None => None,
        };
        self.default.store(default_position.unwrap_or(NO_DEFAULT), Ordering::Release);
        *guard = Arc::new(next);

        log::info!("Template '{}' {:?} (generation {})", id, outcome, guard.generation());
        Ok(outcome)
    }

    /// Replaces the whole catalog. The new default is the single definition
    /// flagged `is_default`.
    pub fn reload(&self, definitions: Vec<TemplateDefinition>) -> Result<(), RegistryError> {
        let mut seen = HashSet::new();
        let mut defaults = Vec::new();
        for definition in &definitions {
            definition.check()?;
            if !seen.insert(definition.id.clone()) {
                return Err(RegistryError::DuplicateTemplate(definition.id.clone()));
            }
            if definition.is_default {
                defaults.push(definition.id.clone());
            }
        }
        let default_id = match defaults.len() {
            0 => return Err(RegistryError::NoDefaultConfigured),
            1 => defaults.remove(0),
            _ => return Err(RegistryError::MultipleDefaults(defaults)),
        };

        let mut guard = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        let next = Catalog::build(
            guard.generation() + 1,
            definitions.into_iter().map(Arc::new).collect(),
        );
        let position = next
            .position(&default_id)
            .ok_or_else(|| RegistryError::NotFound(default_id.clone()))?;
        self.default.store(position, Ordering::Release);
        log::info!(
            "Loaded {} templates (generation {}), default '{}'",
            next.len(),
            next.generation(),
            default_id
        );
        *guard = Arc::new(next);
        Ok(())
    }
}
