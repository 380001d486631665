use crate::error::AssemblyError;
use gstdoc_resolver::ResolvedSection;
use gstdoc_types::SectionKind;
use serde_json::Value;

/// Typed reads over a resolved section's free-form `data`.
pub(crate) struct SectionConfig<'a> {
    section: &'a ResolvedSection,
}

impl<'a> SectionConfig<'a> {
    pub fn new(section: &'a ResolvedSection) -> Self {
        Self { section }
    }

    pub fn kind(&self) -> SectionKind {
        self.section.kind
    }

    pub fn invalid(&self, message: impl Into<String>) -> AssemblyError {
        AssemblyError::InvalidSectionData {
            section: self.section.id.clone(),
            message: message.into(),
        }
    }

    /// A list of strings under `key`, or `default` when the key is absent.
    pub fn list_or(&self, key: &str, default: &[&'a str]) -> Result<Vec<&'a str>, AssemblyError> {
        match self.section.data.get(key) {
            None => Ok(default.to_vec()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .ok_or_else(|| self.invalid(format!("'{}' must contain only strings", key)))
                })
                .collect(),
            Some(_) => Err(self.invalid(format!("'{}' must be a list of strings", key))),
        }
    }

    pub fn flag(&self, key: &str, default: bool) -> Result<bool, AssemblyError> {
        match self.section.data.get(key) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.invalid(format!("'{}' must be true or false", key))),
        }
    }

    pub fn text(&self, key: &str) -> Result<Option<&'a str>, AssemblyError> {
        match self.section.data.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.invalid(format!("'{}' must be a string", key))),
        }
    }

    /// The label for `key` from the section's `labels` object, else `default`.
    pub fn label(&self, key: &str, default: &str) -> Result<String, AssemblyError> {
        let Some(labels) = self.section.data.get("labels") else {
            return Ok(default.to_string());
        };
        let Value::Object(labels) = labels else {
            return Err(self.invalid("'labels' must be an object"));
        };
        match labels.get(key) {
            None => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(self.invalid(format!("label for '{}' must be a string", key))),
        }
    }
}
