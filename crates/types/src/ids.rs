//! Newtype wrappers for template and section identifiers
//!
//! Template ids and section ids are both plain strings in the authoring format.
//! Keeping them as distinct types stops a section id from being looked up in the
//! template catalog (and vice versa).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(id: impl Into<Arc<str>>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.into())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a template definition, e.g. `GST_TABULAR_A4A5_V1`.
    TemplateId
);

string_id!(
    /// Identifier of a section inside one template's layout, e.g. `header`.
    SectionId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_template_id_creation() {
        let id1 = TemplateId::new("GST_TABULAR_A4A5_V1");
        let id2 = TemplateId::from("GST_TABULAR_A4A5_V1");
        let id3 = TemplateId::from(String::from("GST_TABULAR_A4A5_V1"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "GST_TABULAR_A4A5_V1");
        assert_eq!(id1.to_string(), "GST_TABULAR_A4A5_V1");
    }

    #[test]
    fn test_pair_keys_in_map() {
        let mut seen = HashMap::new();
        seen.insert((TemplateId::new("A"), SectionId::new("header")), 1);
        seen.insert((TemplateId::new("B"), SectionId::new("header")), 2);

        assert_eq!(seen.get(&(TemplateId::new("A"), SectionId::new("header"))), Some(&1));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = SectionId::new("items");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"items\"");
        let back: SectionId = serde_json::from_str("\"items\"").unwrap();
        assert_eq!(back, id);
    }
}
