use crate::error::BankError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUILTIN_TYPES: &str = include_str!("../../data/types.json");

pub const PLACEHOLDER_TITLE: &str = "Type interpretation in preparation";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tip: String,
}

/// Result of a catalog lookup. Codes without an entry resolve to
/// [`Descriptor::Placeholder`] rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor<'a> {
    Found(&'a TypeDescriptor),
    Placeholder,
}

impl Descriptor<'_> {
    pub fn title(&self) -> &str {
        match self {
            Self::Found(found) => &found.title,
            Self::Placeholder => PLACEHOLDER_TITLE,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            Self::Found(found) => &found.summary,
            Self::Placeholder => "",
        }
    }

    pub fn tip(&self) -> &str {
        match self {
            Self::Found(found) => &found.tip,
            Self::Placeholder => "",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Static mapping from four-letter code to display content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCatalog {
    entries: BTreeMap<String, TypeDescriptor>,
}

impl TypeCatalog {
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_TYPES)
    }

    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        serde_json::from_str(raw).map_err(|source| BankError::Parse {
            what: "type catalog",
            source,
        })
    }

    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, BankError> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                let catalog = Self::from_json(&raw)?;
                tracing::debug!(
                    path = %path.display(),
                    entries = catalog.len(),
                    "loaded type catalog"
                );
                Ok(catalog)
            }
            None => Self::builtin(),
        }
    }

    pub fn lookup(&self, code: &str) -> Descriptor<'_> {
        self.entries
            .get(code)
            .map_or(Descriptor::Placeholder, Descriptor::Found)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_covers_all_sixteen_codes() {
        let catalog = TypeCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 16);
        for e in ['E', 'I'] {
            for s in ['S', 'N'] {
                for t in ['T', 'F'] {
                    for j in ['J', 'P'] {
                        let code: String = [e, s, t, j].iter().collect();
                        assert!(
                            !catalog.lookup(&code).is_placeholder(),
                            "missing descriptor for {code}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn missing_code_yields_placeholder() {
        let catalog = TypeCatalog::builtin().unwrap();
        let descriptor = catalog.lookup("XXXX");
        assert!(descriptor.is_placeholder());
        assert_eq!(descriptor.title(), PLACEHOLDER_TITLE);
        assert_eq!(descriptor.summary(), "");
        assert_eq!(descriptor.tip(), "");
    }

    #[test]
    fn empty_catalog_is_still_total() {
        let catalog = TypeCatalog::default();
        assert_eq!(catalog.lookup("ESTJ"), Descriptor::Placeholder);
    }

    #[test]
    fn summary_and_tip_default_to_empty() {
        let catalog = TypeCatalog::from_json(r#"{"INTP": {"title": "Analyst"}}"#).unwrap();
        let descriptor = catalog.lookup("INTP");
        assert_eq!(descriptor.title(), "Analyst");
        assert_eq!(descriptor.tip(), "");
        assert_eq!(descriptor.summary(), "");
    }
}
