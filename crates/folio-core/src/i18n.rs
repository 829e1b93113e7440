//! Translation tables for localized UI strings.

use std::collections::HashMap;

use crate::error::{CoreError, Result};

/// English strings for the `common` namespace, bundled at compile time.
const EN_COMMON: &str = include_str!("../locales/en/common.json");

/// Namespace → key → string lookup table.
///
/// Lookups never fail: a missing namespace or key echoes the key back,
/// so an untranslated string renders as its key instead of breaking
/// the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table preloaded with the bundled default-language strings.
    pub fn bundled() -> Result<Self> {
        let mut table = Self::new();
        table.load_json("common", EN_COMMON)?;
        Ok(table)
    }

    /// Load one namespace from a JSON object of string values.
    ///
    /// Replaces the namespace if it was already loaded.
    pub fn load_json(&mut self, namespace: impl Into<String>, json: &str) -> Result<()> {
        let namespace = namespace.into();
        let strings: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| CoreError::locale(namespace.clone(), e.to_string()))?;
        self.namespaces.insert(namespace, strings);
        Ok(())
    }

    /// Resolve a key within a namespace.
    pub fn resolve(&self, namespace: &str, key: &str) -> String {
        self.namespaces
            .get(namespace)
            .and_then(|strings| strings.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Whether a namespace has been loaded.
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_present_key() {
        let mut table = Translations::new();
        table
            .load_json("common", r#"{"footer-message":"Thanks for reading."}"#)
            .unwrap();
        assert_eq!(table.resolve("common", "footer-message"), "Thanks for reading.");
    }

    #[test]
    fn test_resolve_missing_key_echoes_key() {
        let mut table = Translations::new();
        table.load_json("common", r#"{}"#).unwrap();
        assert_eq!(table.resolve("common", "footer-message"), "footer-message");
    }

    #[test]
    fn test_resolve_missing_namespace_echoes_key() {
        let table = Translations::new();
        assert_eq!(table.resolve("common", "footer-message"), "footer-message");
    }

    #[test]
    fn test_load_json_rejects_malformed_input() {
        let mut table = Translations::new();
        let err = table.load_json("common", "not json").unwrap_err();
        assert!(matches!(err, CoreError::Locale { .. }));
        assert!(!table.has_namespace("common"));
    }

    #[test]
    fn test_bundled_contains_footer_message() {
        let table = Translations::bundled().unwrap();
        assert!(table.has_namespace("common"));
        assert_ne!(table.resolve("common", "footer-message"), "footer-message");
    }
}
