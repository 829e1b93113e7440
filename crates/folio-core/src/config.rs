//! Site configuration management.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Site-wide configuration.
///
/// Every field carries a serde default so a partial or missing
/// configuration file still produces a usable site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site title used for the document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: String,

    /// Base URL for the site (e.g., "https://example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default language code.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

impl SiteConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            base_url: default_base_url(),
            default_language: default_language(),
            author: None,
        }
    }
}

fn default_title() -> String {
    "folio".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let raw = r#"
            title = "folio.dev"
            description = "Personal site and blog"
            base_url = "https://folio.dev"
            default_language = "en"
            author = "Alex Novik"
        "#;
        let config = SiteConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.title, "folio.dev");
        assert_eq!(config.base_url, "https://folio.dev");
        assert_eq!(config.author.as_deref(), Some("Alex Novik"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = SiteConfig::from_toml_str(r#"title = "mine""#).unwrap();
        assert_eq!(config.title, "mine");
        assert_eq!(config.default_language, "en");
        assert!(config.author.is_none());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_malformed_config_errors() {
        assert!(SiteConfig::from_toml_str("title = ").is_err());
    }
}
