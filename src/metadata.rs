//! Template descriptor (`meta.json`) loading.
//!
//! Descriptors are cosmetic: a missing, unreadable or malformed file
//! yields [`Metadata::default`] and is never reported as an error.

use crate::constants::META_FILE;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Display information about a template.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Human readable template name
    pub name: Option<String>,
    pub description: Option<String>,
    pub features: Vec<String>,
    /// Technology label to value, kept in descriptor order
    pub tech_stack: IndexMap<String, String>,
}

/// Descriptor as written on disk; each field is checked on its own.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMetadata {
    name: Value,
    description: Value,
    features: Value,
    #[serde(rename = "techStack")]
    tech_stack: Value,
}

impl From<RawMetadata> for Metadata {
    fn from(raw: RawMetadata) -> Self {
        let features = match raw.features {
            Value::Array(items) => items.iter().map(display_value).collect(),
            _ => Vec::new(),
        };
        let tech_stack = match raw.tech_stack {
            Value::Object(entries) => {
                entries.iter().map(|(key, value)| (key.clone(), display_value(value))).collect()
            }
            _ => IndexMap::new(),
        };

        Self {
            name: raw.name.as_str().map(str::to_string),
            description: raw.description.as_str().map(str::to_string),
            features,
            tech_stack,
        }
    }
}

/// Strings are shown as is, any other value as its JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Metadata {
    /// Parses descriptor content.
    ///
    /// Content that is not a JSON object yields the default descriptor.
    /// Within an object, a field of an unexpected type is dropped while
    /// the remaining fields are kept.
    pub fn parse(content: &str) -> Self {
        match serde_json::from_str::<RawMetadata>(content) {
            Ok(raw) => raw.into(),
            Err(e) => {
                debug!("Ignoring malformed descriptor: {}", e);
                Self::default()
            }
        }
    }

    /// Returns the display name, falling back to the template directory name.
    pub fn display_name<'a>(&'a self, template: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => template,
        }
    }

    /// Returns the description if one is set and non-empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Loads the descriptor of the template located at `template_dir`.
pub fn read_metadata<P: AsRef<Path>>(template_dir: P) -> Metadata {
    let meta_path = template_dir.as_ref().join(META_FILE);
    match std::fs::read_to_string(&meta_path) {
        Ok(content) => Metadata::parse(&content),
        Err(e) => {
            debug!("No descriptor at {}: {}", meta_path.display(), e);
            Metadata::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_descriptor() {
        let meta = Metadata::parse(
            r#"{
                "name": "API Clean",
                "description": "REST starter",
                "features": ["auth", "db"],
                "techStack": {"runtime": "bun", "framework": "elysia", "database": "postgres"}
            }"#,
        );

        assert_eq!(meta.display_name("api-clean"), "API Clean");
        assert_eq!(meta.description(), Some("REST starter"));
        assert_eq!(meta.features, vec!["auth", "db"]);
        let keys: Vec<&str> = meta.tech_stack.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["runtime", "framework", "database"]);
    }

    #[test]
    fn test_parse_partial_descriptor() {
        let meta = Metadata::parse(r#"{"description": "only a description"}"#);
        assert_eq!(meta.display_name("spa-basic"), "spa-basic");
        assert!(meta.features.is_empty());
        assert!(meta.tech_stack.is_empty());
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let meta = Metadata::parse(r#"{"name": "X", "version": 3}"#);
        assert_eq!(meta.name.as_deref(), Some("X"));
    }

    #[test]
    fn test_malformed_descriptor_degrades_to_default() {
        assert_eq!(Metadata::parse("{ not json"), Metadata::default());
        assert_eq!(Metadata::parse("[1, 2, 3]"), Metadata::default());
        assert_eq!(Metadata::parse("\"API Clean\""), Metadata::default());
    }

    #[test]
    fn test_non_string_tech_stack_values_are_stringified() {
        let meta = Metadata::parse(
            r#"{"name":"API Clean","description":"REST starter",
                "techStack":{"port":3000,"ssr":false,"runtime":"bun","cache":null}}"#,
        );

        assert_eq!(meta.display_name("api-clean"), "API Clean");
        assert_eq!(meta.description(), Some("REST starter"));
        assert_eq!(meta.tech_stack["port"], "3000");
        assert_eq!(meta.tech_stack["ssr"], "false");
        assert_eq!(meta.tech_stack["runtime"], "bun");
        assert_eq!(meta.tech_stack["cache"], "null");
    }

    #[test]
    fn test_null_features_keep_other_fields() {
        let meta = Metadata::parse(r#"{"name":"API Clean","features":null}"#);
        assert_eq!(meta.name.as_deref(), Some("API Clean"));
        assert!(meta.features.is_empty());
    }

    #[test]
    fn test_non_array_features_are_dropped() {
        let meta = Metadata::parse(r#"{"name":"API Clean","features":"auth"}"#);
        assert_eq!(meta.name.as_deref(), Some("API Clean"));
        assert!(meta.features.is_empty());
    }

    #[test]
    fn test_feature_items_are_displayed() {
        let meta = Metadata::parse(r#"{"features":["auth", 2, true]}"#);
        assert_eq!(meta.features, vec!["auth", "2", "true"]);
    }

    #[test]
    fn test_non_string_name_and_description_are_dropped() {
        let meta = Metadata::parse(
            r#"{"name":42,"description":["x"],"features":["db"],"techStack":"bun"}"#,
        );
        assert_eq!(meta.display_name("api-clean"), "api-clean");
        assert_eq!(meta.description(), None);
        assert_eq!(meta.features, vec!["db"]);
        assert!(meta.tech_stack.is_empty());
    }

    #[test]
    fn test_empty_name_falls_back() {
        let meta = Metadata::parse(r#"{"name": "", "description": ""}"#);
        assert_eq!(meta.display_name("tpl"), "tpl");
        assert_eq!(meta.description(), None);
    }
}
