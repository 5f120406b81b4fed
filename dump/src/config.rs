//! Configuration of a dump pass

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_ENV_VAR: &str = "SCHEMA_DUMP_CONFIG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Classes whose fields are all visible even without network annotations.
    /// Covers types known to ship with broken annotations.
    pub always_visible_classes: Vec<String>,

    /// Module suffixes stripped from scope names to build file stems, first match wins
    pub module_suffixes: Vec<String>,

    /// Extension of the written documents, without the dot
    pub extension: String,

    /// Deepest type tree the serializer accepts
    pub max_type_depth: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            always_visible_classes: vec!["ServerAuthoritativeWeaponSlot_t".to_string()],
            module_suffixes: vec![".dll".to_string(), ".so".to_string()],
            extension: "json".to_string(),
            max_type_depth: 64,
        }
    }
}

impl DumpConfig {
    /// Load configuration from environment variable or use defaults
    pub fn from_env() -> Result<Self> {
        if let Ok(config_json) = std::env::var(CONFIG_ENV_VAR) {
            Self::from_json(&config_json)
                .with_context(|| format!("Failed to parse {CONFIG_ENV_VAR}"))
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&config_json).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json(config_json: &str) -> Result<Self> {
        Ok(serde_json::from_str(config_json)?)
    }

    pub fn is_always_visible(&self, class_name: &str) -> bool {
        self.always_visible_classes.iter().any(|c| c == class_name)
    }

    /// Scope name without its module suffix.
    pub fn file_stem<'a>(&self, scope_name: &'a str) -> &'a str {
        self.module_suffixes
            .iter()
            .find_map(|suffix| scope_name.strip_suffix(suffix.as_str()))
            .filter(|stem| !stem.is_empty())
            .unwrap_or(scope_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DumpConfig::default();
        assert!(config.is_always_visible("ServerAuthoritativeWeaponSlot_t"));
        assert!(!config.is_always_visible("CBaseEntity"));
        assert_eq!(config.extension, "json");
        assert_eq!(config.max_type_depth, 64);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            DumpConfig::from_json(r#"{"always_visible_classes": ["CWeirdType"]}"#).unwrap();
        assert!(config.is_always_visible("CWeirdType"));
        assert!(!config.is_always_visible("ServerAuthoritativeWeaponSlot_t"));
        assert_eq!(config.module_suffixes, vec![".dll", ".so"]);
        assert_eq!(config.extension, "json");
    }

    #[test]
    fn test_malformed_json() {
        assert!(DumpConfig::from_json("{not json").is_err());
        assert!(DumpConfig::from_json(r#"{"max_type_depth": "deep"}"#).is_err());
    }

    #[test]
    fn test_file_stem() {
        let config = DumpConfig::default();
        assert_eq!(config.file_stem("client.dll"), "client");
        assert_eq!(config.file_stem("libserver.so"), "libserver");
        assert_eq!(config.file_stem("GlobalTypes"), "GlobalTypes");
        assert_eq!(config.file_stem("my.dll.backup"), "my.dll.backup");
        assert_eq!(config.file_stem(".dll"), ".dll");
    }
}
