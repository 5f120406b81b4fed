use crate::{SchemaSystem, TypeScope};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Captured copy of a host's reflection tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    #[serde(default)]
    pub scopes: Vec<TypeScope>,
    pub global: TypeScope,
}

impl SchemaSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "parsing schema snapshot")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading schema snapshot {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("loading {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "serializing schema snapshot")
    }
}

impl SchemaSystem for SchemaSnapshot {
    fn type_scopes(&self) -> Result<Vec<&TypeScope>> {
        Ok(self.scopes.iter().collect())
    }

    fn global_scope(&self) -> Result<&TypeScope> {
        Ok(&self.global)
    }
}
