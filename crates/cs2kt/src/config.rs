//! Table configuration.
//!
//! Extra type mappings can be supplied as TOML and are layered over the
//! built-in tables. User entries win.
//!
//! Example `cs2kt.toml`:
//! ```toml
//! [names]
//! DateTime = "LocalDateTime"
//! Int64 = "Long"
//!
//! [generics]
//! Dictionary = "MutableMap"
//! ```

use crate::tables::TypeTables;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Error loading table configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid table config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Extra entries for the name and generic container tables.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TablesConfig {
    /// Plain and primitive type names (`Int64 = "Long"`).
    pub names: HashMap<String, String>,
    /// Generic container names (`Dictionary = "MutableMap"`).
    pub generics: HashMap<String, String>,
}

impl TablesConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            names = config.names.len(),
            generics = config.generics.len(),
            "loaded table config"
        );
        Ok(config)
    }
}

impl TypeTables {
    /// Built-in tables with `config` layered on top.
    pub fn from_config(config: &TablesConfig) -> Self {
        let mut tables = Self::new();
        tables.names.extend(config.names.clone());
        tables.generics.extend(config.generics.clone());
        tables
    }
}
