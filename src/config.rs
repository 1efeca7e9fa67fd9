//! Configuration file support for deptree.
//!
//! Provides YAML-based configuration through `deptree.config.yml` files,
//! including data structures, file loading, and validation. CLI flags
//! always take precedence over config file values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "deptree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub max_workers: Option<usize>,
    pub max_queue_limit: Option<usize>,
    pub timeout_seconds: Option<u64>,
    pub max_dependencies: Option<usize>,
    pub default_depth: Option<u32>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(workers) = config.max_workers {
        if workers == 0 {
            bail!("Invalid config: max_workers must be at least 1.");
        }
    }
    if let Some(limit) = config.max_queue_limit {
        if limit == 0 {
            bail!("Invalid config: max_queue_limit must be at least 1.");
        }
    }
    if let Some(timeout) = config.timeout_seconds {
        if timeout == 0 {
            bail!("Invalid config: timeout_seconds must be at least 1.");
        }
    }
    if let Some(max_deps) = config.max_dependencies {
        if max_deps == 0 {
            bail!("Invalid config: max_dependencies must be at least 1.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
