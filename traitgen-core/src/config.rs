//! Configuration loading from traitgen.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "traitgen.toml";

/// Main configuration structure for traitgen.toml.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TraitgenConfig {
    /// Namespace of generated units.
    pub namespace: Option<String>,
    /// Method names never transcribed (merged with CLI flags).
    pub blacklist: Option<Vec<String>>,
    /// Files or directories scanned for PHP sources.
    pub sources: Option<Vec<PathBuf>>,
    /// Extra directory names pruned while scanning.
    pub exclude_dirs: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output configuration.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving `<UnitName>.php` files.
    pub directory: Option<PathBuf>,
    /// Output format: "php" or "json".
    pub format: Option<String>,
}

impl TraitgenConfig {
    /// Whether JSON output was requested.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

/// Loads configuration from `root/traitgen.toml` if it exists.
pub fn load_config(root: &Path) -> Result<Option<TraitgenConfig>> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Loads configuration from an explicit file.
pub fn load_config_file(path: &Path) -> Result<TraitgenConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let cfg = toml::from_str(&content)
        .with_context(|| format!("Invalid {}", path.display()))?;
    Ok(cfg)
}
