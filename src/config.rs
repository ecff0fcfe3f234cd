//! Configuration file support for nac-tco.
//!
//! Provides YAML-based configuration through `nac-tco.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! flags always win over config file values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "nac-tco.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub catalog: Option<String>,
    pub industry: Option<String>,
    pub devices: Option<u32>,
    pub years: Option<u32>,
    pub fte_cost: Option<f64>,
    pub breach_cost: Option<f64>,
    pub vendors: Option<Vec<String>>,
    pub exclude_vendors: Option<Vec<String>>,
    pub baseline: Option<String>,
    pub fallback_profile: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

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
    if let Some(devices) = config.devices {
        if devices == 0 {
            bail!(
                "Invalid config: devices must be greater than zero.\n\n\
                 💡 Hint: Set a positive device count or remove the field to use the default."
            );
        }
    }
    if let Some(years) = config.years {
        if years == 0 {
            bail!(
                "Invalid config: years must be greater than zero.\n\n\
                 💡 Hint: Set a positive analysis period or remove the field to use the default."
            );
        }
    }
    if let Some(ref vendors) = config.vendors {
        for (i, vendor) in vendors.iter().enumerate() {
            if vendor.trim().is_empty() {
                bail!(
                    "Invalid config: vendors[{}] must not be empty.\n\n\
                     💡 Hint: Each vendors entry must be a vendor id from the catalog.",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
