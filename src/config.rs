//! Configuration file support for zenq.
//!
//! Provides YAML-based configuration through `zenq.config.yml` files:
//! a default repository id and alternative API roots. Credentials are only
//! read from flags or the environment, never from this file.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::error::ZenqError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "zenq.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repo_id: Option<u64>,
    pub github_api_url: Option<String>,
    pub zenhub_api_url: Option<String>,
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

/// Repository id from the command line (or `ZENQ_REPO_ID`), else the config file.
pub fn resolve_repo_id(cli_repo_id: Option<u64>, config: &ConfigFile) -> Result<u64> {
    cli_repo_id
        .or(config.repo_id)
        .ok_or_else(|| ZenqError::MissingRepoId.into())
}

/// API root from the command line (or environment), else the config file, else `default`.
pub fn resolve_api_url(cli_url: Option<&str>, config_url: Option<&str>, default: &str) -> String {
    cli_url.or(config_url).unwrap_or(default).to_string()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.repo_id == Some(0) {
        return Err(ZenqError::InvalidConfig {
            reason: "repo_id must be a positive repository id.\n\n\
                     💡 Hint: Run `zenq list-repo-ids` to look up the id of your repository."
                .to_string(),
        }
        .into());
    }

    let urls = [
        ("github_api_url", &config.github_api_url),
        ("zenhub_api_url", &config.zenhub_api_url),
    ];
    for (key, url) in urls {
        if let Some(url) = url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ZenqError::InvalidConfig {
                    reason: format!(
                        "{} must start with http:// or https:// (got '{}').",
                        key, url
                    ),
                }
                .into());
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
