//! Configuration file discovery and loading.
//!
//! This module finds the config files that apply to a project and
//! loads them in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::NbenvConfig;
use crate::config::validator::validate;
use crate::error::{NbenvError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "nbenv.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.nbenv/config.yml`)
/// 2. Project config (`nbenv.yml`, or the `--config` path)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.nbenv/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Self::find_project_config(project_root),
        }
    }

    /// Discover the global config but use an explicit project config file.
    ///
    /// The override is kept even when it does not exist so that loading
    /// reports it as missing.
    pub fn with_override(config_path: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: Some(config_path.to_path_buf()),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(".nbenv").join("config.yml");
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// Returns all config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Load a config file as raw YAML Value (for merging).
///
/// An empty file loads as an empty mapping.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NbenvError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            NbenvError::Io(e)
        }
    })?;

    let value: Value = serde_yaml::from_str(&content).map_err(|e| NbenvError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if value.is_null() {
        Ok(Value::Mapping(Default::default()))
    } else {
        Ok(value)
    }
}

/// Load, merge and validate the config files in `paths`.
///
/// With no config files at all the built-in defaults are returned.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<NbenvConfig> {
    let mut configs = Vec::new();
    for path in paths.all() {
        tracing::debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);
    let source = paths
        .project
        .clone()
        .or_else(|| paths.user_global.clone())
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));

    let config: NbenvConfig =
        serde_yaml::from_value(merged).map_err(|e| NbenvError::ConfigParseError {
            path: source,
            message: e.to_string(),
        })?;

    validate(&config)?;
    Ok(config)
}

/// Load config with optional path override.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `config_override` names a missing file.
/// Returns `ConfigParseError` if any config file is invalid YAML or has
/// the wrong shape, and `ConfigValidationError` if values are rejected.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<NbenvConfig> {
    let paths = match config_override {
        Some(path) => ConfigPaths::with_override(path),
        None => ConfigPaths::discover(project_root),
    };
    load_from_paths(&paths)
}
