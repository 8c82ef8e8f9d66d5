//! Configuration loading, parsing, and validation for nbenv.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layered merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use nbenv::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("custom.yml");
//! fs::write(&path, "packages:\n  - requests\n").unwrap();
//!
//! let config = load_config(temp.path(), Some(&path)).unwrap();
//! assert_eq!(config.packages[0].name, "requests");
//! ```
//!
//! # Configuration File Locations
//!
//! nbenv merges configuration in this order:
//! 1. User global config (`~/.nbenv/config.yml`)
//! 2. Project config (`nbenv.yml`, or the file given with `--config`)
//!
//! Missing files are skipped; with none at all the built-in defaults apply.

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{NbenvConfig, OutputMode, PackageSpec, Settings, SmokeSettings, DEFAULT_PACKAGES};

pub use loader::{
    load_config, load_config_value, load_from_paths, ConfigPaths, PROJECT_CONFIG_FILE,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};
