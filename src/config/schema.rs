//! Configuration schema definitions for nbenv.
//!
//! This module contains the struct definitions that map to the
//! `nbenv.yml` configuration file format.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Packages installed when neither the config nor the command line names any.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "pandas",
    "matplotlib",
    "seaborn",
    "scikit-learn",
    "requests",
    "beautifulsoup4",
    "nltk",
    "transformers",
    "torch",
    "tensorflow",
];

/// Root configuration structure for nbenv.yml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NbenvConfig {
    /// Python interpreter used for import checks and smoke tests
    pub python: String,

    /// Package manager command; `install <name>` is appended per package.
    /// Defaults to `<python> -m pip`.
    pub package_manager: Option<Vec<String>>,

    /// Ordered install list
    pub packages: Vec<PackageSpec>,

    /// Smoke test settings
    pub smoke: SmokeSettings,

    /// Global settings
    pub settings: Settings,
}

impl Default for NbenvConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            package_manager: None,
            packages: DEFAULT_PACKAGES.iter().map(|n| PackageSpec::new(*n)).collect(),
            smoke: SmokeSettings::default(),
            settings: Settings::default(),
        }
    }
}

impl NbenvConfig {
    /// The package manager argv, falling back to `<python> -m pip`.
    pub fn package_manager_command(&self) -> Vec<String> {
        match &self.package_manager {
            Some(cmd) => cmd.clone(),
            None => vec![self.python.clone(), "-m".to_string(), "pip".to_string()],
        }
    }
}

fn default_python() -> String {
    "python3".to_string()
}

/// A package to install, with the module name used to check for it.
///
/// Written in YAML either as a bare name (`- pandas`) or as a mapping
/// (`- { name: scikit-learn, module: sklearn }`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PackageEntry")]
pub struct PackageSpec {
    /// Name passed to the package manager
    pub name: String,

    /// Import name, when it differs from the package name
    pub module: Option<String>,
}

impl PackageSpec {
    /// A package whose import name equals its package name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
        }
    }

    /// Set the import name.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// The module name to import when checking for this package.
    pub fn module(&self) -> &str {
        self.module.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PackageEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        module: Option<String>,
    },
}

impl From<PackageEntry> for PackageSpec {
    fn from(entry: PackageEntry) -> Self {
        match entry {
            PackageEntry::Name(name) => Self { name, module: None },
            PackageEntry::Detailed { name, module } => Self { name, module },
        }
    }
}

/// Smoke test settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmokeSettings {
    /// Where the test plot is written (relative to the project directory)
    pub plot_path: PathBuf,

    /// Resolution of the saved plot
    pub dpi: u32,
}

impl Default for SmokeSettings {
    fn default() -> Self {
        Self {
            plot_path: PathBuf::from("test_plot.png"),
            dpi: 150,
        }
    }
}

/// Global settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub output: Option<OutputMode>,
}

/// Output verbosity as written in config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}
