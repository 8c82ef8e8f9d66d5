//! State shared by commands that talk to the interpreter.

use std::path::{Path, PathBuf};

use crate::config::{load_config, validate, NbenvConfig, PackageSpec};
use crate::error::Result;
use crate::process::execute_check;
use crate::runtime::PythonRuntime;
use crate::ui::{OutputMode, UserInterface};

/// Project location and global overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Project root; relative paths in config resolve against it.
    pub project_root: PathBuf,

    /// Explicit config file (`--config`).
    pub config_path: Option<PathBuf>,

    /// Interpreter override (`--python` / `NBENV_PYTHON`).
    pub python: Option<String>,

    /// Configuration already loaded by [`CommandContext::preload`].
    loaded: Option<NbenvConfig>,
}

impl CommandContext {
    /// Create a context for `project_root` with no overrides.
    ///
    /// A relative root is made absolute against the working directory, since
    /// the interpreter runs with the project root as its own working
    /// directory.
    pub fn new(project_root: &Path) -> Self {
        let project_root = std::path::absolute(project_root).unwrap_or_else(|e| {
            tracing::debug!("Could not absolutize {}: {}", project_root.display(), e);
            project_root.to_path_buf()
        });

        Self {
            project_root,
            ..Default::default()
        }
    }

    /// Use `path` instead of the project's config file.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Override the configured interpreter.
    pub fn with_python(mut self, python: Option<String>) -> Self {
        self.python = python;
        self
    }

    /// Load configuration and apply command-line overrides.
    ///
    /// The overridden configuration is validated again, so an empty
    /// `--python` is a configuration error like an empty `python:` key.
    pub fn load_config(&self) -> Result<NbenvConfig> {
        if let Some(config) = &self.loaded {
            return Ok(config.clone());
        }

        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;
        if let Some(python) = &self.python {
            config.python = python.clone();
            validate(&config)?;
        }
        Ok(config)
    }

    /// Load configuration once and keep it for the command that runs next.
    ///
    /// Returns `None` when loading fails; the command reports the error
    /// when it loads again.
    pub fn preload(&mut self) -> Option<&NbenvConfig> {
        match self.load_config() {
            Ok(config) => {
                self.loaded = Some(config);
                self.loaded.as_ref()
            }
            Err(e) => {
                tracing::debug!("Config not preloaded: {}", e);
                None
            }
        }
    }

    /// Load configuration and the packages a command works on.
    pub fn load_packages(
        &self,
        cli_packages: &[String],
    ) -> Result<(NbenvConfig, Vec<PackageSpec>)> {
        let config = self.load_config()?;
        let packages = select_packages(cli_packages, &config)?;
        Ok((config, packages))
    }

    /// Build the runtime for `config`. Verbose mode streams package
    /// manager output.
    pub fn runtime(&self, config: &NbenvConfig, mode: OutputMode) -> PythonRuntime {
        PythonRuntime::from_config(config, &self.project_root)
            .with_streaming(mode.shows_command_output())
    }

    /// Warn when the configured interpreter cannot be started at all, so
    /// the per-package failures that follow have an obvious cause.
    pub fn warn_if_interpreter_missing(&self, config: &NbenvConfig, ui: &mut dyn UserInterface) {
        if !execute_check(&config.python, &["--version".to_string()]) {
            ui.warning(&format!(
                "Python interpreter '{}' could not be started",
                config.python
            ));
        }
    }

    /// Resolve `path` against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

/// Command-line package names if any were given, else the configured list.
///
/// # Errors
///
/// Returns `ConfigValidationError` if a command-line name is empty.
pub fn select_packages(
    cli_packages: &[String],
    config: &NbenvConfig,
) -> Result<Vec<PackageSpec>> {
    if cli_packages.is_empty() {
        return Ok(config.packages.clone());
    }

    let packages: Vec<PackageSpec> = cli_packages
        .iter()
        .map(|name| {
            // Keep a configured module mapping for a package named again on
            // the command line.
            config
                .packages
                .iter()
                .find(|p| &p.name == name)
                .cloned()
                .unwrap_or_else(|| PackageSpec::new(name.as_str()))
        })
        .collect();

    validate(&NbenvConfig {
        packages: packages.clone(),
        ..config.clone()
    })?;

    Ok(packages)
}
