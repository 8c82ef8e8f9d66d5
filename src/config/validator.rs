//! Configuration validation rules.
//!
//! - Package names and module names must be non-empty
//! - The interpreter and package manager commands must be non-empty
//! - The smoke plot needs a path and a positive DPI

use crate::config::schema::NbenvConfig;
use crate::error::{NbenvError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Package name if error is package-specific
    pub package: Option<String>,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
            package: None,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &NbenvConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_commands(config));
    errors.extend(validate_packages(config));
    errors.extend(validate_smoke(config));

    errors
}

fn validate_commands(config: &NbenvConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.python.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-python",
            "'python' must name an interpreter",
        ));
    }

    if let Some(cmd) = &config.package_manager {
        if cmd.first().is_none_or(|program| program.trim().is_empty()) {
            errors.push(ValidationError::new(
                "empty-package-manager",
                "'package_manager' must start with a program name",
            ));
        }
    }

    errors
}

fn validate_packages(config: &NbenvConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, package) in config.packages.iter().enumerate() {
        if package.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-package-name",
                format!("Package #{} has an empty name", index + 1),
            ));
            continue;
        }

        if package.module.as_deref().is_some_and(|m| m.trim().is_empty()) {
            errors.push(ValidationError {
                package: Some(package.name.clone()),
                ..ValidationError::new(
                    "empty-module-name",
                    format!("Package '{}' has an empty module name", package.name),
                )
            });
        }
    }

    errors
}

fn validate_smoke(config: &NbenvConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.smoke.plot_path.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "empty-plot-path",
            "'smoke.plot_path' must not be empty",
        ));
    }

    if config.smoke.dpi == 0 {
        errors.push(ValidationError::new(
            "zero-dpi",
            "'smoke.dpi' must be greater than zero",
        ));
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &NbenvConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(NbenvError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
