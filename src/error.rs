//! Error types for nbenv operations.
//!
//! This module defines [`NbenvError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Package checks, installs and smoke checks collapse their failures into
//!   `bool` outcomes at the point where they happen; they never surface here
//! - Use `NbenvError` for infrastructure failures (config, process spawning)
//! - Use `anyhow::Error` (via `NbenvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nbenv operations.
#[derive(Debug, Error)]
pub enum NbenvError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A process could not be spawned or waited on.
    #[error("Failed to run '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NbenvError {
    /// Whether this error comes from loading or validating configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for nbenv operations.
pub type Result<T> = std::result::Result<T, NbenvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = NbenvError::ConfigNotFound {
            path: PathBuf::from("/foo/nbenv.yml"),
        };
        assert!(err.to_string().contains("/foo/nbenv.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = NbenvError::ConfigParseError {
            path: PathBuf::from("/nbenv.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nbenv.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = NbenvError::ConfigValidationError {
            message: "package name must not be empty".into(),
        };
        assert!(err.to_string().contains("package name must not be empty"));
    }

    #[test]
    fn spawn_failed_displays_command_and_message() {
        let err = NbenvError::SpawnFailed {
            command: "python3 -m pip install pandas".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3 -m pip install pandas"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: NbenvError = io_err.into();
        assert!(matches!(err, NbenvError::Io(_)));
        assert!(!err.is_config_error());
    }

    #[test]
    fn config_errors_are_classified() {
        assert!(NbenvError::ConfigNotFound {
            path: PathBuf::from("x")
        }
        .is_config_error());
        assert!(NbenvError::ConfigValidationError {
            message: "bad".into()
        }
        .is_config_error());
        assert!(!NbenvError::SpawnFailed {
            command: "pip".into(),
            message: "gone".into()
        }
        .is_config_error());
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(NbenvError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
