//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::Path;

use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::config::NbenvConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a dispatcher for `project_root` with the global flags of `cli`.
    pub fn new(project_root: &Path, cli: &Cli) -> Self {
        let context = CommandContext::new(project_root)
            .with_config_path(cli.config.clone())
            .with_python(cli.python.clone());
        Self { context }
    }

    /// The context every command is built with.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Load configuration once, before the UI exists, so its output settings
    /// can pick the UI. Commands reuse the loaded configuration.
    pub fn preload_config(&mut self) -> Option<&NbenvConfig> {
        self.context.preload()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. With no subcommand, installs the configured packages.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Smoke(args)) => {
                let cmd = super::smoke::SmokeCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::install::InstallCommand::new(
                    self.context.clone(),
                    InstallArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let cli = Cli::try_parse_from(["nbenv"]).unwrap();
        let dispatcher = CommandDispatcher::new(Path::new("/test"), &cli);
        assert_eq!(dispatcher.context().project_root, PathBuf::from("/test"));
        assert_eq!(dispatcher.context().config_path, None);
    }

    #[test]
    fn context_carries_global_flags() {
        let cli = Cli::try_parse_from([
            "nbenv",
            "--config",
            "/etc/nbenv.yml",
            "--python",
            "python3.12",
            "smoke",
        ])
        .unwrap();
        let dispatcher = CommandDispatcher::new(Path::new("/work"), &cli);

        let context = dispatcher.context();

        assert_eq!(context.project_root, PathBuf::from("/work"));
        assert_eq!(context.config_path, Some(PathBuf::from("/etc/nbenv.yml")));
        assert_eq!(context.python.as_deref(), Some("python3.12"));
    }

    #[test]
    fn preloaded_config_survives_into_the_command() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("nbenv.yml"),
            "python: definitely-not-a-python-xyz\npackages: [xyz]\n",
        )
        .unwrap();
        let cli = Cli::try_parse_from(["nbenv", "install"]).unwrap();
        let mut dispatcher = CommandDispatcher::new(temp.path(), &cli);

        assert!(dispatcher.preload_config().is_some());
        fs::remove_file(temp.path().join("nbenv.yml")).unwrap();

        let mut ui = crate::ui::MockUI::new();
        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.has_error("Failed to install xyz"));
    }
}
