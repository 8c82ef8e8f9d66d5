//! Smoke command implementation.
//!
//! The `nbenv smoke` command runs the scientific stack smoke tests and
//! exits 1 if any stage fails.

use crate::cli::args::SmokeArgs;
use crate::config::SmokeSettings;
use crate::error::Result;
use crate::smoke::run_suite;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The smoke command implementation.
pub struct SmokeCommand {
    context: CommandContext,
    args: SmokeArgs,
}

impl SmokeCommand {
    /// Create a new smoke command.
    pub fn new(context: CommandContext, args: SmokeArgs) -> Self {
        Self { context, args }
    }

    /// Apply command-line overrides to the configured settings and anchor
    /// the plot path at the project root.
    fn settings(&self, configured: &SmokeSettings) -> SmokeSettings {
        let plot_path = self
            .args
            .plot_path
            .as_ref()
            .unwrap_or(&configured.plot_path);

        SmokeSettings {
            plot_path: self.context.resolve(plot_path),
            dpi: self.args.dpi.unwrap_or(configured.dpi),
        }
    }
}

impl Command for SmokeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config() {
            Ok(c) => c,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let settings = self.settings(&config.smoke);
        let runtime = self.context.runtime(&config, ui.output_mode());
        self.context.warn_if_interpreter_missing(&config, ui);
        tracing::debug!(
            "Smoke testing {} (plot: {}, dpi: {})",
            runtime.python(),
            settings.plot_path.display(),
            settings.dpi
        );

        let outcome = run_suite(&runtime, &settings, ui);
        Ok(if outcome.passed() {
            CommandResult::success()
        } else {
            CommandResult::failure(outcome.exit_code())
        })
    }
}
