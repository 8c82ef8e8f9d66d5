//! Install command implementation.
//!
//! The `nbenv install` command installs every package that does not
//! import yet.

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::installer::install_all;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    context: CommandContext,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(context: CommandContext, args: InstallArgs) -> Self {
        Self { context, args }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (config, packages) = match self.context.load_packages(&self.args.packages) {
            Ok(loaded) => loaded,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let runtime = self.context.runtime(&config, ui.output_mode());
        self.context.warn_if_interpreter_missing(&config, ui);

        let report = install_all(&runtime, &packages, ui);

        if self.args.strict && !report.all_ok() {
            ui.error(&format!(
                "{} of {} packages unavailable: {}",
                report.failed.len(),
                report.total(),
                report.failed.join(", ")
            ));
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}
