//! Check command implementation.
//!
//! The `nbenv check` command reports which packages import, without
//! installing anything.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::installer::check_all;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CheckCommand {
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

        let report = check_all(&runtime, &packages, ui);
        ui.message(&format!(
            "{} of {} packages installed",
            report.ok.len(),
            report.total()
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_packages_still_exit_zero() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("nbenv.yml"),
            "python: definitely-not-a-python-xyz\npackages: [pandas, nltk]\n",
        )
        .unwrap();
        let cmd = CheckCommand::new(CommandContext::new(temp.path()), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.has_error("pandas is not installed"));
        assert!(ui.has_error("nltk is not installed"));
        assert!(ui.has_message("0 of 2 packages installed"));
    }

    #[test]
    fn unparsable_config_exits_two() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nbenv.yml"), "packages: {{{").unwrap();
        let cmd = CheckCommand::new(CommandContext::new(temp.path()), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Failed to parse config"));
    }
}
