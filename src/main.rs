//! nbenv CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use nbenv::cli::{Cli, CommandDispatcher};
use nbenv::config::NbenvConfig;
use nbenv::process::is_ci;
use nbenv::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("nbenv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nbenv=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Flags win; otherwise `settings.output` from config, if it loaded.
fn output_mode(cli: &Cli, config: Option<&NbenvConfig>) -> OutputMode {
    if cli.quiet {
        return OutputMode::Quiet;
    }
    if cli.verbose {
        return OutputMode::Verbose;
    }

    config
        .and_then(|config| config.settings.output)
        .map(OutputMode::from)
        .unwrap_or_default()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("nbenv starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    // A broken config is reported by the command itself.
    let mut dispatcher = CommandDispatcher::new(&project_root, &cli);
    let mode = output_mode(&cli, dispatcher.preload_config());

    let mut ui = create_ui(!is_ci(), mode);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
