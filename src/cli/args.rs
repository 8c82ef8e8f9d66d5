//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// nbenv - Package bootstrap and smoke tests for notebook environments.
#[derive(Debug, Parser)]
#[command(name = "nbenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (replaces the project's nbenv.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Python interpreter to check and test against
    #[arg(
        long,
        global = true,
        env = "NBENV_PYTHON",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub python: Option<String>,

    /// Show verbose output, including package manager output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install missing packages (default if no command specified)
    Install(InstallArgs),

    /// Report which packages are importable, without installing
    Check(CheckArgs),

    /// Run the NumPy/SciPy/Matplotlib smoke tests
    Smoke(SmokeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Packages to install (overrides the configured list)
    #[arg(value_name = "PACKAGE", value_parser = NonEmptyStringValueParser::new())]
    pub packages: Vec<String>,

    /// Exit non-zero if any package could not be installed
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Packages to check (overrides the configured list)
    #[arg(value_name = "PACKAGE", value_parser = NonEmptyStringValueParser::new())]
    pub packages: Vec<String>,
}

/// Arguments for the `smoke` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SmokeArgs {
    /// Where to write the test plot
    #[arg(long, value_name = "PATH")]
    pub plot_path: Option<PathBuf>,

    /// Resolution of the test plot
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub dpi: Option<u32>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
