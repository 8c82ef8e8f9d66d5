//! Access to the notebook's Python interpreter and package manager.
//!
//! Both the installer and the smoke tester only ever talk to the host
//! through [`Runtime`], so they can be exercised against [`FakeRuntime`]
//! without a real Python installation.
//!
//! # Example
//!
//! ```no_run
//! use nbenv::runtime::{PythonRuntime, Runtime};
//!
//! let runtime = PythonRuntime::new("python3");
//! let result = runtime.run_python("import sys; print(sys.version)", &[]).unwrap();
//! println!("{}", result.stdout);
//! ```

pub mod fake;

pub use fake::FakeRuntime;

use std::path::{Path, PathBuf};

use crate::config::NbenvConfig;
use crate::error::Result;
use crate::process::{execute, CommandOptions, CommandResult};

/// Imports the module named by the first argument and prints its
/// `__version__`. The name travels as an argument, never as code.
pub const IMPORT_CHECK: &str = "\
import importlib, sys
module = importlib.import_module(sys.argv[1])
print(getattr(module, \"__version__\", \"unknown\"))
";

/// Host operations used by the installer and smoke tester.
///
/// Implementations return `Err` only when a process cannot be started;
/// a process that runs and exits non-zero is an `Ok` result with
/// `success == false`.
pub trait Runtime {
    /// Run `<python> -c <code> <args...>` with captured output.
    fn run_python(&self, code: &str, args: &[&str]) -> Result<CommandResult>;

    /// Run the package manager command followed by `args`.
    fn run_package_manager(&self, args: &[&str]) -> Result<CommandResult>;
}

/// [`Runtime`] backed by real subprocesses.
#[derive(Debug, Clone)]
pub struct PythonRuntime {
    python: String,
    package_manager: Vec<String>,
    cwd: Option<PathBuf>,
    stream_output: bool,
}

impl PythonRuntime {
    /// Use `python` as interpreter and `<python> -m pip` as package manager.
    pub fn new(python: impl Into<String>) -> Self {
        let python = python.into();
        let package_manager = vec![python.clone(), "-m".to_string(), "pip".to_string()];
        Self {
            python,
            package_manager,
            cwd: None,
            stream_output: false,
        }
    }

    /// Build a runtime from loaded configuration, running in `cwd`.
    pub fn from_config(config: &NbenvConfig, cwd: &Path) -> Self {
        Self::new(config.python.clone())
            .with_package_manager(config.package_manager_command())
            .with_cwd(cwd)
    }

    /// Replace the package manager command.
    pub fn with_package_manager(mut self, command: Vec<String>) -> Self {
        self.package_manager = command;
        self
    }

    /// Run every process in `cwd`.
    pub fn with_cwd(mut self, cwd: &Path) -> Self {
        self.cwd = Some(cwd.to_path_buf());
        self
    }

    /// Let package manager output through to the terminal instead of
    /// capturing it.
    pub fn with_streaming(mut self, stream: bool) -> Self {
        self.stream_output = stream;
        self
    }

    /// The interpreter program.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// The package manager argv prefix.
    pub fn package_manager(&self) -> &[String] {
        &self.package_manager
    }

    fn options(&self, capture: bool) -> CommandOptions {
        let mut options = CommandOptions {
            cwd: self.cwd.clone(),
            capture_stdout: capture,
            capture_stderr: capture,
            ..Default::default()
        };
        // Headless: never try to open a display from matplotlib.
        options
            .env
            .insert("MPLBACKEND".to_string(), "Agg".to_string());
        options
    }
}

impl Runtime for PythonRuntime {
    fn run_python(&self, code: &str, args: &[&str]) -> Result<CommandResult> {
        let mut argv = vec!["-c".to_string(), code.to_string()];
        argv.extend(args.iter().map(|a| a.to_string()));
        execute(&self.python, &argv, &self.options(true))
    }

    fn run_package_manager(&self, args: &[&str]) -> Result<CommandResult> {
        let (program, prefix) = match self.package_manager.split_first() {
            Some(split) => split,
            None => (&self.python, &[][..]),
        };
        let mut argv: Vec<String> = prefix.to_vec();
        argv.extend(args.iter().map(|a| a.to_string()));
        execute(program, &argv, &self.options(!self.stream_output))
    }
}
