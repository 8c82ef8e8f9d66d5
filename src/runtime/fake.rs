//! In-memory [`Runtime`] for tests.
//!
//! `FakeRuntime` records every call and answers from configured rules:
//!
//! - import checks ([`IMPORT_CHECK`](super::IMPORT_CHECK)) succeed for
//!   modules registered with [`FakeRuntime::with_module`] and print the
//!   registered version
//! - other snippets are matched against [`FakeRuntime::respond`] rules by
//!   substring, first match wins; unmatched snippets exit 1
//! - installs succeed for packages registered with
//!   [`FakeRuntime::with_installable`]
//!
//! # Example
//!
//! ```
//! use nbenv::runtime::{FakeRuntime, Runtime};
//!
//! let runtime = FakeRuntime::new().with_installable("nltk");
//! assert!(runtime.run_package_manager(&["install", "nltk"]).unwrap().success);
//! assert_eq!(runtime.install_calls(), vec!["nltk".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use super::{Runtime, IMPORT_CHECK};
use crate::error::{NbenvError, Result};
use crate::process::CommandResult;

/// A recorded interpreter invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PythonCall {
    /// The `-c` code.
    pub code: String,
    /// Arguments after the code.
    pub args: Vec<String>,
}

/// Recording [`Runtime`] with scripted answers.
#[derive(Debug, Default)]
pub struct FakeRuntime {
    modules: HashMap<String, String>,
    installable: HashSet<String>,
    responses: Vec<(String, CommandResult)>,
    spawn_fails: bool,
    python_calls: RefCell<Vec<PythonCall>>,
    package_manager_calls: RefCell<Vec<Vec<String>>>,
}

impl FakeRuntime {
    /// A runtime where nothing is importable or installable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `module` importable, reporting no version.
    pub fn with_module(self, module: &str) -> Self {
        self.with_module_version(module, "unknown")
    }

    /// Make `module` importable with the given `__version__`.
    pub fn with_module_version(mut self, module: &str, version: &str) -> Self {
        self.modules.insert(module.to_string(), version.to_string());
        self
    }

    /// Make installs of `package` succeed.
    pub fn with_installable(mut self, package: &str) -> Self {
        self.installable.insert(package.to_string());
        self
    }

    /// Answer snippets containing `needle` with `result`.
    pub fn respond(mut self, needle: &str, result: CommandResult) -> Self {
        self.responses.push((needle.to_string(), result));
        self
    }

    /// Make every call fail as if the program could not be started.
    pub fn with_spawn_failure(mut self) -> Self {
        self.spawn_fails = true;
        self
    }

    /// All interpreter invocations, in order.
    pub fn python_calls(&self) -> Vec<PythonCall> {
        self.python_calls.borrow().clone()
    }

    /// All package manager invocations, in order.
    pub fn package_manager_calls(&self) -> Vec<Vec<String>> {
        self.package_manager_calls.borrow().clone()
    }

    /// Package names passed to `install`, in order.
    pub fn install_calls(&self) -> Vec<String> {
        self.package_manager_calls
            .borrow()
            .iter()
            .filter(|args| args.first().map(String::as_str) == Some("install"))
            .filter_map(|args| args.get(1).cloned())
            .collect()
    }

    /// Modules passed to an import check, in order.
    pub fn imported_modules(&self) -> Vec<String> {
        self.python_calls
            .borrow()
            .iter()
            .filter(|call| call.code == IMPORT_CHECK)
            .filter_map(|call| call.args.first().cloned())
            .collect()
    }

    fn spawn_error(&self, command: &str) -> NbenvError {
        NbenvError::SpawnFailed {
            command: command.to_string(),
            message: "No such file or directory (os error 2)".to_string(),
        }
    }
}

/// A successful result with `stdout`.
pub fn ok(stdout: &str) -> CommandResult {
    CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO)
}

/// A failed result (exit 1) with `stderr`.
pub fn failed(stderr: &str) -> CommandResult {
    CommandResult::failure(Some(1), String::new(), stderr.to_string(), Duration::ZERO)
}

impl Runtime for FakeRuntime {
    fn run_python(&self, code: &str, args: &[&str]) -> Result<CommandResult> {
        self.python_calls.borrow_mut().push(PythonCall {
            code: code.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });

        if self.spawn_fails {
            return Err(self.spawn_error("python"));
        }

        if code == IMPORT_CHECK {
            let module = args.first().copied().unwrap_or_default();
            return Ok(match self.modules.get(module) {
                Some(version) => ok(&format!("{}\n", version)),
                None => failed(&format!(
                    "ModuleNotFoundError: No module named '{}'",
                    module
                )),
            });
        }

        let answer = self
            .responses
            .iter()
            .find(|(needle, _)| code.contains(needle.as_str()))
            .map(|(_, result)| result.clone());

        Ok(answer.unwrap_or_else(|| failed("no scripted response")))
    }

    fn run_package_manager(&self, args: &[&str]) -> Result<CommandResult> {
        self.package_manager_calls
            .borrow_mut()
            .push(args.iter().map(|a| a.to_string()).collect());

        if self.spawn_fails {
            return Err(self.spawn_error("pip"));
        }

        let package = args.get(1).copied().unwrap_or_default();
        if args.first() == Some(&"install") && self.installable.contains(package) {
            Ok(ok(&format!("Successfully installed {}", package)))
        } else {
            Ok(failed(&format!(
                "ERROR: No matching distribution found for {}",
                package
            )))
        }
    }
}
