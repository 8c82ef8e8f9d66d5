//! nbenv - Package bootstrap and smoke tests for notebook environments.
//!
//! nbenv makes sure a notebook host's Python environment has the packages a
//! project needs, installing only what does not import yet, and smoke tests
//! the scientific stack (NumPy, SciPy, Matplotlib) end to end.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Import checks and on-demand installation
//! - [`process`] - Subprocess execution
//! - [`runtime`] - The interpreter and package manager seam
//! - [`smoke`] - Scientific stack smoke tests
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use nbenv::config::PackageSpec;
//! use nbenv::installer::install_all;
//! use nbenv::runtime::FakeRuntime;
//! use nbenv::ui::MockUI;
//!
//! let runtime = FakeRuntime::new().with_module("os").with_installable("nltk");
//! let mut ui = MockUI::new();
//!
//! let packages = [PackageSpec::new("os"), PackageSpec::new("nltk")];
//! let report = install_all(&runtime, &packages, &mut ui);
//! assert!(report.all_ok());
//! assert_eq!(runtime.install_calls(), vec!["nltk".to_string()]);
//! ```
//!
//! For file-based config loading, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod process;
pub mod runtime;
pub mod smoke;
pub mod ui;

pub use error::{NbenvError, Result};
