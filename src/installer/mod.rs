//! On-demand package installation.
//!
//! Each package is checked by importing its module in the notebook's
//! interpreter; only packages that fail to import are handed to the
//! package manager. Every failure is reported and collapsed to `false`
//! right where it happens, and a failing package never stops the run.
//!
//! # Example
//!
//! ```
//! use nbenv::config::PackageSpec;
//! use nbenv::installer::install_if_needed;
//! use nbenv::runtime::FakeRuntime;
//! use nbenv::ui::MockUI;
//!
//! let runtime = FakeRuntime::new().with_module("os");
//! let mut ui = MockUI::new();
//!
//! assert!(install_if_needed(&runtime, &PackageSpec::new("os"), &mut ui));
//! assert!(runtime.install_calls().is_empty());
//! ```

pub mod report;

pub use report::PackageReport;

use crate::config::PackageSpec;
use crate::runtime::{Runtime, IMPORT_CHECK};
use crate::ui::UserInterface;

/// Check whether `package` is importable.
///
/// Never fails: an import error, a non-zero exit or an interpreter that
/// cannot be started all count as "not installed".
pub fn check_package(
    runtime: &dyn Runtime,
    package: &PackageSpec,
    ui: &mut dyn UserInterface,
) -> bool {
    let module = package.module();

    match runtime.run_python(IMPORT_CHECK, &[module]) {
        Ok(result) if result.success => {
            tracing::debug!(
                "Module '{}' imports (version {})",
                module,
                result.stdout.trim()
            );
            ui.success(&format!("{} is already installed", package.name));
            true
        }
        Ok(result) => {
            tracing::debug!(
                "Module '{}' failed to import: {}",
                module,
                result.last_error_line().unwrap_or("no error output")
            );
            ui.error(&format!("{} is not installed", package.name));
            false
        }
        Err(e) => {
            tracing::warn!("Could not check '{}': {}", package.name, e);
            ui.error(&format!("{} is not installed", package.name));
            false
        }
    }
}

/// Install `package` with the package manager (`install <name>`).
///
/// Returns `true` iff the package manager exits 0.
pub fn install_package(
    runtime: &dyn Runtime,
    package: &PackageSpec,
    ui: &mut dyn UserInterface,
) -> bool {
    let label = format!("Installing {}...", package.name);

    // Streamed package manager output and a redrawing spinner don't mix.
    let mut spinner = if ui.output_mode().shows_command_output() {
        ui.message(&label);
        None
    } else {
        Some(ui.start_spinner(&label))
    };

    let outcome = runtime.run_package_manager(&["install", package.name.as_str()]);

    if let Some(spinner) = spinner.as_mut() {
        spinner.finish_and_clear();
    }

    match outcome {
        Ok(result) if result.success => {
            ui.success(&format!("Successfully installed {}", package.name));
            true
        }
        Ok(result) => {
            tracing::debug!(
                "Package manager exited with {:?} for '{}'",
                result.exit_code,
                package.name
            );
            ui.error(&format!("Failed to install {}", package.name));
            if let Some(line) = result.last_error_line() {
                ui.message(&format!("  {}", line));
            }
            false
        }
        Err(e) => {
            tracing::warn!("Could not run package manager for '{}': {}", package.name, e);
            ui.error(&format!("Failed to install {}", package.name));
            false
        }
    }
}

/// Install `package` only if it is not already importable.
pub fn install_if_needed(
    runtime: &dyn Runtime,
    package: &PackageSpec,
    ui: &mut dyn UserInterface,
) -> bool {
    if check_package(runtime, package, ui) {
        return true;
    }
    install_package(runtime, package, ui)
}

/// Run [`install_if_needed`] over `packages` in order.
///
/// Failures do not stop the run. The returned report is informational;
/// callers decide whether failures matter.
pub fn install_all(
    runtime: &dyn Runtime,
    packages: &[PackageSpec],
    ui: &mut dyn UserInterface,
) -> PackageReport {
    ui.message("Installing packages...");

    let mut report = PackageReport::default();
    for package in packages {
        let ok = install_if_needed(runtime, package, ui);
        report.record(&package.name, ok);
    }

    ui.message("Done!");
    tracing::debug!(
        "Install run finished: {} ok, {} failed",
        report.ok.len(),
        report.failed.len()
    );
    report
}

/// Run [`check_package`] over `packages` without installing anything.
pub fn check_all(
    runtime: &dyn Runtime,
    packages: &[PackageSpec],
    ui: &mut dyn UserInterface,
) -> PackageReport {
    let mut report = PackageReport::default();
    for package in packages {
        let ok = check_package(runtime, package, ui);
        report.record(&package.name, ok);
    }
    report
}
