//! Smoke tests for the scientific stack.
//!
//! Three stages run in order: imports, basic functionality and advanced
//! features. Each stage stops at its first failing check and the suite
//! stops at its first failing stage. Every check runs as its own Python
//! snippet through a [`Runtime`], so a crash in one snippet is just a
//! failed check.

pub mod report;
pub mod snippets;

pub use report::SnippetReport;

use std::fmt;

use crate::config::SmokeSettings;
use crate::runtime::{Runtime, IMPORT_CHECK};
use crate::ui::UserInterface;

/// Banner printed before the stages run.
pub const BANNER: &str = "Testing Scientific Packages";

/// Final line on success.
pub const SUCCESS_BANNER: &str =
    "All tests passed! Your scientific packages are working correctly.";

/// A library exercised by the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Library {
    /// Importable module name.
    pub module: &'static str,
    /// Name shown to the user.
    pub display: &'static str,
    /// What it is for, shown in the closing summary.
    pub purpose: &'static str,
}

/// Libraries checked by [`test_imports`], in import order.
pub const LIBRARIES: [Library; 3] = [
    Library {
        module: "numpy",
        display: "NumPy",
        purpose: "numerical computing",
    },
    Library {
        module: "scipy",
        display: "SciPy",
        purpose: "scientific computing",
    },
    Library {
        module: "matplotlib",
        display: "Matplotlib",
        purpose: "plotting",
    },
];

/// Suite stages, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Imports,
    BasicFunctionality,
    AdvancedFeatures,
}

impl Stage {
    /// All stages in run order.
    pub const ALL: [Stage; 3] = [
        Stage::Imports,
        Stage::BasicFunctionality,
        Stage::AdvancedFeatures,
    ];

    /// Name used in "<label> tests failed!".
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Imports => "Import",
            Stage::BasicFunctionality => "Basic functionality",
            Stage::AdvancedFeatures => "Advanced feature",
        }
    }

    fn run(
        &self,
        runtime: &dyn Runtime,
        settings: &SmokeSettings,
        ui: &mut dyn UserInterface,
    ) -> bool {
        match self {
            Stage::Imports => test_imports(runtime, ui),
            Stage::BasicFunctionality => test_basic_functionality(runtime, settings, ui),
            Stage::AdvancedFeatures => test_advanced_features(runtime, ui),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How a suite run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteOutcome {
    Passed,
    Failed(Stage),
}

impl SuiteOutcome {
    /// Whether every stage passed.
    pub fn passed(&self) -> bool {
        matches!(self, SuiteOutcome::Passed)
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            SuiteOutcome::Passed => 0,
            SuiteOutcome::Failed(_) => 1,
        }
    }
}

/// Import each of [`LIBRARIES`] in order, stopping at the first failure.
pub fn test_imports(runtime: &dyn Runtime, ui: &mut dyn UserInterface) -> bool {
    ui.message("Testing package imports...");

    for library in &LIBRARIES {
        let reason = match runtime.run_python(IMPORT_CHECK, &[library.module]) {
            Ok(result) if result.success => {
                ui.success(&format!(
                    "{} {} imported successfully",
                    library.display,
                    result.stdout.trim()
                ));
                continue;
            }
            Ok(result) => result
                .last_error_line()
                .map(exception_message)
                .unwrap_or("import exited with an error")
                .to_string(),
            Err(e) => e.to_string(),
        };

        ui.error(&format!("{} import failed: {}", library.display, reason));
        return false;
    }

    true
}

/// Array mean, normal fit and a saved plot.
///
/// The plot lands at `settings.plot_path`, overwriting any existing file,
/// and the check only passes if the file exists afterwards.
pub fn test_basic_functionality(
    runtime: &dyn Runtime,
    settings: &SmokeSettings,
    ui: &mut dyn UserInterface,
) -> bool {
    ui.message("Testing basic functionality...");

    let Some(report) = run_check(
        runtime,
        "NumPy array",
        snippets::ARRAY_MEAN,
        &[],
        &["array", "mean"],
        ui,
    ) else {
        return false;
    };
    ui.success(&format!("NumPy array: {}", value(&report, "array")));
    ui.success(&format!("NumPy mean: {}", value(&report, "mean")));

    let Some(report) = run_check(
        runtime,
        "SciPy stats",
        snippets::NORM_FIT,
        &[],
        &["mean", "std"],
        ui,
    ) else {
        return false;
    };
    ui.success(&format!(
        "SciPy stats - mean: {}, std: {}",
        value(&report, "mean"),
        value(&report, "std")
    ));

    let path = settings.plot_path.to_string_lossy().into_owned();
    let dpi = settings.dpi.to_string();
    let args = [path.as_str(), dpi.as_str()];
    if run_check(runtime, "Matplotlib plot", snippets::SAVE_PLOT, &args, &["saved"], ui).is_none() {
        return false;
    }
    if !settings.plot_path.exists() {
        ui.error(&format!(
            "Matplotlib plot failed: {} was not created",
            settings.plot_path.display()
        ));
        return false;
    }
    ui.success(&format!(
        "Matplotlib plot created and saved as '{}'",
        settings.plot_path.display()
    ));

    true
}

/// Numeric optimization and eigenvalues.
pub fn test_advanced_features(runtime: &dyn Runtime, ui: &mut dyn UserInterface) -> bool {
    ui.message("Testing advanced features...");

    let Some(report) = run_check(
        runtime,
        "SciPy optimization",
        snippets::MINIMIZE,
        &[],
        &["x"],
        ui,
    ) else {
        return false;
    };
    ui.success(&format!("SciPy optimization result: {}", value(&report, "x")));

    let Some(report) = run_check(
        runtime,
        "NumPy eigenvalues",
        snippets::EIGENVALUES,
        &[],
        &["eigenvalues"],
        ui,
    ) else {
        return false;
    };
    ui.success(&format!("NumPy eigenvalues: {}", value(&report, "eigenvalues")));

    true
}

/// Run all stages, stopping at the first one that fails.
pub fn run_suite(
    runtime: &dyn Runtime,
    settings: &SmokeSettings,
    ui: &mut dyn UserInterface,
) -> SuiteOutcome {
    ui.show_header(BANNER);

    for stage in Stage::ALL {
        if !stage.run(runtime, settings, ui) {
            tracing::debug!("Smoke stage '{}' failed", stage);
            ui.error(&format!("{} tests failed!", stage));
            return SuiteOutcome::Failed(stage);
        }
    }

    ui.success(SUCCESS_BANNER);
    ui.message("");
    ui.message("You can now use:");
    for library in &LIBRARIES {
        ui.message(&format!("  - {} for {}", library.display, library.purpose));
    }
    ui.message("  - And every other package in your environment");

    SuiteOutcome::Passed
}

/// Run one snippet and require `keys` in its output.
fn run_check(
    runtime: &dyn Runtime,
    label: &str,
    code: &str,
    args: &[&str],
    keys: &[&str],
    ui: &mut dyn UserInterface,
) -> Option<SnippetReport> {
    let failure = match runtime.run_python(code, args) {
        Ok(result) if result.success => {
            let report = SnippetReport::parse(&result.stdout);
            match report.missing(keys) {
                None => return Some(report),
                Some(key) => format!("no '{}' in output", key),
            }
        }
        Ok(result) => result
            .last_error_line()
            .map(exception_message)
            .unwrap_or("snippet exited with an error")
            .to_string(),
        Err(e) => e.to_string(),
    };

    ui.error(&format!("{} failed: {}", label, failure));
    None
}

fn value<'a>(report: &'a SnippetReport, key: &str) -> &'a str {
    report.get(key).unwrap_or_default()
}

/// Strip a leading `SomethingError: ` from a traceback's last line.
fn exception_message(line: &str) -> &str {
    match line.split_once(": ") {
        Some((kind, message)) if kind.ends_with("Error") && !kind.contains(' ') => message,
        _ => line,
    }
}
