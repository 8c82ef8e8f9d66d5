//! Integration tests for the nbenv binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Isolated invocation: no user config, no inherited interpreter override.
fn nbenv(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("nbenv"));
    cmd.current_dir(project.path())
        .env("HOME", project.path())
        .env_remove("NBENV_PYTHON")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nbenv(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("notebook environments"))
        .stdout(predicate::str::contains("smoke"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nbenv(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nbenv(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nbenv"));
    Ok(())
}

#[test]
fn missing_explicit_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nbenv(&temp)
        .args(["--config", "missing.yml", "install"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("nbenv.yml"), "smoke:\n  dpi: 0\n")?;
    nbenv(&temp)
        .arg("smoke")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn unparsable_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("nbenv.yml"), "packages: {{{\n")?;
    nbenv(&temp)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn missing_interpreter_is_reported_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    nbenv(&temp)
        .args(["--python", "definitely-not-a-python-xyz", "install", "pandas"])
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be started"))
        .stderr(predicate::str::contains("Failed to install pandas"))
        .stdout(predicate::str::contains("Done!"));
    Ok(())
}

#[cfg(unix)]
mod fake_python {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Stands in for both the interpreter and `python -m pip`.
    ///
    /// - `FAKE_MODULES`: space-separated importable modules
    /// - `FAKE_INSTALLABLE`: space-separated packages pip can install
    /// - `FAKE_LOG`: file receiving one line per pip invocation
    const SCRIPT: &str = r#"#!/bin/sh
case "$1" in
  --version)
    echo "Python 3.11.9"
    ;;
  -m)
    shift 2
    echo "$*" >> "${FAKE_LOG:-/dev/null}"
    case " $FAKE_INSTALLABLE " in
      *" $2 "*) echo "Successfully installed $2"; exit 0 ;;
    esac
    echo "ERROR: No matching distribution found for $2" >&2
    exit 1
    ;;
  -c)
    code="$2"
    shift 2
    case "$code" in
      *import_module*)
        case " $FAKE_MODULES " in
          *" $1 "*) echo "1.0.0"; exit 0 ;;
        esac
        echo "Traceback (most recent call last):" >&2
        echo "ModuleNotFoundError: No module named '$1'" >&2
        exit 1
        ;;
      *np.mean*) echo "array=[1 2 3 4 5]"; echo "mean=3.0" ;;
      *stats.norm.fit*) echo "mean=3.00"; echo "std=1.41" ;;
      *savefig*) : > "$1"; echo "saved=$1" ;;
      *optimize.minimize*) echo "x=[0.99999999 2.00000001]" ;;
      *linalg.eigvals*) echo "eigenvalues=[ 1.52 -0.21  0.33]" ;;
      *) exit 1 ;;
    esac
    ;;
  *)
    exit 2
    ;;
esac
"#;

    struct Project {
        dir: TempDir,
        python: PathBuf,
    }

    impl Project {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let python = dir.path().join("fake-python");
            fs::write(&python, SCRIPT).unwrap();
            fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();
            Self { dir, python }
        }

        fn with_config(self, yaml: &str) -> Self {
            fs::write(self.dir.path().join("nbenv.yml"), yaml).unwrap();
            self
        }

        fn log(&self) -> PathBuf {
            self.dir.path().join("pip.log")
        }

        fn pip_calls(&self) -> Vec<String> {
            fs::read_to_string(self.log())
                .unwrap_or_default()
                .lines()
                .map(str::to_string)
                .collect()
        }

        fn cmd(&self, modules: &str, installable: &str) -> Command {
            let mut cmd = nbenv(&self.dir);
            cmd.env("FAKE_MODULES", modules)
                .env("FAKE_INSTALLABLE", installable)
                .env("FAKE_LOG", self.log())
                .arg("--python")
                .arg(&self.python);
            cmd
        }
    }

    #[test]
    fn already_present_package_is_not_installed() {
        let project = Project::new();

        project
            .cmd("os", "")
            .args(["install", "os"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Installing packages..."))
            .stdout(predicate::str::contains("✓ os is already installed"))
            .stdout(predicate::str::contains("Done!"));

        assert!(project.pip_calls().is_empty());
    }

    #[test]
    fn failed_install_does_not_stop_the_run() {
        let project = Project::new();

        project
            .cmd("os", "")
            .args(["install", "definitely_not_a_real_package_xyz", "os"])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "✗ Failed to install definitely_not_a_real_package_xyz",
            ))
            .stderr(predicate::str::contains("No matching distribution found"))
            .stdout(predicate::str::contains("✓ os is already installed"))
            .stdout(predicate::str::contains("Done!"));

        assert_eq!(
            project.pip_calls(),
            vec!["install definitely_not_a_real_package_xyz"]
        );
    }

    #[test]
    fn strict_install_exits_one_on_failure() {
        let project = Project::new();

        project
            .cmd("", "")
            .args(["install", "--strict", "xyz"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("1 of 1 packages unavailable: xyz"));
    }

    #[test]
    fn missing_package_is_installed_once() {
        let project = Project::new();

        project
            .cmd("", "nltk")
            .args(["install", "--strict", "nltk"])
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ Successfully installed nltk"));

        assert_eq!(project.pip_calls(), vec!["install nltk"]);
    }

    #[test]
    fn configured_packages_use_module_names() {
        let project = Project::new().with_config(
            "packages:\n  - pandas\n  - name: scikit-learn\n    module: sklearn\n",
        );

        project
            .cmd("pandas sklearn", "")
            .arg("install")
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ pandas is already installed"))
            .stdout(predicate::str::contains("✓ scikit-learn is already installed"));

        assert!(project.pip_calls().is_empty());
    }

    #[test]
    fn no_subcommand_installs() {
        let project = Project::new().with_config("packages: [os]\n");

        project
            .cmd("os", "")
            .assert()
            .success()
            .stdout(predicate::str::contains("os is already installed"));
    }

    #[test]
    fn check_never_installs() {
        let project = Project::new();

        project
            .cmd("os", "xyz")
            .args(["check", "os", "xyz"])
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ os is already installed"))
            .stderr(predicate::str::contains("✗ xyz is not installed"))
            .stdout(predicate::str::contains("1 of 2 packages installed"));

        assert!(project.pip_calls().is_empty());
    }

    #[test]
    fn smoke_passes_with_working_stack() {
        let project = Project::new();

        project
            .cmd("numpy scipy matplotlib", "")
            .arg("smoke")
            .assert()
            .success()
            .stdout(predicate::str::contains("Testing Scientific Packages"))
            .stdout(predicate::str::contains("NumPy 1.0.0 imported successfully"))
            .stdout(predicate::str::contains("SciPy stats - mean: 3.00, std: 1.41"))
            .stdout(predicate::str::contains(
                "All tests passed! Your scientific packages are working correctly.",
            ))
            .stdout(predicate::str::contains("Matplotlib for plotting"));

        assert!(project.dir.path().join("test_plot.png").exists());
    }

    #[test]
    fn smoke_writes_plot_where_asked() {
        let project = Project::new();
        fs::create_dir_all(project.dir.path().join("out")).unwrap();

        project
            .cmd("numpy scipy matplotlib", "")
            .args(["smoke", "--plot-path", "out/check.png", "--dpi", "72"])
            .assert()
            .success();

        assert!(project.dir.path().join("out/check.png").exists());
        assert!(!project.dir.path().join("test_plot.png").exists());
    }

    #[test]
    fn smoke_stops_after_failed_import() {
        let project = Project::new();

        project
            .cmd("numpy matplotlib", "")
            .arg("smoke")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("NumPy 1.0.0 imported successfully"))
            .stderr(predicate::str::contains(
                "SciPy import failed: No module named 'scipy'",
            ))
            .stderr(predicate::str::contains("Import tests failed!"))
            .stdout(predicate::str::contains("Matplotlib").not())
            .stdout(predicate::str::contains("Testing basic functionality").not());

        assert!(!project.dir.path().join("test_plot.png").exists());
    }

    #[test]
    fn smoke_with_relative_project_from_parent_dir() {
        let project = Project::new();
        let parent = project.dir.path().parent().unwrap();
        let name = project.dir.path().file_name().unwrap();

        project
            .cmd("numpy scipy matplotlib", "")
            .current_dir(parent)
            .arg("--project")
            .arg(name)
            .arg("smoke")
            .assert()
            .success()
            .stdout(predicate::str::contains("Matplotlib plot created and saved"));

        assert!(project.dir.path().join("test_plot.png").exists());
        assert!(!parent.join(name).join(name).exists());
    }

    #[test]
    fn absolute_project_elsewhere_uses_its_config() {
        let project = Project::new().with_config("packages: [os]\nsmoke:\n  plot_path: out.png\n");
        let elsewhere = TempDir::new().unwrap();

        project
            .cmd("os numpy scipy matplotlib", "")
            .current_dir(elsewhere.path())
            .arg("--project")
            .arg(project.dir.path())
            .arg("install")
            .assert()
            .success()
            .stdout(predicate::str::contains("✓ os is already installed"))
            .stdout(predicate::str::contains("pandas").not());

        project
            .cmd("numpy scipy matplotlib", "")
            .current_dir(elsewhere.path())
            .arg("--project")
            .arg(project.dir.path())
            .arg("smoke")
            .assert()
            .success();

        assert!(project.dir.path().join("out.png").exists());
        assert!(!elsewhere.path().join("out.png").exists());
        assert!(project.pip_calls().is_empty());
    }

    #[test]
    fn empty_package_name_is_rejected() {
        let project = Project::new();

        project
            .cmd("", "")
            .args(["install", ""])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("Installing packages...").not());

        assert!(project.pip_calls().is_empty());
    }
}
