//! Library integration tests.

use nbenv::NbenvError;

#[test]
fn error_types_are_public() {
    let err = NbenvError::ConfigValidationError {
        message: "dpi must be positive".into(),
    };
    assert!(err.to_string().contains("dpi must be positive"));
    assert!(err.is_config_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> nbenv::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use nbenv::cli::{Cli, Commands};

    let cli = Cli::parse_from(["nbenv", "install", "--strict", "pandas"]);

    if let Some(Commands::Install(args)) = cli.command {
        assert!(args.strict);
        assert_eq!(args.packages, vec!["pandas".to_string()]);
    } else {
        panic!("Expected Install command");
    }
}

#[test]
fn installer_and_smoke_run_against_a_fake_runtime() {
    use nbenv::config::{PackageSpec, SmokeSettings};
    use nbenv::installer::install_if_needed;
    use nbenv::runtime::FakeRuntime;
    use nbenv::smoke::{run_suite, Stage, SuiteOutcome};
    use nbenv::ui::MockUI;

    let runtime = FakeRuntime::new().with_module("numpy");
    let mut ui = MockUI::new();

    assert!(install_if_needed(&runtime, &PackageSpec::new("numpy"), &mut ui));
    assert_eq!(
        run_suite(&runtime, &SmokeSettings::default(), &mut ui),
        SuiteOutcome::Failed(Stage::Imports)
    );
    assert!(runtime.install_calls().is_empty());
}
