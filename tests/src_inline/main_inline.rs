use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["perfloop"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_cli_definition() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_args_no_filter() {
    let cli = parse(&[]);
    assert_eq!(cli.filter, None);
    assert_eq!(cli.runs, None);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn test_parse_args_filter_and_options() {
    let cli = parse(&[
        "Blur.Large",
        "--runs",
        "5",
        "--trim-fraction",
        "0.2",
        "--metric-key",
        "score",
        "--config",
        "bench.json",
        "-vv",
    ]);
    assert_eq!(cli.filter.as_deref(), Some("Blur.Large"));
    assert_eq!(cli.verbose, 2);

    let overrides = cli.overrides();
    assert_eq!(overrides.filter.as_deref(), Some("Blur.Large"));
    assert_eq!(overrides.runs, Some(5));
    assert_eq!(overrides.trim_fraction, Some(0.2));
    assert_eq!(overrides.metric_key.as_deref(), Some("score"));
    assert_eq!(overrides.config, Some(PathBuf::from("bench.json")));
}

#[test]
fn test_parse_args_rejects_second_positional() {
    let parsed = Cli::try_parse_from(["perfloop", "A.B", "C.D"]);
    assert!(parsed.is_err());
}

#[test]
fn test_usage_errors_do_not_collide_with_metric_codes() {
    let err = Cli::try_parse_from(["perfloop", "--runs", "abc"]).unwrap_err();
    assert_eq!(usage_exit_code(&err), Some(1));

    let err = Cli::try_parse_from(["perfloop", "--no-such-flag"]).unwrap_err();
    assert_eq!(usage_exit_code(&err), Some(1));

    let missing_metric = PerfError::MissingMetric {
        key: "metric".to_string(),
    };
    assert_ne!(usage_exit_code(&err), Some(missing_metric.exit_code()));
}

#[test]
fn test_help_and_version_exit_through_clap() {
    let err = Cli::try_parse_from(["perfloop", "--help"]).unwrap_err();
    assert_eq!(usage_exit_code(&err), None);

    let err = Cli::try_parse_from(["perfloop", "--version"]).unwrap_err();
    assert_eq!(usage_exit_code(&err), None);
}

#[test]
fn test_log_directive_by_verbosity() {
    assert_eq!(logging::default_directive(0), "warn");
    assert_eq!(logging::default_directive(1), "info");
    assert_eq!(logging::default_directive(5), "debug");
}
