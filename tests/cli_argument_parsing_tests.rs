//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! merged with configuration files into the request value handed to the
//! resolver.

use clap::Parser;
use employee_roster_simulator::types::{CliArgs, OutputFormat, ResolvedConfig};
use serde_json::json;
use std::io::Write;

/// Parse a CLI invocation
fn parse(args: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(args).unwrap()
}

/// Test default argument values
#[test]
fn test_default_arguments() {
    let args = parse(&["test"]);

    assert!(args.config.is_none());
    assert!(args.employee_count.is_none());
    assert!(args.min_age.is_none());
    assert!(args.max_age.is_none());
    assert!(args.seed.is_none());
    assert!(args.output.is_none());
    assert!(args.output_format.is_none());
    assert!(!args.pretty);
    assert!(!args.verbose);
    assert!(!args.debug);
    assert!(!args.dry_run);
    assert!(!args.print_config);
}

/// Test explicit generation arguments
#[test]
fn test_generation_arguments() {
    let args = parse(&[
        "test",
        "--employee-count",
        "50",
        "--min-age",
        "25",
        "--max-age",
        "40",
        "--seed",
        "42",
    ]);

    assert_eq!(args.employee_count, Some(50));
    assert_eq!(args.min_age, Some(25));
    assert_eq!(args.max_age, Some(40));
    assert_eq!(args.seed, Some(42));
}

/// Test flag arguments
#[test]
fn test_flag_arguments() {
    let args = parse(&["test", "--pretty", "--verbose", "--dry-run"]);
    assert!(args.pretty);
    assert!(args.verbose);
    assert!(args.dry_run);

    let args = parse(&["test", "-d"]);
    assert!(args.debug);
}

/// Test output format resolution
#[test]
fn test_output_format_resolution() {
    let args = parse(&["test"]);
    assert_eq!(args.resolved_output_format().unwrap(), OutputFormat::Json);

    let args = parse(&["test", "--output-format", "csv"]);
    assert_eq!(args.resolved_output_format().unwrap(), OutputFormat::Csv);

    let args = parse(&["test", "--output-format", "xml"]);
    assert!(args.resolved_output_format().is_err());
}

/// CLI overrides alone build a structured request
#[test]
fn test_overrides_build_request() {
    let args = parse(&["test", "--employee-count", "7", "--min-age", "30", "--max-age", "35"]);
    let request = args.to_request().unwrap();

    let config = ResolvedConfig::from_value(&request);
    assert_eq!(config.employee_count, 7);
    assert_eq!(config.min_age, 30);
    assert_eq!(config.max_age, 35);
}

/// A config file is loaded and resolved as-is without overrides
#[test]
fn test_config_file_loading() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({"employeeCount": 6, "ageRange": {"min": 20, "max": 30}})
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let args = parse(&["test", "--config", path]);
    let request = args.to_request().unwrap();

    let config = ResolvedConfig::from_value(&request);
    assert_eq!(config.employee_count, 6);
    assert_eq!(config.min_age, 20);
    assert_eq!(config.max_age, 30);
}

/// CLI arguments override the configuration file
#[test]
fn test_cli_overrides_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "{}",
        json!({"employeeCount": 6, "ageRange": {"min": 20, "max": 30}})
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let args = parse(&["test", "--config", path, "--employee-count", "99", "--min-age", "40"]);
    let request = args.to_request().unwrap();

    let config = ResolvedConfig::from_value(&request);
    assert_eq!(config.employee_count, 99);
    assert_eq!(config.min_age, 40);
    // The file maximum (30) undercuts the overridden minimum, so it is
    // rejected in favor of the default.
    assert_eq!(config.max_age, 65);
}

/// A bare-count config file still resolves, and overrides replace it
#[test]
fn test_bare_count_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "8").unwrap();

    let path = file.path().to_str().unwrap();
    let args = parse(&["test", "--config", path]);
    let config = ResolvedConfig::from_value(&args.to_request().unwrap());
    assert_eq!(config.employee_count, 8);

    let args = parse(&["test", "--config", path, "--employee-count", "3"]);
    let config = ResolvedConfig::from_value(&args.to_request().unwrap());
    assert_eq!(config.employee_count, 3);
}

/// A missing configuration file is a boundary error
#[test]
fn test_missing_config_file_errors() {
    let args = parse(&["test", "--config", "/nonexistent/roster.json"]);
    assert!(args.to_request().is_err());
}

/// A malformed configuration file is a boundary error
#[test]
fn test_malformed_config_file_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();

    let path = file.path().to_str().unwrap();
    let args = parse(&["test", "--config", path]);
    assert!(args.to_request().is_err());
}
