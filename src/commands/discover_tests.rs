use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Cli;
use crate::output::OutputFormat;

const HEADER: &str = r"
constexpr void setBit(uint8_t& value, uint8_t n);
constexpr bool isBitSet(uint8_t value, uint8_t n);
";

fn quiet_cli() -> Cli {
    Cli::parse_from(["testgap", "--quiet", "--no-config", "init"])
}

fn fixture(temp_dir: &TempDir, test_files: &[&str]) -> DiscoverArgs {
    let header = temp_dir.path().join("bit_utils.hpp");
    fs::write(&header, HEADER).unwrap();

    let tests_dir = temp_dir.path().join("tests");
    fs::create_dir_all(&tests_dir).unwrap();
    for name in test_files {
        fs::write(tests_dir.join(name), "// generated\n").unwrap();
    }

    DiscoverArgs {
        headers: vec![header],
        tests: Some(tests_dir),
        config: None,
        format: OutputFormat::Json,
        output: Some(temp_dir.path().join("out.json")),
    }
}

fn read_report(temp_dir: &TempDir) -> serde_json::Value {
    let content = fs::read_to_string(temp_dir.path().join("out.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_discover_finds_gap() {
    let temp_dir = TempDir::new().unwrap();
    let args = fixture(&temp_dir, &["test_set_bit_runtime.cpp"]);

    let exit = run_discover_impl(&args, &quiet_cli(), ColorMode::Never).unwrap();
    assert_eq!(exit, EXIT_GAPS_FOUND);

    let report = read_report(&temp_dir);
    assert_eq!(report["headers"][0]["declared"], 2);
    assert_eq!(report["headers"][0]["tested"], 1);
    assert_eq!(report["headers"][0]["untested"][0]["name"], "isBitSet");
    assert_eq!(
        report["headers"][0]["untested"][0]["expected_file"],
        "test_is_bit_set_runtime.cpp"
    );
}

#[test]
fn test_discover_all_covered() {
    let temp_dir = TempDir::new().unwrap();
    let args = fixture(
        &temp_dir,
        &["test_set_bit_runtime.cpp", "test_is_bit_set_runtime.cpp"],
    );

    let exit = run_discover_impl(&args, &quiet_cli(), ColorMode::Never).unwrap();
    assert_eq!(exit, EXIT_SUCCESS);
}

#[test]
fn test_discover_missing_tests_dir_reports_everything() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = fixture(&temp_dir, &[]);
    args.tests = Some(temp_dir.path().join("no_such_dir"));

    let exit = run_discover_impl(&args, &quiet_cli(), ColorMode::Never).unwrap();
    assert_eq!(exit, EXIT_GAPS_FOUND);

    let report = read_report(&temp_dir);
    assert_eq!(report["headers"][0]["untested"].as_array().unwrap().len(), 2);
}

#[test]
fn test_discover_without_tests_dir_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = fixture(&temp_dir, &[]);
    args.tests = None;

    let err = run_discover_impl(&args, &quiet_cli(), ColorMode::Never).unwrap_err();
    assert!(matches!(err, TestgapError::Config(_)));
}

#[test]
fn test_listing_ignores_unrelated_files() {
    let temp_dir = TempDir::new().unwrap();
    let tests_dir = temp_dir.path().join("tests");
    fs::create_dir_all(&tests_dir).unwrap();
    fs::write(tests_dir.join("test_set_bit_runtime.cpp"), "").unwrap();
    fs::write(tests_dir.join("README.md"), "").unwrap();
    fs::write(tests_dir.join("helper.cpp"), "").unwrap();

    let naming = TestNaming::default();
    let listing = collect_test_listing(&tests_dir, &naming).unwrap();

    assert_eq!(listing.len(), 1);
    assert!(listing.contains("test_set_bit_runtime.cpp"));
}

#[test]
fn test_listing_for_missing_dir_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let naming = TestNaming::default();
    let listing = collect_test_listing(&temp_dir.path().join("nope"), &naming).unwrap();
    assert!(listing.is_empty());
}
