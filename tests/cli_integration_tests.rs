#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BIT_HEADER: &str = r"
#pragma once

template<std::integral T>
constexpr void setBit(T& value, uint8_t n);

template<std::integral T>
constexpr bool isBitSet(const T& value, uint8_t n);

void registerCallback(void (*callback)(int, int), int data);
";

fn cmd() -> Command {
    Command::cargo_bin("testgap").expect("binary should exist")
}

fn write_header(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("bit_utils.hpp");
    fs::write(&path, BIT_HEADER).unwrap();
    path
}

fn write_tests_dir(dir: &Path, files: &[&str]) -> std::path::PathBuf {
    let tests = dir.join("tests");
    fs::create_dir_all(&tests).unwrap();
    for name in files {
        fs::write(tests.join(name), "// generated\n").unwrap();
    }
    tests
}

// ============================================================================
// Signature Command Integration Tests
// ============================================================================

#[test]
fn signature_reports_classification_and_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());

    cmd()
        .arg("signature")
        .arg("setBit")
        .arg("--header")
        .arg(&header)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("FOUND: setBit"))
        .stdout(predicate::str::contains("modifies-reference"))
        .stdout(predicate::str::contains("test_set_bit_runtime.cpp"));
}

#[test]
fn signature_bool_return_uses_bool_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());

    cmd()
        .arg("signature")
        .arg("isBitSet")
        .arg("--header")
        .arg(&header)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("returns-bool"))
        .stdout(predicate::str::contains("test_is_bit_set_runtime.cpp"));
}

#[test]
fn signature_function_pointer_is_split_correctly() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());

    cmd()
        .arg("signature")
        .arg("registerCallback")
        .arg("--header")
        .arg(&header)
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let value: serde_json::Value = serde_json::from_str(out).unwrap();
            value["signature"]["parameters"].as_array().unwrap().len() == 2
        }));
}

#[test]
fn signature_unknown_function_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());

    cmd()
        .arg("signature")
        .arg("clearBit")
        .arg("--header")
        .arg(&header)
        .arg("--no-config")
        .assert()
        .code(2) // EXIT_ERROR
        .stderr(predicate::str::contains("No declaration of `clearBit`"));
}

#[test]
fn signature_validate_miss_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());

    cmd()
        .arg("signature")
        .arg("clearBit")
        .arg("--header")
        .arg(&header)
        .arg("--no-config")
        .arg("--validate")
        .assert()
        .code(1) // EXIT_GAPS_FOUND
        .stdout(predicate::str::contains("MISSING"));
}

#[test]
fn signature_pattern_override_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());
    let config = temp_dir.path().join("testgap.toml");
    fs::write(&config, "[patterns]\nreturns_bool = \"my_bool.cpp\"\n").unwrap();

    cmd()
        .arg("signature")
        .arg("isBitSet")
        .arg("--header")
        .arg(&header)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("my_bool.cpp"));
}

// ============================================================================
// Functions Command Integration Tests
// ============================================================================

#[test]
fn functions_enumerates_declarations_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());

    cmd()
        .arg("functions")
        .arg("--header")
        .arg(&header)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("setBit"))
        .stdout(predicate::str::contains("isBitSet"))
        .stdout(predicate::str::contains("registerCallback"))
        .stdout(predicate::str::contains("Summary: 3 functions declared"));
}

#[test]
fn functions_json_output_parses() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());

    cmd()
        .arg("functions")
        .arg("--header")
        .arg(&header)
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let value: serde_json::Value = serde_json::from_str(out).unwrap();
            value["kind"] == "functions"
        }));
}

// ============================================================================
// Discover Command Integration Tests
// ============================================================================

#[test]
fn discover_reports_gap_and_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());
    let tests = write_tests_dir(
        temp_dir.path(),
        &["test_set_bit_runtime.cpp", "test_register_callback_runtime.cpp"],
    );

    cmd()
        .arg("discover")
        .arg("--header")
        .arg(&header)
        .arg("--tests")
        .arg(&tests)
        .arg("--no-config")
        .assert()
        .code(1) // EXIT_GAPS_FOUND
        .stdout(predicate::str::contains("GAPS"))
        .stdout(predicate::str::contains(
            "isBitSet (expected test_is_bit_set_runtime.cpp)",
        ));
}

#[test]
fn discover_all_covered_exits_success() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());
    let tests = write_tests_dir(
        temp_dir.path(),
        &[
            "test_set_bit_runtime.cpp",
            "test_is_bit_set_runtime.cpp",
            "test_register_callback_runtime.cpp",
        ],
    );

    cmd()
        .arg("discover")
        .arg("--header")
        .arg(&header)
        .arg("--tests")
        .arg(&tests)
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("COVERED"));
}

#[test]
fn discover_output_file_instead_of_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let header = write_header(temp_dir.path());
    let tests = write_tests_dir(temp_dir.path(), &[]);
    let out = temp_dir.path().join("report.json");

    cmd()
        .arg("discover")
        .arg("--header")
        .arg(&header)
        .arg("--tests")
        .arg(&tests)
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&out)
        .assert()
        .code(1);

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["headers"][0]["untested"].as_array().unwrap().len(), 3);
}

#[test]
fn discover_missing_header_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let tests = write_tests_dir(temp_dir.path(), &[]);

    cmd()
        .arg("discover")
        .arg("--header")
        .arg(temp_dir.path().join("absent.hpp"))
        .arg("--tests")
        .arg(&tests)
        .arg("--no-config")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}

// ============================================================================
// Init Command Integration Tests
// ============================================================================

#[test]
fn init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join(".testgap.toml");

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(output.exists());
}

#[test]
fn init_refuses_existing_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join(".testgap.toml");
    fs::write(&output, "existing").unwrap();

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&output)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&output)
        .arg("--force")
        .assert()
        .success();
}
