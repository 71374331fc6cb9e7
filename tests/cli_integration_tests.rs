//! CLI Integration Tests
//!
//! Runs the chirp-convert binary with assert_cmd to exercise main.rs code paths.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::TempDir;

fn chirp_convert(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("chirp-convert").unwrap();
    cmd.current_dir(dir)
        .env_remove("CHIRP_INPUT")
        .env_remove("CHIRP_OUTPUT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_list(path: &Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Ch").unwrap();
    sheet.write_number(1, 0, 1).unwrap();
    sheet.write_string(1, 1, "146.94-").unwrap();
    sheet.write_string(1, 2, "100Hz").unwrap();
    sheet.write_string(1, 3, "K6SNYr").unwrap();
    sheet.write_number(2, 0, 2).unwrap();
    sheet.write_string(2, 1, "444.9-").unwrap();
    sheet.write_string(2, 3, "W1XSCC-1").unwrap();
    workbook.save(path).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    chirp_convert(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--loose"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    chirp_convert(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chirp-convert"));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_writes_default_output() {
    let temp_dir = TempDir::new().unwrap();
    write_list(&temp_dir.path().join("list.xlsx"));

    chirp_convert(temp_dir.path())
        .arg("list.xlsx")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("output.csv"))
        .stderr(predicate::str::contains("channel 2"));

    let csv = std::fs::read_to_string(temp_dir.path().join("output.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Location,Name,Frequency,Duplex,Offset"));
    assert!(lines[1].starts_with("1,K6SNY R,146.94,-,0.6,Tone,100.0,88.5"));
    assert!(lines[2].starts_with("2,W1XSCC1,444.9,+,5.0,,88.5,88.5"));
}

#[test]
fn test_convert_default_input_name() {
    let temp_dir = TempDir::new().unwrap();
    write_list(&temp_dir.path().join("frequencies.xlsx"));

    chirp_convert(temp_dir.path()).assert().success();
    assert!(temp_dir.path().join("output.csv").exists());
}

#[test]
fn test_convert_loose_with_output() {
    let temp_dir = TempDir::new().unwrap();
    write_list(&temp_dir.path().join("list.xlsx"));

    chirp_convert(temp_dir.path())
        .args(["list.xlsx", "-l", "-o", "loose.csv", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loose policy"));

    let csv = std::fs::read_to_string(temp_dir.path().join("loose.csv")).unwrap();
    assert!(csv.contains("1,K6SNY r,"));
    assert!(csv.contains("2,W1XSCC-1,"));
}

#[test]
fn test_convert_strict() {
    let temp_dir = TempDir::new().unwrap();
    write_list(&temp_dir.path().join("list.xlsx"));

    chirp_convert(temp_dir.path())
        .args(["list.xlsx", "--strict"])
        .assert()
        .success();

    let csv = std::fs::read_to_string(temp_dir.path().join("output.csv")).unwrap();
    assert!(csv.contains("1,K6SNYR,"));
}

#[test]
fn test_input_from_env() {
    let temp_dir = TempDir::new().unwrap();
    write_list(&temp_dir.path().join("club.xlsx"));

    chirp_convert(temp_dir.path())
        .env("CHIRP_INPUT", "club.xlsx")
        .assert()
        .success();
    assert!(temp_dir.path().join("output.csv").exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// USAGE ERRORS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_loose_and_strict_conflict() {
    let temp_dir = TempDir::new().unwrap();
    write_list(&temp_dir.path().join("list.xlsx"));

    chirp_convert(temp_dir.path())
        .args(["list.xlsx", "--loose", "--strict"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("--loose and --strict"));
    assert!(!temp_dir.path().join("output.csv").exists());
}

#[test]
fn test_unknown_flag_is_argument_error() {
    let temp_dir = TempDir::new().unwrap();
    write_list(&temp_dir.path().join("list.xlsx"));

    chirp_convert(temp_dir.path())
        .args(["list.xlsx", "--lose"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--lose"));
    assert!(!temp_dir.path().join("output.csv").exists());
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();

    chirp_convert(temp_dir.path())
        .arg("nope.xlsx")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.xlsx is not a file"));
    assert!(!temp_dir.path().join("output.csv").exists());
}

#[test]
fn test_directory_is_not_a_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("lists")).unwrap();

    chirp_convert(temp_dir.path()).arg("lists").assert().code(3);
}

#[test]
fn test_unreadable_workbook() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("list.xlsx"), "plain text").unwrap();

    chirp_convert(temp_dir.path())
        .arg("list.xlsx")
        .assert()
        .code(4);
    assert!(!temp_dir.path().join("output.csv").exists());
}
