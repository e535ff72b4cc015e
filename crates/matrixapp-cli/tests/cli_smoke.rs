//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `matrixapp` binary to verify that
//! argument parsing, result rendering, and error reporting work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("matrixapp").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("transpose"))
        .stdout(predicate::str::contains("determinant"))
        .stdout(predicate::str::contains("inverse"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matrixapp"));
}

#[test]
fn operation_without_input_errors() {
    cmd().arg("transpose").assert().failure();
}

#[test]
fn input_and_data_conflict() {
    cmd()
        .args(["transpose", "matrix.csv", "--data", "1,2"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// Operations on inline data
// ---------------------------------------------------------------------------

#[test]
fn transpose_inline() {
    cmd()
        .args(["transpose", "--data", "1,2,3;4,5,6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transposed matrix:"))
        .stdout(predicate::str::contains("1.000  4.000\n2.000  5.000\n3.000  6.000"));
}

#[test]
fn determinant_inline() {
    cmd()
        .args(["determinant", "--data", "2,-1,0;-1,2,-1;0,-1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Determinant: 4.000"));
}

#[test]
fn inverse_inline_with_verify_and_precision() {
    cmd()
        .args(["inverse", "--data", "1 2; 3 4", "--verify", "-p", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inverse matrix:"))
        .stdout(predicate::str::contains("-2.0   1.0\n 1.5  -0.5"));
}

#[test]
fn inverse_inline_with_leading_negative() {
    cmd()
        .args(["inverse", "--data", "-2,1;1,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inverse matrix:"))
        .stdout(predicate::str::contains("-0.429   0.143\n 0.143   0.286"));
}

#[test]
fn determinant_inline_with_short_flag_and_negative() {
    cmd()
        .args(["determinant", "-d", "-1,2;3,4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Determinant: -10.000"));
}

#[test]
fn inverse_singular_fails() {
    cmd()
        .args(["inverse", "--data", "1,2;2,4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("singular"));
}

#[test]
fn determinant_non_square_fails() {
    cmd()
        .args(["determinant", "--data", "1,2,3;4,5,6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be square"));
}

#[test]
fn jagged_data_fails() {
    cmd()
        .args(["transpose", "--data", "1,2;3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error creating matrix"));
}

#[test]
fn invalid_cell_fails() {
    cmd()
        .args(["transpose", "--data", "1,x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[1,2]"));
}

#[test]
fn oversized_matrix_rejected() {
    let row = vec!["1"; 11].join(",");
    cmd()
        .args(["transpose", "--data", &row])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the supported range"));
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn inverse_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("m.csv");
    let output = dir.path().join("inv.tsv");
    std::fs::write(&input, "5\n").unwrap();

    cmd()
        .args([
            "inverse",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "0.200\n");
}

#[test]
fn nonexistent_input_errors() {
    cmd()
        .args(["determinant", "/nonexistent/matrix.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn nonexistent_config_errors() {
    cmd()
        .args(["transpose", "--data", "1", "--config", "/nonexistent/config.json"])
        .assert()
        .failure();
}
