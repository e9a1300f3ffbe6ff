//! End-to-end CLI integration tests.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn strassen() -> Command {
    let mut cmd = Command::cargo_bin("strassen").expect("binary not found");
    cmd.env_remove("STRASSEN_DIM")
        .env_remove("STRASSEN_THRESHOLD")
        .env_remove("STRASSEN_SEED");
    cmd
}

fn write_pair(dir: &Path, values: &[i64]) -> std::path::PathBuf {
    let path = dir.join("pair.txt");
    let text: String = values.iter().map(|v| format!("{v}\n")).collect();
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn help_flag() {
    strassen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Strassen"));
}

#[test]
fn version_flag() {
    strassen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("strassen"));
}

#[test]
fn multiply_prints_diagonal() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = write_pair(tmp.path(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    strassen()
        .args(["multiply", "--dim", "2", "--threshold", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout("19\n50\n");
}

#[test]
fn multiply_full_odd_dimension() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = write_pair(
        tmp.path(),
        &[1, 0, 2, 0, 1, 0, 3, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    );
    strassen()
        .args(["multiply", "--dim", "3", "--threshold", "1", "--full"])
        .arg(&path)
        .assert()
        .success()
        .stdout("1 0 2\n0 1 0\n3 0 1\n");
}

#[test]
fn multiply_threshold_from_env() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = write_pair(tmp.path(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    strassen()
        .env("STRASSEN_THRESHOLD", "1")
        .args(["multiply", "--dim", "2", "--stats"])
        .arg(&path)
        .assert()
        .success()
        .stdout("19\n50\n")
        .stderr(predicate::str::contains("Recursive steps: 1"));
}

#[test]
fn zero_threshold_is_config_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = write_pair(tmp.path(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    strassen()
        .args(["multiply", "--dim", "2", "--threshold", "0"])
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid threshold"));
}

#[test]
fn wrong_value_count_is_config_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = write_pair(tmp.path(), &[1, 2, 3]);
    strassen()
        .args(["multiply", "--dim", "2"])
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("expected 8 values"));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn oversized_dimension_is_config_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = write_pair(tmp.path(), &[1, 2]);
    strassen()
        .args(["multiply", "--dim", "4294967296"])
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn missing_file_is_generic_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    strassen()
        .args(["multiply", "--dim", "2"])
        .arg(tmp.path().join("absent.txt"))
        .assert()
        .code(1);
}

#[test]
fn small_sweep_writes_report() {
    let tmp = tempfile::TempDir::new().unwrap();
    let report = tmp.path().join("sweep.json");
    strassen()
        .args(["sweep", "--dims", "8,9", "--thresholds", "2,4", "-q", "--output"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Best threshold per dimension:"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["points"].as_array().unwrap().len(), 4);
}

#[test]
fn sweep_rejects_zero_threshold() {
    strassen()
        .args(["sweep", "--dims", "8", "--thresholds", "0", "-q"])
        .assert()
        .code(4);
}

#[test]
fn triangles_on_complete_graph() {
    strassen()
        .args([
            "triangles",
            "--vertices",
            "6",
            "--probabilities",
            "1.0",
            "--trials",
            "2",
            "--threshold",
            "2",
            "-q",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("20"));
}

#[test]
fn bash_completions() {
    strassen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("multiply"));
}
