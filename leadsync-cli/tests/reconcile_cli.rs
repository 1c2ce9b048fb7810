//! End-to-end `leadsync reconcile` over temp CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn missing_rows_are_extracted_to_the_output_file() {
    let dir = TempDir::new().expect("tempdir");
    let reference = write(&dir, "existing.csv", "ZipCode,City\n75001,Addison\n75002,Allen\n");
    let candidate = write(
        &dir,
        "master.csv",
        "ZipCode,City\n75001,Addison\n75003,Carrollton\n",
    );
    let output = dir.path().join("missing.csv");

    Command::cargo_bin("leadsync")
        .expect("binary")
        .arg("reconcile")
        .arg(&reference)
        .arg(&candidate)
        .arg("--key")
        .arg("ZipCode")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 missing rows"));

    let written = std::fs::read_to_string(&output).expect("output exists");
    assert!(written.starts_with("ZipCode,City\n"));
    assert!(written.contains("75003,Carrollton"));
    assert!(!written.contains("75001"));
}

#[test]
fn no_missing_rows_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let reference = write(&dir, "existing.csv", "ZipCode\n75001\n");
    let candidate = write(&dir, "master.csv", "ZipCode\n75001\n");
    let output = dir.path().join("missing.csv");

    Command::cargo_bin("leadsync")
        .expect("binary")
        .arg("reconcile")
        .arg(&reference)
        .arg(&candidate)
        .arg("--key")
        .arg("ZipCode")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("no missing rows"));

    assert!(!output.exists(), "empty result must not create a file");
}

#[test]
fn missing_input_file_fails_with_its_path() {
    let dir = TempDir::new().expect("tempdir");
    let candidate = write(&dir, "master.csv", "ZipCode\n75001\n");

    Command::cargo_bin("leadsync")
        .expect("binary")
        .arg("reconcile")
        .arg(dir.path().join("absent.csv"))
        .arg(&candidate)
        .arg("--key")
        .arg("ZipCode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.csv"));
}

#[test]
fn missing_key_column_fails() {
    let dir = TempDir::new().expect("tempdir");
    let reference = write(&dir, "existing.csv", "Zip\n75001\n");
    let candidate = write(&dir, "master.csv", "ZipCode\n75003\n");

    Command::cargo_bin("leadsync")
        .expect("binary")
        .arg("reconcile")
        .arg(&reference)
        .arg(&candidate)
        .arg("--key")
        .arg("ZipCode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ZipCode"));
}
