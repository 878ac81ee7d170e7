// Integration tests for the reporank CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling, exit codes and error output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to build a Command for the reporank binary in an empty directory,
/// so no stray config layer is picked up.
fn reporank(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reporank").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    reporank(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reporank"));
}

#[test]
fn cli_help_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    reporank(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rank software repositories"));
}

#[test]
fn rank_requires_input_and_output() {
    let dir = TempDir::new().expect("temp dir should be created");
    reporank(&dir)
        .args(["rank", "--csv-file", "repos.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn rank_missing_input_exits_with_code_2() {
    let dir = TempDir::new().expect("temp dir should be created");
    reporank(&dir)
        .args(["rank", "-c", "missing.csv", "-o", "ranked.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: path does not exist"));
}

#[test]
fn dispersion_requires_path() {
    let dir = TempDir::new().expect("temp dir should be created");
    reporank(&dir)
        .arg("dispersion")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn collect_requires_both_cpplint_inputs() {
    let dir = TempDir::new().expect("temp dir should be created");
    reporank(&dir)
        .args([
            "collect",
            "--repo-url",
            "https://github.com/acme/widgets",
            "--cpplint-log",
            "cpplint.log",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cpplint-nloc"));
}

#[test]
fn quiet_and_verbose_conflict() {
    let dir = TempDir::new().expect("temp dir should be created");
    reporank(&dir)
        .args(["-q", "-v", "dispersion", "patterns.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn explicit_missing_config_is_fatal() {
    let dir = TempDir::new().expect("temp dir should be created");
    reporank(&dir)
        .args(["--config", "nope.toml", "dispersion", "patterns.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}
