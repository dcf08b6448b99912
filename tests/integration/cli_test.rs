//! Integration tests for the gazeplay CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, temp_fixture};

/// Run gazeplay and return its stdout, failing on a non-zero exit.
fn stdout_of(config_home: &TempDir, args: &[&str]) -> String {
    let output = gazeplay(config_home)
        .args(args)
        .output()
        .expect("Failed to execute gazeplay");
    assert!(output.status.success(), "gazeplay {:?} failed", args);
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// gazeplay command with an isolated, empty config directory.
fn gazeplay(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gazeplay").expect("Failed to find gazeplay binary");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_documents_controls() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--speed"))
        .stdout(predicate::str::contains("--paused"))
        .stdout(predicate::str::contains("scrub"));
}

#[test]
fn snapshot_config_help() {
    let home = TempDir::new().unwrap();
    let output = stdout_of(&home, &["config", "--help"]);
    insta::assert_snapshot!(output, @r"
    Inspect the configuration

    Usage: gazeplay config <COMMAND>

    Commands:
      show  Print the effective configuration as TOML
      path  Print the config file path
      edit  Open the config file in $EDITOR, creating it with defaults if missing
      help  Print this message or the help of the given subcommand(s)

    Options:
      -h, --help  Print help
    ");
}

#[test]
fn version_is_printed() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gazeplay "));
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn info_summarizes_session() {
    let home = TempDir::new().unwrap();
    let (_temp_dir, path) = temp_fixture("session.json");
    gazeplay(&home)
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 stimuli, 3 viewers, 2 groups"))
        .stdout(predicate::str::contains("beach"))
        .stdout(predicate::str::contains("[city.png]"))
        .stdout(predicate::str::contains("10 samples, 0.30s"))
        .stdout(predicate::str::contains("dark_fix"));
}

#[test]
fn snapshot_info_session() {
    let home = TempDir::new().unwrap();
    let path = fixtures_dir().join("session.json");
    let output = stdout_of(&home, &["info", path.to_str().unwrap()]);
    insta::with_settings!({filters => vec![(r"\x1b\[[0-9;]*m", "")]}, {
        insta::assert_snapshot!(output, @r"
        3 stimuli, 3 viewers, 2 groups at 30 Hz

        Stimuli:
            1. beach  6 samples, 0.17s, 4 viewings  [beach.png]
            2. city  10 samples, 0.30s, 1 viewings  [city.png]
            3. blank  0 samples, 0.00s, 0 viewings

        Groups:
          light_fix  006, 007
          dark_fix  012
        ");
    });
}

#[test]
fn info_accepts_wrapped_script() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .arg("info")
        .arg(fixtures_dir().join("wrapped.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 stimuli"));
}

#[test]
fn info_reports_invalid_data() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .arg("info")
        .arg(fixtures_dir().join("undeclared_group.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load gaze data"))
        .stderr(predicate::str::contains("undeclared group 'light_fix'"));
}

#[test]
fn info_reports_missing_file() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .args(["info", "/nonexistent/session.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/session.json"));
}

// ============================================================================
// Play Command Tests
// ============================================================================

#[test]
fn play_fails_before_touching_terminal_on_missing_file() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .args(["play", "/nonexistent/session.json", "--paused"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load gaze data"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gazeplay"));
}

#[test]
fn completions_reject_unknown_shell() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .args(["completions", "cmd"])
        .assert()
        .failure();
}
