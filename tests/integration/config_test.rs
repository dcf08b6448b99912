//! Integration tests for the config subcommands
//!
//! The config directory is redirected with `XDG_CONFIG_HOME`, which the
//! platform lookup only honors on Linux.

#![cfg(target_os = "linux")]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::fixtures_dir;

fn gazeplay(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gazeplay").expect("Failed to find gazeplay binary");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_config(config_home: &TempDir, content: &str) {
    let dir = config_home.path().join("gazeplay");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
fn config_path_points_into_config_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("gazeplay").join("config.toml");
    gazeplay(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()))
        .stdout(predicate::str::contains("defaults in use"));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("fps = 30.0"))
        .stdout(predicate::str::contains("point_radius = 6.0"));
}

#[test]
fn config_show_reflects_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[playback]\nfps = 60.0\nspeed = 2.0\n");
    gazeplay(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fps = 60.0"))
        .stdout(predicate::str::contains("speed = 2.0"))
        .stdout(predicate::str::contains("max_speed = 16.0"));
}

#[test]
fn broken_config_is_reported() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[playback\n");
    gazeplay(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn unknown_palette_color_fails_play() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        "[[render.palette]]\nfill = \"octarine\"\nstroke = \"green\"\n",
    );
    gazeplay(&home)
        .arg("play")
        .arg(fixtures_dir().join("session.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown color in palette: octarine"));
}

#[test]
fn config_edit_creates_default_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("gazeplay").join("config.toml");
    gazeplay(&home)
        .args(["config", "edit"])
        .env("EDITOR", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[playback]"));
    assert!(content.contains("fps = 30.0"));
}

#[test]
fn config_edit_keeps_existing_file() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[playback]\nfps = 60.0\n");
    gazeplay(&home)
        .args(["config", "edit"])
        .env("EDITOR", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not());

    let path = home.path().join("gazeplay").join("config.toml");
    assert_eq!(fs::read_to_string(path).unwrap(), "[playback]\nfps = 60.0\n");
}

#[test]
fn config_edit_reports_failing_editor() {
    let home = TempDir::new().unwrap();
    gazeplay(&home)
        .args(["config", "edit"])
        .env("EDITOR", "false")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Editor exited"));
}
