//! Tests for error handling, suggestions and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn grimoire(temp: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("grimoire");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env_remove("GRIMOIRE_ROSTER")
        .env_remove("GRIMOIRE_OUTPUT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_create_with_too_long_first_name() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .args([
            "create",
            "--first-name",
            "This is too long",
            "--last-name",
            "Skyrunner",
            "--level",
            "3",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "The constraint was not met: length(firstName) >= 1 && length(firstName) <= 15",
        ))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_create_reports_only_the_first_violation() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .args([
            "create",
            "--first-name",
            "",
            "--last-name",
            "Al",
            "--level",
            "13",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("length(firstName)"))
        .stderr(predicate::str::contains("length(lastName)").not())
        .stderr(predicate::str::contains("level <= 12").not());
}

#[test]
fn test_create_with_level_above_cap() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .args([
            "create",
            "--first-name",
            "Lance",
            "--last-name",
            "Skyrunner",
            "--level",
            "13",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("The constraint was not met: level <= 12"));
}

#[test]
fn test_missing_roster_is_not_found() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .args(["roster", "nowhere.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Roster not found"));
}

#[test]
fn test_roster_without_path_is_user_error() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .arg("roster")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("GRIMOIRE_ROSTER"));
}

#[test]
fn test_malformed_roster_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.toml"), "[[players]]\nkey = 3\n").unwrap();

    grimoire(&temp)
        .args(["roster", "broken.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse"))
        .stderr(predicate::str::contains("[[players]]"));
}

#[test]
fn test_unknown_entity_name() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .args(["rules", "--entity", "goblin"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown entity 'goblin'"));
}

#[test]
fn test_unknown_output_format_in_environment() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .env("GRIMOIRE_OUTPUT_FORMAT", "yaml")
        .arg("rules")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn test_missing_explicit_config() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .args(["--config", "missing.toml", "rules"])
        .assert()
        .code(4);
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .args(["config", "get", "defaults.lang"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_missing_required_flag() {
    let temp = TempDir::new().unwrap();
    grimoire(&temp)
        .args(["create", "--first-name", "Lance"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--last-name"));
}
