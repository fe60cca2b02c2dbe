//! Integration tests for the dw-cli binary commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dw() -> Command {
    Command::cargo_bin("dw").unwrap()
}

/// Write a profile TOML into a temp directory.
fn profile_file(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_one_die_by_default() {
    let output = dw().args(["roll", "--json", "--seed", "5"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let faces = value["faces"].as_array().unwrap();
    assert_eq!(faces.len(), 1);
    let face = faces[0].as_u64().unwrap();
    assert!((1..=6).contains(&face));
}

#[test]
fn roll_two_dice() {
    let output = dw()
        .args(["roll", "-n", "2", "--json", "--seed", "9"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let faces = value["faces"].as_array().unwrap();
    assert_eq!(faces.len(), 2);
    for face in faces {
        assert!((1..=6).contains(&face.as_u64().unwrap()));
    }
}

#[test]
fn roll_same_seed_same_result() {
    let a = dw().args(["roll", "-n", "2", "-s", "42"]).output().unwrap();
    let b = dw().args(["roll", "-n", "2", "-s", "42"]).output().unwrap();
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn roll_text_output() {
    dw().args(["roll", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled").and(predicate::str::contains("=")));
}

#[test]
fn roll_rejects_three_dice() {
    dw().args(["roll", "-n", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice count"));
}

// ---------------------------------------------------------------------------
// advise
// ---------------------------------------------------------------------------

#[test]
fn advise_valid_profile() {
    dw().args([
        "advise", "--name", "Alice", "--age", "20", "--mood", "sad", "--stress", "5", "--diet",
        "muscle_gain",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("Your Virtual Mental Health Result")
            .and(predicate::str::contains("Hello, Alice!"))
            .and(predicate::str::contains("dark chocolate"))
            .and(predicate::str::contains("chicken, fish, and legumes")),
    );
}

#[test]
fn advise_missing_fields() {
    dw().args(["advise", "--name", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill out all fields."));
}

#[test]
fn advise_short_name() {
    dw().args([
        "advise", "--name", "Bob", "--age", "10", "--mood", "happy", "--stress", "5", "--diet",
        "weight_loss",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Name must be at least 4 characters."));
}

#[test]
fn advise_young_age() {
    dw().args([
        "advise", "--name", "Alice", "--age", "5", "--mood", "happy", "--stress", "5", "--diet",
        "weight_loss",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Age must be greater than 8."));
}

#[test]
fn advise_stress_out_of_range() {
    dw().args([
        "advise", "--name", "Alice", "--age", "20", "--mood", "happy", "--stress", "11", "--diet",
        "weight_loss",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains(
        "Stress level must be between 1 and 10.",
    ));
}

#[test]
fn advise_unknown_mood() {
    dw().args(["advise", "--mood", "bored"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown mood: bored"));
}

#[test]
fn advise_from_profile_file() {
    let (_dir, path) = profile_file(
        r#"name = "Robin"
age = "33"
mood = "anxious"
stress_level = "7"
diet_goal = "maintain_health"
"#,
    );
    dw().args(["advise", "--json", "-p", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Hello, Robin!")
                .and(predicate::str::contains("omega-3"))
                .and(predicate::str::contains("whole grains")),
        );
}

#[test]
fn advise_flags_override_profile_file() {
    let (_dir, path) = profile_file(
        r#"name = "Robin"
age = "33"
mood = "anxious"
stress_level = "7"
diet_goal = "maintain_health"
"#,
    );
    dw().args(["advise", "-p", path.to_str().unwrap(), "--stress", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stress level must be between 1 and 10."));
}

#[test]
fn advise_bad_profile_file() {
    let (_dir, path) = profile_file("name = [1, 2");
    dw().args(["advise", "-p", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid profile"));
}

// ---------------------------------------------------------------------------
// choices
// ---------------------------------------------------------------------------

#[test]
fn choices_lists_moods_and_goals() {
    dw().arg("choices").assert().success().stdout(
        predicate::str::contains("happy")
            .and(predicate::str::contains("excited"))
            .and(predicate::str::contains("maintain_health"))
            .and(predicate::str::contains("Weight Loss")),
    );
}

// ---------------------------------------------------------------------------
// logging
// ---------------------------------------------------------------------------

#[test]
fn debug_filter_logs_dispatched_command() {
    dw().env("RUST_LOG", "debug")
        .arg("choices")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("dispatching command")
                .and(predicate::str::contains("choices")),
        );
}

#[test]
fn default_filter_keeps_stderr_quiet() {
    dw().env_remove("RUST_LOG")
        .arg("choices")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
