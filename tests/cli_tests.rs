//! End-to-end tests for the surestake binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const ARB_POSITION: &str = r#"
[[outcome]]
odd = 2.10

[[outcome]]
odd = 2.05
"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

fn surestake() -> Command {
    Command::cargo_bin("surestake").expect("binary builds")
}

#[test]
fn solve_prints_settlement_for_an_arbitrage_position() {
    let dir = TempDir::new().unwrap();
    let position = write_file(&dir, "position.toml", ARB_POSITION);

    surestake()
        .args(["solve", "--file"])
        .arg(&position)
        .assert()
        .success()
        .stdout(predicate::str::contains("96.40"))
        .stdout(predicate::str::contains("guaranteed profit"));
}

#[test]
fn solve_emits_json_with_a_ledger_record() {
    let dir = TempDir::new().unwrap();
    let position = write_file(&dir, "position.toml", ARB_POSITION);

    let output = surestake()
        .args(["solve", "--json", "--label", "derby", "--file"])
        .arg(&position)
        .output()
        .expect("run surestake");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["result"]["arbitrage_percentage"], "96.40");
    assert_eq!(report["result"]["is_arbitrage"], true);
    assert_eq!(report["ledger"]["operation"], "derby");
    assert_eq!(report["ledger"]["legs"].as_array().unwrap().len(), 2);
}

#[test]
fn solve_accepts_inline_odds() {
    surestake()
        .args(["solve", "--odds", "2.10,2.05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("96.40"));
}

#[test]
fn solve_tolerates_malformed_inline_odds() {
    // Silent-fallback policy: garbage parses to "no odd entered" and the
    // neutral result is reported instead of an error.
    surestake()
        .args(["solve", "--odds", "2.10,oops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not computable"));
}

#[test]
fn solve_rejects_a_position_with_two_anchors() {
    let dir = TempDir::new().unwrap();
    let position = write_file(
        &dir,
        "position.toml",
        r#"
        [[outcome]]
        odd = 2.00
        fixed_stake = 100

        [[outcome]]
        odd = 2.00
        fixed_stake = 50
        "#,
    );

    surestake()
        .args(["solve", "--file"])
        .arg(&position)
        .assert()
        .failure()
        .stderr(predicate::str::contains("only one outcome may pin the stake"));
}

#[test]
fn solve_honors_investment_override() {
    let dir = TempDir::new().unwrap();
    let position = write_file(&dir, "position.toml", ARB_POSITION);

    surestake()
        .args(["solve", "--investment", "1000", "--file"])
        .arg(&position)
        .assert()
        .success()
        .stdout(predicate::str::contains("1000.00"));
}

#[test]
fn share_tokens_round_trip_through_the_binary() {
    let dir = TempDir::new().unwrap();
    let position = write_file(&dir, "position.toml", ARB_POSITION);

    let output = surestake()
        .args(["share", "encode", "--file"])
        .arg(&position)
        .output()
        .expect("run surestake");
    assert!(output.status.success());
    let token = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert!(!token.is_empty());

    surestake()
        .args(["share", "decode", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shared position"))
        .stdout(predicate::str::contains("odd 2.10"));
}

#[test]
fn share_decode_rejects_garbage() {
    surestake()
        .args(["share", "decode", "@@@"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base64"));
}

#[test]
fn check_config_accepts_a_valid_file() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.toml",
        r#"
        [logging]
        level = "debug"
        format = "json"

        [solver]
        target_investment = 250
        "#,
    );

    surestake()
        .args(["check", "config", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration is valid"));
}

#[test]
fn check_config_rejects_an_invalid_format() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.toml",
        r#"
        [logging]
        level = "info"
        format = "xml"
        "#,
    );

    surestake()
        .args(["check", "config", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for logging.format"));
}
