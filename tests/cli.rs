use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn smartdo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("smartdo").unwrap();
    cmd.env("SMARTDO_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("QUOTE_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ===== Add Tests =====

#[test]
fn test_add_interprets_example_sentence() {
    let home = TempDir::new().unwrap();

    let value = json_output(smartdo(&home).args([
        "add",
        "Submit report by 15/03/2025 5pm high priority",
        "--output",
        "json",
    ]));

    assert_eq!(value["created"], true);
    assert_eq!(value["task"]["title"], "Submit report");
    assert_eq!(value["task"]["due"], "2025-03-15 17:00");
    assert_eq!(value["task"]["priority"], "high");
    assert_eq!(value["task"]["status"], "pending");

    assert!(home.path().join("tasks.json").exists());
}

#[test]
fn test_add_parse_only_does_not_create_file() {
    let home = TempDir::new().unwrap();

    smartdo(&home)
        .args(["add", "buy", "milk", "--parse-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk"));

    assert!(!home.path().join("tasks.json").exists());
}

// ===== List Tests =====

#[test]
fn test_list_missing_file_is_empty() {
    let home = TempDir::new().unwrap();

    smartdo(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks (0 items)"));
}

#[test]
fn test_add_then_list() {
    let home = TempDir::new().unwrap();

    smartdo(&home).args(["add", "water plants"]).assert().success();
    smartdo(&home).args(["add", "pay rent on 2025-04-01 priority: low"]).assert().success();

    let value = json_output(smartdo(&home).args(["list", "-o", "json"]));
    assert_eq!(value["count"], 2);
    assert_eq!(value["items"][0]["title"], "water plants");
    assert_eq!(value["items"][1]["title"], "pay rent");
    assert_eq!(value["items"][1]["due"], "2025-04-01 00:00");
    assert_eq!(value["items"][1]["priority"], "low");
}

#[test]
fn test_file_flag_overrides_location() {
    let home = TempDir::new().unwrap();
    let other = home.path().join("other").join("list.json");

    smartdo(&home)
        .args(["add", "stretch", "--file"])
        .arg(&other)
        .assert()
        .success();

    assert!(other.exists());
    assert!(!home.path().join("tasks.json").exists());
}

#[test]
fn test_without_home_uses_current_directory() {
    let workdir = TempDir::new().unwrap();

    Command::cargo_bin("smartdo")
        .unwrap()
        .env_remove("SMARTDO_HOME")
        .env_remove("HOME")
        .env("NO_COLOR", "1")
        .current_dir(workdir.path())
        .args(["add", "water plants"])
        .assert()
        .success();

    assert!(workdir.path().join(".smartdo").join("tasks.json").exists());
}

#[test]
fn test_filter() {
    let home = TempDir::new().unwrap();
    smartdo(&home).args(["add", "write report"]).assert().success();
    smartdo(&home).args(["add", "buy milk"]).assert().success();

    let value = json_output(smartdo(&home).args(["filter", "MILK", "-o", "json"]));
    assert_eq!(value["count"], 1);
    assert_eq!(value["items"][0]["position"], 2);
}

// ===== Edit / Done / Delete Tests =====

#[test]
fn test_done_and_delete() {
    let home = TempDir::new().unwrap();
    smartdo(&home).args(["add", "first"]).assert().success();
    smartdo(&home).args(["add", "second"]).assert().success();

    smartdo(&home)
        .args(["done", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second"));

    smartdo(&home).args(["delete", "1"]).assert().success();

    let value = json_output(smartdo(&home).args(["list", "-o", "json"]));
    assert_eq!(value["count"], 1);
    assert_eq!(value["items"][0]["title"], "second");
    assert_eq!(value["items"][0]["status"], "done");
}

#[test]
fn test_edit_reports_rejected_fields() {
    let home = TempDir::new().unwrap();
    smartdo(&home).args(["add", "draft slides"]).assert().success();

    smartdo(&home)
        .args(["edit", "1", "--title", "final slides", "--due", "next week"])
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid due"));

    let value = json_output(smartdo(&home).args(["list", "-o", "json"]));
    assert_eq!(value["items"][0]["title"], "final slides");
    assert_eq!(value["items"][0]["due"], Value::Null);
}

#[test]
fn test_bad_position_fails() {
    let home = TempDir::new().unwrap();
    smartdo(&home).args(["add", "only task"]).assert().success();

    smartdo(&home)
        .args(["done", "5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error").and(predicate::str::contains("position 5")));
}

#[test]
fn test_malformed_task_file_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("tasks.json"), "{ not json").unwrap();

    smartdo(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));
}

// ===== Quote / Completions Tests =====

#[test]
fn test_quote_without_key_uses_fallback() {
    let home = TempDir::new().unwrap();

    smartdo(&home)
        .arg("quote")
        .assert()
        .success()
        .stdout(predicate::str::contains(" — "));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();

    smartdo(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("smartdo"));
}
