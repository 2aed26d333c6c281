// cli_flow.rs — End-to-end test of the `longterm` binary.
//
// Flow:
//   1. longterm add → goal persisted under --data-dir
//   2. longterm list --json → the goal is active
//   3. longterm complete / restore / delete
//   4. unknown ids fail with a non-zero exit code
//   5. config and theme print the effective settings

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn longterm(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_longterm"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn listed(data_dir: &Path, filter: &[&str]) -> Vec<serde_json::Value> {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(filter);
    let output = longterm(data_dir, &args);
    assert!(output.status.success());
    serde_json::from_str(&stdout(&output)).unwrap()
}

#[test]
fn goal_lifecycle_through_the_cli() {
    let dir = TempDir::new().unwrap();

    let output = longterm(dir.path(), &["add", "Learn", "Rust"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Goal added"));
    assert!(dir.path().join("longterm-goals.json").exists());

    let goals = listed(dir.path(), &[]);
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["title"], "Learn Rust");
    assert_eq!(goals[0]["completed"], false);
    assert!(goals[0]["completedAt"].is_null());
    let id = goals[0]["id"].as_i64().unwrap().to_string();

    assert!(longterm(dir.path(), &["complete", &id]).status.success());
    assert!(listed(dir.path(), &["--active"]).is_empty());
    let completed = listed(dir.path(), &["--completed"]);
    assert_eq!(completed.len(), 1);
    assert!(completed[0]["completedAt"].is_string());

    assert!(longterm(dir.path(), &["restore", &id]).status.success());
    assert_eq!(listed(dir.path(), &["--active"]).len(), 1);

    assert!(longterm(dir.path(), &["delete", &id]).status.success());
    assert!(listed(dir.path(), &[]).is_empty());
}

#[test]
fn unknown_id_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    for cmd in ["complete", "restore", "delete"] {
        let output = longterm(dir.path(), &[cmd, "42"]);
        assert!(!output.status.success(), "{cmd} should fail");
        assert!(String::from_utf8_lossy(&output.stderr).contains("Goal not found: 42"));
    }
}

#[test]
fn active_and_completed_flags_conflict() {
    let dir = TempDir::new().unwrap();
    let output = longterm(dir.path(), &["list", "--active", "--completed"]);
    assert!(!output.status.success());
}

#[test]
fn table_output_for_empty_store() {
    let dir = TempDir::new().unwrap();
    let output = longterm(dir.path(), &["list"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No goals found.\n");
}

#[test]
fn config_key_changes_the_slot_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[storage]\nkey = \"side-projects\"\n",
    )
    .unwrap();

    assert!(longterm(dir.path(), &["add", "Build a shed"]).status.success());
    assert!(dir.path().join("side-projects.json").exists());
    assert!(!dir.path().join("longterm-goals.json").exists());
}

#[test]
fn malformed_slot_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("longterm-goals.json"), "{oops").unwrap();

    let output = longterm(dir.path(), &["list"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("serialization error"));
}

#[test]
fn zero_byte_slot_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("longterm-goals.json"), "").unwrap();

    let output = longterm(dir.path(), &["add", "Start over"]);
    assert!(output.status.success());
    let goals = listed(dir.path(), &[]);
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["title"], "Start over");
}

#[test]
fn config_and_theme_print_defaults() {
    let dir = TempDir::new().unwrap();

    let output = longterm(dir.path(), &["config"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[window]"));
    assert!(text.contains("width = 400"));
    assert!(text.contains("key = \"longterm-goals\""));

    let output = longterm(dir.path(), &["theme"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("ios-blue"));
    assert!(text.contains("#34C759"));
}
