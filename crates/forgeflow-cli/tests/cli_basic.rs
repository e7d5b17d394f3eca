//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against its own data directory and
//! checks the JSON it prints.

use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Run a CLI command against `home` and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_forgeflow"))
        .env("FORGEFLOW_HOME", home)
        .env_remove("FORGEFLOW_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(home: &Path, args: &[&str]) -> Value {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "{args:?} failed: {stderr}");
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("{args:?} printed non-JSON ({e}): {stdout}"))
}

#[test]
fn test_workout_add_renders_details() {
    let home = TempDir::new().unwrap();
    let out = run_json(
        home.path(),
        &["workout", "add", "Squat", "--sets", "3", "--reps", "10", "--weight", "60"],
    );
    assert_eq!(out["outcome"], "added");
    assert_eq!(out["index"], 0);
    assert_eq!(out["record"]["text"], "Squat: 3 sets, 10 reps, 60kg");
    assert_eq!(out["record"]["completed"], false);
}

#[test]
fn test_workout_add_prints_quote() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["workout", "add", "Lunges"]);
    assert_eq!(code, 0);
    assert!(forgeflow_core::motivation::QUOTES
        .iter()
        .any(|q| stderr.contains(q)));
}

#[test]
fn test_config_reset_restores_defaults() {
    let home = TempDir::new().unwrap();
    run_json(home.path(), &["config", "set", "log.filter", "debug"]);
    let reset = run_json(home.path(), &["config", "reset"]);
    assert_eq!(reset["log"]["filter"], "warn");
    let list = run_json(home.path(), &["config", "list"]);
    assert_eq!(list["storage"]["database"], "forgeflow.db");
}

#[test]
fn test_complete_counts_toward_progress() {
    let home = TempDir::new().unwrap();
    run_json(home.path(), &["workout", "add", "Bench press"]);
    let done = run_json(home.path(), &["workout", "done", "0"]);
    assert_eq!(done["outcome"], "completion_changed");
    assert_eq!(done["changed"], true);
    assert_eq!(done["streak"], "started");

    let progress = run_json(home.path(), &["progress"]);
    assert_eq!(progress["today"], 1);
    assert_eq!(progress["week"], 1);
    assert_eq!(progress["month"], 1);

    let chest = run_json(home.path(), &["progress", "--filter", "chest"]);
    assert_eq!(chest["today"], 1);
    let legs = run_json(home.path(), &["progress", "--filter", "legs"]);
    assert_eq!(legs["today"], 0);
}

#[test]
fn test_clear_keeps_completed_in_progress() {
    let home = TempDir::new().unwrap();
    run_json(home.path(), &["workout", "add", "Plank"]);
    run_json(home.path(), &["workout", "add", "Jog"]);
    run_json(home.path(), &["workout", "done", "0"]);

    let cleared = run_json(home.path(), &["workout", "clear"]);
    assert_eq!(cleared["removed"], 2);
    // Completion already archived the plank.
    assert_eq!(cleared["archived"], 0);

    let list = run_json(home.path(), &["workout", "list"]);
    assert_eq!(list.as_array().map(Vec::len), Some(0));
    let progress = run_json(home.path(), &["progress"]);
    assert_eq!(progress["today"], 1);
}

#[test]
fn test_delete_completed_unarchives() {
    let home = TempDir::new().unwrap();
    run_json(home.path(), &["workout", "add", "Deadlift"]);
    run_json(home.path(), &["workout", "done", "0"]);

    let deleted = run_json(home.path(), &["workout", "delete", "0"]);
    assert_eq!(deleted["unarchived"], true);
    let progress = run_json(home.path(), &["progress"]);
    assert_eq!(progress["today"], 0);
}

#[test]
fn test_edit_keeps_unspecified_fields() {
    let home = TempDir::new().unwrap();
    run_json(home.path(), &["workout", "add", "Squat", "--sets", "3", "--reps", "10"]);
    let edited = run_json(home.path(), &["workout", "edit", "0", "--reps", "12"]);
    assert_eq!(edited["record"]["text"], "Squat: 3 sets, 12 reps");
}

#[test]
fn test_out_of_range_index_fails() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["workout", "done", "5"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_goal_tracking() {
    let home = TempDir::new().unwrap();
    let unset = run_json(home.path(), &["goal", "show"]);
    assert_eq!(unset["status"], "not_set");

    run_json(home.path(), &["workout", "add", "Jog"]);
    run_json(home.path(), &["workout", "done", "0"]);
    let goal = run_json(home.path(), &["goal", "set", "2", "--period", "monthly"]);
    assert_eq!(goal["status"], "tracking");
    assert_eq!(goal["count"], 1);
    assert_eq!(goal["percent"], 50);
    assert_eq!(goal["achieved"], false);

    let cleared = run_json(home.path(), &["goal", "clear"]);
    assert_eq!(cleared["status"], "not_set");
}

#[test]
fn test_streak_and_reset() {
    let home = TempDir::new().unwrap();
    run_json(home.path(), &["workout", "add", "Burpees"]);
    run_json(home.path(), &["workout", "done", "0"]);
    let streak = run_json(home.path(), &["streak"]);
    assert_eq!(streak["current_streak"], 1);

    let (_, _, code) = run_cli(home.path(), &["reset"]);
    assert_eq!(code, 1, "reset must require --yes");

    let reset = run_json(home.path(), &["reset", "--yes"]);
    assert_eq!(reset["outcome"], "progress_reset");
    let streak = run_json(home.path(), &["streak"]);
    assert_eq!(streak["current_streak"], 0);
    let progress = run_json(home.path(), &["progress"]);
    assert_eq!(progress["month"], 0);
}

#[test]
fn test_chart_uses_saved_preferences() {
    let home = TempDir::new().unwrap();
    let empty = run_json(home.path(), &["chart"]);
    assert_eq!(empty["labels"][0], "No Data");

    run_json(home.path(), &["prefs", "set", "--time-view", "yearly", "--chart-type", "pie"]);
    let prefs = run_json(home.path(), &["prefs", "show"]);
    assert_eq!(prefs["time_view"], "yearly");
    assert_eq!(prefs["chart_type"], "pie");

    run_json(home.path(), &["workout", "add", "Row"]);
    run_json(home.path(), &["workout", "done", "0"]);
    let chart = run_json(home.path(), &["chart"]);
    assert_eq!(chart["labels"].as_array().map(Vec::len), Some(12));

    let weekly = run_json(home.path(), &["chart", "--view", "weekly"]);
    assert_eq!(weekly["labels"][0], "Mon");
}

#[test]
fn test_profile_and_suggest() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["suggest"]);
    assert_eq!(code, 0);
    assert!(!stdout.trim().is_empty());

    let saved = run_json(
        home.path(),
        &["profile", "set", "--goal", "Build Strength", "--level", "beginner", "--body-part", "legs"],
    );
    assert_eq!(saved["outcome"], "profile_saved");
    assert_eq!(saved["profile"]["level"], "beginner");

    let (stdout, _, code) = run_cli(home.path(), &["suggest"]);
    assert_eq!(code, 0);
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_get_set() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "log.filter"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "warn");

    let set = run_json(home.path(), &["config", "set", "display.progress_style", "compact"]);
    assert_eq!(set["key"], "display.progress_style");
    assert_eq!(set["value"], "compact");
    let (stdout, _, code) = run_cli(home.path(), &["progress"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Today: 0 | Week: 0 | Month: 0");

    let (_, _, code) = run_cli(home.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
}
