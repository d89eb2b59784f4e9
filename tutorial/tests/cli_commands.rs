//! CLI tests for the `tutorial` binary.
//!
//! Spawns the binary inside a scratch workspace (with `TUTORIAL_HOME` pointing
//! at its status dir) and verifies exit codes, output, and file effects.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tutorial::core::types::LessonStatus;
use tutorial::exit_codes;
use tutorial::io::paths::HOME_ENV;
use tutorial::test_support::{STARTER_SOURCE, TestWorkspace, solution_source};

fn tutorial(ws: &TestWorkspace, args: &[&str]) -> Output {
    tutorial_with_input(ws, args, "")
}

fn tutorial_with_input(ws: &TestWorkspace, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tutorial"))
        .current_dir(ws.path())
        .env(HOME_ENV, ws.home())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tutorial");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("tutorial output")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn lesson_ids_prints_sorted_ids() {
    let ws = TestWorkspace::new().expect("workspace");

    let output = tutorial(&ws, &["lesson-ids"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "00,01,02,03\n");
}

#[test]
fn passing_lesson_exits_ok_and_records_complete() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config_file("exit 0").expect("config");

    let output = tutorial(&ws, &["lesson", "01"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("Good job!"));
    assert_eq!(
        ws.read_statuses().expect("statuses")["01"],
        LessonStatus::Complete
    );
}

#[test]
fn failing_lesson_exits_two_with_hint() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config_file("exit 1").expect("config");

    let output = tutorial(&ws, &["lesson", "00"]);

    assert_eq!(output.status.code(), Some(exit_codes::LESSON_FAILED));
    let out = stdout(&output);
    assert!(out.contains("Hint: Add a `name: String` field"));
    assert!(out.contains("URL: https://docs.rs/clap"));
    assert_eq!(
        ws.read_statuses().expect("statuses")["00"],
        LessonStatus::InProgress
    );
}

/// The check command receives the lesson's test reference.
#[test]
fn check_command_receives_test_ref() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config_file("test \"$0\" = flags").expect("config");

    let passed = tutorial(&ws, &["lesson", "02"]);
    let failed = tutorial(&ws, &["lesson", "03"]);

    assert_eq!(passed.status.code(), Some(exit_codes::OK));
    assert_eq!(failed.status.code(), Some(exit_codes::LESSON_FAILED));
}

#[test]
fn unknown_lesson_is_usage_error_without_mutation() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config_file("exit 0").expect("config");

    let output = tutorial(&ws, &["lesson", "42"]);

    assert_eq!(output.status.code(), Some(exit_codes::USAGE));
    assert!(stderr(&output).contains("invalid value"));
    assert!(!ws.paths().status_path.exists());
}

#[test]
fn completed_lesson_rerun_declined_aborts() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config_file("exit 1").expect("config");
    ws.write_status_file(r#"{"01":"complete"}"#).expect("status");

    let output = tutorial_with_input(&ws, &["lesson", "01"], "n\n");

    assert_eq!(output.status.code(), Some(exit_codes::FAILURE));
    assert!(stdout(&output).contains("already completed"));
    assert!(stderr(&output).contains("Aborted!"));
    assert_eq!(
        ws.read_statuses().expect("statuses")["01"],
        LessonStatus::Complete
    );
}

#[test]
fn completed_lesson_rerun_confirmed_runs_again() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config_file("exit 1").expect("config");
    ws.write_status_file(r#"{"01":"complete"}"#).expect("status");

    let output = tutorial_with_input(&ws, &["lesson", "01"], "y\n");

    assert_eq!(output.status.code(), Some(exit_codes::LESSON_FAILED));
    assert_eq!(
        ws.read_statuses().expect("statuses")["01"],
        LessonStatus::InProgress
    );
}

#[test]
fn reset_requires_confirmation_unless_yes() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_status_file(r#"{"00":"complete"}"#).expect("status");

    let declined = tutorial(&ws, &["reset"]);
    assert_eq!(declined.status.code(), Some(exit_codes::FAILURE));
    assert_eq!(ws.read_statuses().expect("statuses").len(), 1);

    let forced = tutorial(&ws, &["reset", "--yes"]);
    assert_eq!(forced.status.code(), Some(exit_codes::OK));
    assert!(stdout(&forced).contains("Tutorial reset."));
    assert!(ws.read_statuses().expect("statuses").is_empty());

    let status = tutorial(&ws, &["status"]);
    assert_eq!(stdout(&status).matches("not-started").count(), 4);
}

#[test]
fn solve_copies_solution() {
    let ws = TestWorkspace::new().expect("workspace");

    let output = tutorial(&ws, &["solve", "01"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        fs::read_to_string(ws.workbook_main()).expect("read"),
        solution_source("basic_types")
    );
    assert!(stdout(&output).contains("copy: solutions/basic_types.rs -> workbook/src/main.rs"));
}

#[test]
fn solve_missing_solution_exits_one_and_keeps_workbook() {
    let ws = TestWorkspace::new().expect("workspace");
    fs::remove_file(ws.path().join("solutions/basic_types.rs")).expect("remove");

    let output = tutorial(&ws, &["solve", "01"]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILURE));
    assert!(stdout(&output).contains("solution file not found"));
    assert_eq!(
        fs::read_to_string(ws.workbook_main()).expect("read"),
        STARTER_SOURCE
    );
}

#[test]
fn corrupt_status_file_is_reported() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_status_file("not json").expect("status");

    let output = tutorial(&ws, &["status"]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILURE));
    let err = stderr(&output);
    assert!(err.starts_with("error: load lesson statuses"));
    assert!(err.contains("corrupt"));
    assert_eq!(
        fs::read_to_string(ws.paths().status_path).expect("read"),
        "not json"
    );
}

#[test]
fn failed_status_save_exits_one() {
    let ws = TestWorkspace::new().expect("workspace");
    ws.write_config_file("exit 0").expect("config");
    let status_path = ws.paths().status_path;
    fs::create_dir(status_path.with_extension("json.tmp")).expect("block temp path");

    let output = tutorial(&ws, &["lesson", "01"]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILURE));
    assert!(stderr(&output).starts_with("error: save lesson statuses"));
    assert!(!status_path.exists());
}
