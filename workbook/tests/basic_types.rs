//! Lesson 01: Basic Types.

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cli"))
        .args(args)
        .output()
        .expect("run cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_lowercase()
}

#[test]
fn valid_int_option() {
    let output = run_cli(&["--int-option", "42"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("int: 42\n"));
}

#[test]
fn invalid_int_option() {
    let output = run_cli(&["--int-option", "3.14"]);
    assert!(stderr(&output).contains("invalid value"));
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn valid_float_option() {
    let output = run_cli(&["--float-option", "3.14"]);
    assert!(stdout(&output).contains("float: 3.14\n"));
}

#[test]
fn invalid_float_option() {
    let output = run_cli(&["--float-option", "abcd"]);
    assert!(stderr(&output).contains("invalid value"));
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn valid_bool_option() {
    let output = run_cli(&["--bool-option", "true"]);
    assert!(stdout(&output).contains("bool: true\n"));
}

#[test]
fn invalid_bool_option() {
    let output = run_cli(&["--bool-option", "3.14"]);
    assert!(stderr(&output).contains("invalid value"));
    assert_eq!(output.status.code(), Some(2));
}
