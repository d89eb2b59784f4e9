//! Lesson 02: Flags.

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

#[test]
fn shout_uppercases_greeting() {
    let output = run_cli(&["--shout", "--name", "Ada"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("HELLO, ADA!\n"));
}

#[test]
fn shout_takes_no_value() {
    let output = run_cli(&["--shout=yes"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn repeated_verbose_is_counted() {
    let output = run_cli(&["-v", "--verbose", "-v"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("verbosity: 3\n"));
}

#[test]
fn quiet_by_default() {
    let output = run_cli(&[]);
    assert!(output.status.success());
    assert!(!stdout(&output).contains("verbosity"));
}
