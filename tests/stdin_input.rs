use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("bfi").unwrap()
}

// These exercise the ',' instruction through the CLI's line-oriented input
// source: one non-negative integer per line, stored as the cell value.

#[test]
fn reads_value_from_stdin_and_echoes_byte() {
    // 90 is 'Z'
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("run")
        .arg(",.")
        .write_stdin("90\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Z"));
}

#[test]
fn invalid_values_are_reprompted_not_fatal() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("run")
        .arg(",.")
        .write_stdin("abc\n300\n65\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A"))
        .stderr(predicate::str::contains("Must be a number"));
}

#[test]
fn closed_stdin_makes_input_fatal() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("run")
        .arg(",")
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input closed"));
}
