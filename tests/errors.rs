use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("bfi").unwrap()
}

#[test]
fn unmatched_open_bracket_fails_before_any_output() {
    // The '.' precedes the bad bracket but must not emit: validation runs
    // before execution. Stdout carries only the readability newline.
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("run")
        .arg(".[+")
        .assert()
        .failure()
        .code(1)
        .stdout("\n")
        .stderr(predicate::str::contains("unmatched bracket '['"));
}

#[test]
fn unmatched_close_bracket_fails() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("run")
        .arg("]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched bracket ']'"));
}

#[test]
fn pointer_underflow_emits_nothing() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("run")
        .arg("<")
        .assert()
        .failure()
        .code(1)
        .stdout("\n")
        .stderr(predicate::str::contains("pointer underflow"));
}

#[test]
fn error_report_points_at_the_raw_source() {
    // The offending '<' sits at char offset 8 of the raw text; the caret
    // report should reference the source offset, not the instruction index.
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("run")
        .arg("comment <")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at source offset 8"));
}
