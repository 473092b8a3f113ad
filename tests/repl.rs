use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("bfi").unwrap()
}

#[test]
fn repl_once_executes_the_buffer() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .env("BFI_REPL_ONCE", "1")
        .arg("repl")
        .write_stdin("+++.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{3}"));
}

#[test]
fn repl_filters_comment_text() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .env("BFI_REPL_ONCE", "1")
        .arg("repl")
        .write_stdin("hello + and ++ then emit it with a dot .\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{3}"));
}

#[test]
fn repl_reports_errors_and_stays_clean_on_stdout() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .env("BFI_REPL_ONCE", "1")
        .arg("repl")
        .write_stdin("[\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unmatched bracket"))
        .stdout(predicate::str::contains("unmatched").not());
}

#[test]
fn repl_exits_cleanly_on_empty_stdin() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("repl")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Brainfuck REPL"));
}
