use assert_cmd::Command;
use predicates::prelude::*;

fn cargo_bin() -> Command { Command::cargo_bin("parse-mystery").unwrap() }

#[test]
fn test_no_args_prints_usage() {
    cargo_bin()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_help_exits_zero() {
    cargo_bin()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("-nums <PATH>"));
}

#[test]
fn test_nums_and_path_together_is_usage_error() {
    cargo_bin()
        .args(["-nums", "a.txt", "b.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot use -nums together"));
}
