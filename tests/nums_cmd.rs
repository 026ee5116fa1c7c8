use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command { Command::cargo_bin("parse-mystery").unwrap() }

fn write_tempfile(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn test_nums_prints_list_for_fixture() {
    cargo_bin()
        .arg("-nums").arg("tests/data/3lines.txt")
        .assert()
        .success()
        .stdout("[800, 600, 64, 63, 61, 60, 74, 81, 55, 56]\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_double_dash_nums_is_accepted() {
    let tf = write_tempfile("12$34^\n123^$123$^\n");
    cargo_bin()
        .arg("--nums").arg(tf.path())
        .assert()
        .success()
        .stdout("[21, 321]\n");
}

#[test]
fn test_nums_without_digits_prints_empty_list() {
    let tf = write_tempfile("no numbers $ here ^\n\n");
    cargo_bin()
        .arg("-nums").arg(tf.path())
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_nums_debug_logging_goes_to_stderr() {
    cargo_bin()
        .env("PARSE_MYSTERY_LOG", "debug")
        .arg("-nums").arg("tests/data/3lines.txt")
        .assert()
        .success()
        .stdout("[800, 600, 64, 63, 61, 60, 74, 81, 55, 56]\n")
        .stderr(predicate::str::contains("parsed 10 numbers"));
}
