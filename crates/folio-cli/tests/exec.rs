use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_exec_help_prints_command_listing() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["exec", "--line", "help"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("> help"))
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("contact-info"))
        .stdout(predicate::str::contains("exit"));
}

#[test]
fn test_exec_is_case_and_whitespace_insensitive() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["exec", "--line", "  WORKHOURS  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("9 AM to 5 PM"));
}

#[test]
fn test_exec_unknown_command_reports_not_found() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["exec", "--line", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Command not found: \"foo\". Type \"help\" to see available commands.",
        ));
}

#[test]
fn test_exec_blank_line_prints_nothing() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["exec", "--line", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_exec_exit_prints_only_the_echo() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["exec", "--line", "exit"])
        .assert()
        .success()
        .stdout("> exit\n");
}

#[test]
fn test_exec_fact_draws_from_the_fixed_list() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["exec", "--line", "fact"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let fact = stdout.lines().nth(1).unwrap();
    assert!(
        folio_core::content::FACTS.contains(&fact),
        "not a known fact: {fact}"
    );
}
