use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_customer_join"))
}

#[test]
fn shows_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("customer_join"))
        .stdout(predicate::str::contains("--strategy"));
}

#[test]
fn times_default_strategy() {
    cmd()
        .args(["--size", "1_000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hash-join"))
        .stdout(predicate::str::contains("Completed: 1 strategies timed."));
}

#[test]
fn rejects_unknown_strategy() {
    cmd()
        .args(["--strategy", "merge-join"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("merge-join"));
}

#[test]
fn reject_policy_fails_on_duplicates() {
    cmd()
        .args([
            "--size",
            "10",
            "--duplicate-every",
            "5",
            "--on-duplicate",
            "reject",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("customer 4 is ambiguous"));
}
