use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_catalog_json_lists_prizes() {
    let mut cmd = Command::cargo_bin("jewel").unwrap();
    cmd.args(["--config", "/nonexistent/config.yaml", "catalog", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"General Track\""))
        .stdout(predicate::str::contains("Best Use of Gemini API"))
        .stdout(predicate::str::contains("Mechanical Keyboards"));
}

#[test]
fn test_catalog_table_output() {
    let mut cmd = Command::cargo_bin("jewel").unwrap();
    cmd.args(["--config", "/nonexistent/config.yaml", "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prize categories"))
        .stdout(predicate::str::contains("Best .Tech Domain Name"));
}

#[test]
fn test_idea_requires_prize_argument() {
    let mut cmd = Command::cargo_bin("jewel").unwrap();
    cmd.args(["idea", "--track", "General Track"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--prize"));
}
