use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", dir.path())
        .env_remove("EXPENSE_TRACKER_LOG");
    cmd
}

#[test]
fn categories_lists_every_category() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transportation"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Entertainment"));
}

#[test]
fn config_shows_paths_and_default_budget() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Monthly budget:  5000"));
}

#[test]
fn budget_flag_overrides_settings() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["config", "--budget", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget:  1200"));
}

#[test]
fn non_positive_budget_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["config", "--budget=0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget must be a positive number"));
}

#[test]
fn init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings to"));

    let contents = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"monthly_budget\": 5000.0"));
}

#[test]
fn read_only_commands_leave_no_files() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("expenses");
    for command in ["categories", "config"] {
        Command::cargo_bin("expenses")
            .unwrap()
            .env("EXPENSE_TRACKER_DIR", &base)
            .arg(command)
            .assert()
            .success();
    }
    assert!(!base.exists());
}
