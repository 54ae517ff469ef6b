use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run the binary against an isolated config directory
fn expense(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_CLI_CONFIG_DIR", config_dir.path())
        .env("EXPENSE_LOG", "off");
    cmd
}

#[test]
fn report_without_expenses_shows_empty_message() {
    let config_dir = TempDir::new().unwrap();

    expense(&config_dir)
        .args(["report", "--budget", "Food=500"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No expenses recorded yet. Start adding expenses above!",
        ))
        .stdout(predicate::str::contains("Key Metrics").not());
}

#[test]
fn report_aggregates_expenses() {
    let config_dir = TempDir::new().unwrap();

    expense(&config_dir)
        .args([
            "report",
            "--expense",
            "2024-01-05,Food,20",
            "--expense",
            "2024-01-05,Transport,10",
            "--expense",
            "2024-02-01,Food,5",
            "--budget",
            "Food=10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense History"))
        .stdout(predicate::str::contains("2024-01"))
        .stdout(predicate::str::contains("$30.00"))
        .stdout(predicate::str::contains("$35.00"))
        .stdout(predicate::str::contains("-$15.00"));
}

#[test]
fn report_accepts_lowercase_categories_and_dollar_signs() {
    let config_dir = TempDir::new().unwrap();

    expense(&config_dir)
        .args(["report", "-e", "2024-03-10,rent,$1200", "-b", "rent=$1,500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,200.00"))
        .stdout(predicate::str::contains("$300.00"));
}

#[test]
fn report_exports_csv() {
    let config_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let path = out_dir.path().join("expenses.csv");

    expense(&config_dir)
        .args([
            "report",
            "--expense",
            "2024-02-01,Food,5",
            "--expense",
            "2024-01-05,Utilities,42.5",
            "--export",
        ])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 expense(s)"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "Date,Category,Amount\n2024-02-01,Food,5.00\n2024-01-05,Utilities,42.50\n"
    );
}

#[test]
fn report_rejects_negative_amount() {
    let config_dir = TempDir::new().unwrap();

    expense(&config_dir)
        .args(["report", "--expense", "2024-01-05,Food,-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 0"));
}

#[test]
fn report_rejects_unknown_category() {
    let config_dir = TempDir::new().unwrap();

    expense(&config_dir)
        .args(["report", "--expense", "2024-01-05,Groceries,3"])
        .assert()
        .failure();
}

#[test]
fn report_rejects_bad_date() {
    let config_dir = TempDir::new().unwrap();

    expense(&config_dir)
        .args(["report", "--expense", "2024-13-40,Food,3"])
        .assert()
        .failure();
}

#[test]
fn categories_lists_all_five() {
    let config_dir = TempDir::new().unwrap();

    let assert = expense(&config_dir).arg("categories").assert().success();
    for name in ["Food", "Transport", "Entertainment", "Rent", "Utilities"] {
        assert_eq_contains(&assert, name);
    }
}

fn assert_eq_contains(assert: &assert_cmd::assert::Assert, needle: &str) {
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(needle), "missing {needle} in:\n{stdout}");
}

#[test]
fn config_shows_paths() {
    let config_dir = TempDir::new().unwrap();

    expense(&config_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("expenses.csv"));

    assert!(!config_dir.path().join("config.json").exists());
}

#[test]
fn config_init_writes_settings() {
    let config_dir = TempDir::new().unwrap();

    expense(&config_dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written"));

    let written = std::fs::read_to_string(config_dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"export_file_name\": \"expenses.csv\""));
}
