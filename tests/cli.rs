use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finwise(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finwise").unwrap();
    cmd.env("FINWISE_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

/// Pull the "ID:" value out of command output
fn printed_id(output: &[u8]) -> String {
    String::from_utf8_lossy(output)
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID:"))
        .map(|id| id.trim().to_string())
        .unwrap()
}

#[test]
fn loan_calculator_prints_payment() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["calc", "loan", "10000", "5", "36"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$299.71"))
        .stdout(predicate::str::contains("$789.52"));
}

#[test]
fn loan_calculator_rejects_zero_principal() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["calc", "loan", "0", "5", "36"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for principal"));
}

#[test]
fn invest_calculator_prints_final_value() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["calc", "invest", "5000", "200", "7", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$44665.27"))
        .stdout(predicate::str::contains("$29000.00"));
}

#[test]
fn invest_calculator_caps_the_horizon() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["calc", "invest", "5000", "200", "7", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot exceed 100"));
}

#[test]
fn init_creates_data_files() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn transactions_are_listed_after_adding() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args([
            "transaction",
            "add",
            "expense",
            "42.50",
            "food",
            "--date",
            "2025-01-15",
            "--description",
            "Groceries",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$42.50"));

    finwise(&dir)
        .args(["transaction", "list", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Showing 1 transactions"));
}

#[test]
fn unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["transaction", "add", "expense", "10", "yachts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn oversized_amount_is_rejected_and_summary_still_runs() {
    let dir = TempDir::new().unwrap();
    for _ in 0..2 {
        finwise(&dir)
            .args(["transaction", "add", "income", "50000000000000000", "salary"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("exceeds the maximum"));
    }

    finwise(&dir).arg("summary").assert().success();
}

#[test]
fn corrupt_data_file_names_the_file() {
    let dir = TempDir::new().unwrap();
    finwise(&dir).arg("init").assert().success();
    std::fs::write(dir.path().join("data").join("transactions.json"), "{ broken").unwrap();

    finwise(&dir)
        .args(["transaction", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("transactions.json"));
}

#[test]
fn income_category_cannot_hold_an_expense() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["transaction", "add", "expense", "10", "salary"])
        .assert()
        .failure();
}

#[test]
fn budget_status_flags_overspending() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["budget", "set", "food", "100", "--month", "2025-02"])
        .assert()
        .success();
    finwise(&dir)
        .args(["txn", "add", "expense", "120", "food", "-d", "2025-02-03"])
        .assert()
        .success();

    finwise(&dir)
        .args(["budget", "status", "--month", "2025-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Over budget"))
        .stdout(predicate::str::contains("120%"));
}

#[test]
fn setting_a_budget_twice_replaces_the_limit() {
    let dir = TempDir::new().unwrap();
    for limit in ["100", "250"] {
        finwise(&dir)
            .args(["budget", "set", "housing", limit, "--month", "2025-03"])
            .assert()
            .success();
    }

    finwise(&dir)
        .args(["budget", "status", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$250.00"))
        .stdout(predicate::str::contains("$100.00").not());
}

#[test]
fn goal_contribution_updates_progress() {
    let dir = TempDir::new().unwrap();
    let output = finwise(&dir)
        .args(["goal", "add", "Emergency fund", "1000"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = printed_id(&output.stdout);

    finwise(&dir)
        .args(["goal", "contribute", &id, "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$250.00 of $1000.00 (25%)"));

    finwise(&dir)
        .args(["goal", "contribute", &id, "-500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00 of $1000.00"));
}

#[test]
fn delete_requires_force() {
    let dir = TempDir::new().unwrap();
    let output = finwise(&dir)
        .args(["transaction", "add", "income", "3000", "salary"])
        .output()
        .unwrap();
    let id = printed_id(&output.stdout);

    finwise(&dir)
        .args(["transaction", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));

    finwise(&dir)
        .args(["transaction", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    finwise(&dir)
        .args(["transaction", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn learn_filters_by_topic() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["learn", "--topic", "debt", "--difficulty", "beginner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start Small with Debt Repayment"))
        .stdout(predicate::str::contains("Master the 50/30/20 Rule").not());
}

#[test]
fn dashboard_runs_on_empty_data() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["dashboard", "--month", "2025-01"])
        .assert()
        .success();
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    finwise(&dir)
        .args(["txn", "add", "income", "1500", "freelance", "-d", "2025-04-01"])
        .assert()
        .success();

    let out = dir.path().join("export.csv");
    finwise(&dir)
        .args(["export", out.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("ID,Date,Type,Category"));
    assert!(csv.contains("2025-04-01,Income,Freelance,freelance,,1500.00"));
}
