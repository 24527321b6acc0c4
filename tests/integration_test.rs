use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

#[test]
fn exit_immediately() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "6\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Thank you for using the system."));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "5\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("No accounts found."));
}

#[test]
fn create_deposit_withdraw_and_check_balance() {
    let dir = TempDir::new().unwrap();
    let output = run(
        dir.path(),
        "1\nA1\nAlice\nSavings\n2\nA1\n500.00\n3\nA1\n200\n4\nA1\n6\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Account created successfully."));
    assert!(stdout.contains("Deposited 500.00 successfully into account A1."));
    assert!(stdout.contains("Withdrawn 200.00 successfully from account A1."));
    assert!(stdout.contains("Account: A1 | Holder: Alice | Type: Savings | Balance: 300.00"));
}

#[test]
fn withdrawal_past_balance_is_refused() {
    let dir = TempDir::new().unwrap();
    let output = run(
        dir.path(),
        "1\nA1\nAlice\nSavings\n2\nA1\n100\n3\nA1\n1000\n4\nA1\n6\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Insufficient balance"));
    assert!(stdout.contains("Balance: 100.00"));
}

#[test]
fn non_positive_deposit_is_refused() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "1\nA1\nAlice\nSavings\n2\nA1\n-5\n4\nA1\n6\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Amount must be positive."));
    assert!(stdout.contains("Balance: 0.00"));
}

#[test]
fn unparseable_amount_is_refused() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "1\nA1\nAlice\nSavings\n2\nA1\nlots\n4\nA1\n6\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Invalid amount."));
    assert!(stdout.contains("Balance: 0.00"));
}

#[test]
fn duplicate_account_is_refused() {
    let dir = TempDir::new().unwrap();
    let output = run(
        dir.path(),
        "1\nA1\nAlice\nSavings\n1\nA1\nMallory\nCurrent\n6\n",
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Account already exists: A1"));
}

#[test]
fn unknown_account_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "4\nA9\n6\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Account not found: A9"));
}

#[test]
fn invalid_menu_choice_reprompts() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), "9\n6\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Invalid choice. Try again."));
    assert!(stdout.contains("Thank you for using the system."));
}

#[test]
fn state_persists_between_runs() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), "1\nA1\nAlice\nSavings\n2\nA1\n500.00\n6\n");
    assert!(output.status.success());

    let contents = fs::read_to_string(dir.path().join("accounts.txt")).unwrap();
    assert_eq!(contents, "A1,Alice,Savings,500.00\n");

    let output = run(dir.path(), "4\nA1\n6\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Account: A1 | Holder: Alice | Type: Savings | Balance: 500.00"));
}

#[test]
fn malformed_records_are_tolerated() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("accounts.txt"),
        "this is junk\nA1,Alice,Savings,250.00\nB2,Bob,Current,not-a-number\n",
    )
    .unwrap();

    let output = run(dir.path(), "5\n6\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Account: A1 | Holder: Alice | Type: Savings | Balance: 250.00"));
    assert!(!stdout.contains("Holder: Bob"));
}

#[test]
fn store_path_argument_overrides_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("elsewhere.txt");

    let mut cmd = Command::cargo_bin("teller").unwrap();
    let output = cmd
        .arg(&path)
        .current_dir(dir.path())
        .write_stdin("1\nA1\nAlice\nCurrent\n6\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "A1,Alice,Current,0.00\n");
}

fn run(dir: &Path, script: &str) -> Output {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.current_dir(dir).write_stdin(script).output().unwrap()
}
