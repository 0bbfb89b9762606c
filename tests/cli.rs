use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn receipt(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("receipt").unwrap();
    cmd.env("RECEIPT_CLI_DATA_DIR", dir.path());
    cmd
}

fn generate(dir: &TempDir, amount: &str) -> assert_cmd::assert::Assert {
    receipt(dir)
        .args([
            "generate",
            "--name",
            "Asha Patel",
            "--date",
            "2024-01-01",
            "--city",
            "Surat",
            "--received-by",
            "Mahesh",
            "--donation",
        ])
        .arg(format!("rasoi={}", amount))
        .assert()
}

#[test]
fn words_prints_indian_numbering() {
    let dir = TempDir::new().unwrap();
    receipt(&dir)
        .args(["words", "105"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rs. One Hundred and Five Only"));

    receipt(&dir)
        .args(["words", "10000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("One Crore Only"));
}

#[test]
fn generate_issues_sequential_receipts() {
    let dir = TempDir::new().unwrap();

    generate(&dir, "100")
        .success()
        .stdout(predicate::str::contains("Receipt No: RN-0001"))
        .stdout(predicate::str::contains("One Hundred Only"));

    generate(&dir, "250")
        .success()
        .stdout(predicate::str::contains("Issued receipt RN-0002"));

    receipt(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("RN-0001"))
        .stdout(predicate::str::contains("RN-0002"))
        .stdout(predicate::str::contains("Receipts: 2"));
}

#[test]
fn invalid_form_is_rejected_without_consuming_a_number() {
    let dir = TempDir::new().unwrap();

    receipt(&dir)
        .args(["generate", "--city", "Surat", "--donation", "utsav=0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name is required"))
        .stderr(predicate::str::contains("amount must be greater than zero"));

    generate(&dir, "100")
        .success()
        .stdout(predicate::str::contains("RN-0001"));
}

#[test]
fn dry_run_does_not_advance_counter() {
    let dir = TempDir::new().unwrap();

    receipt(&dir)
        .args([
            "generate", "-n", "A", "-d", "2024-01-01", "-c", "B", "-r", "C", "--donation",
            "utsav=10", "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    receipt(&dir)
        .args(["counter", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next receipt number: RN-0001"));
}

#[test]
fn counter_set_controls_next_number() {
    let dir = TempDir::new().unwrap();

    receipt(&dir)
        .args(["counter", "set", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RN-0007"));

    generate(&dir, "100")
        .success()
        .stdout(predicate::str::contains("RN-0007"));

    receipt(&dir)
        .args(["counter", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Counter:             8"));

    receipt(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Receipt RN-0007"));
}

#[test]
fn payload_and_show_find_issued_receipt() {
    let dir = TempDir::new().unwrap();
    generate(&dir, "100").success();

    receipt(&dir)
        .args(["payload", "rn-0001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("receipt_no=RN-0001"))
        .stdout(predicate::str::contains("name=Asha+Patel"));

    receipt(&dir)
        .args(["show", "RN-0042"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Receipt not found: RN-0042"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    generate(&dir, "1500").success();

    let output = dir.path().join("receipts.csv");
    receipt(&dir)
        .args(["export", "--format", "csv"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 receipts"));

    let contents = std::fs::read_to_string(output).unwrap();
    assert!(contents.starts_with("Receipt No,Date,Name"));
    assert!(contents.contains("One Thousand Five Hundred Only"));
}

#[test]
fn unknown_category_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    receipt(&dir)
        .args(["generate", "--donation", "lunch=5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown donation category"));
}

#[test]
fn init_writes_settings_and_records_it() {
    let dir = TempDir::new().unwrap();

    receipt(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(dir.path().join("config.json").exists());

    receipt(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Settings settings"));
}

#[test]
fn broken_date_format_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    receipt(&dir)
        .args([
            "generate",
            "--name",
            "Asha Patel",
            "--city",
            "Surat",
            "--received-by",
            "Mahesh",
            "--donation",
            "rasoi=100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn oversized_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    generate(&dir, "90000000000000000")
        .failure()
        .stderr(predicate::str::contains("amount is too large"));

    receipt(&dir)
        .args(["counter", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next receipt number: RN-0001"));
}
