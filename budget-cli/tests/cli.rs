use assert_cmd::Command;
use predicates::prelude::*;

fn budget() -> Command {
    Command::cargo_bin("budget").unwrap()
}

#[test]
fn default_scenario_reports_tax_and_equity() {
    budget()
        .args(["--price", "2400000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₪15,538"))
        .stdout(predicate::str::contains("Israeli resident, only home"))
        .stdout(predicate::str::contains("₪821,708"));
}

#[test]
fn mortgage_above_ceiling_is_clamped_with_a_notice() {
    budget()
        .args(["--price", "2000000", "--mortgage", "1800000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₪1,500,000"))
        .stdout(predicate::str::contains("exceeded the ceiling"));
}

#[test]
fn disabled_broker_contributes_nothing() {
    budget()
        .args(["--price", "2400000", "--no-broker", "--broker-rate", "0.03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₪0 + VAT ₪0"));
}

#[test]
fn export_writes_six_row_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.csv");

    budget()
        .args(["--price", "2400000", "--export"])
        .arg(&path)
        .assert()
        .success();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("item,amount\n"));
    assert!(text.contains("purchase tax,15538\n"));
    assert!(text.contains("required equity,821708\n"));
    assert_eq!(text.lines().count(), 7);
}

#[test]
fn config_file_overrides_vat_rate() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("rates.toml");
    std::fs::write(&config, "vat_rate = 0.0\n").unwrap();

    budget()
        .args(["--price", "2400000", "--no-consultant", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("₪48,000 + VAT ₪0"));
}

#[test]
fn negative_price_fails_with_a_clear_message() {
    budget()
        .args(["--price=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}
