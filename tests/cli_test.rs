use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_end_to_end_with_simulated_bank() -> Result<(), Box<dyn std::error::Error>> {
    let year = common::next_year().to_string();
    let mut csv = tempfile::NamedTempFile::new()?;
    common::write_requests_csv(
        &mut csv,
        &[
            ["2222405343248877", "4", year.as_str(), "GBP", "100", "123"],
            ["2222405343248112", "12", year.as_str(), "USD", "60000", "4567"],
            ["123", "4", year.as_str(), "GBP", "100", "123"],
        ],
    )?;

    let mut cmd = Command::new(cargo_bin!("payauth"));
    cmd.arg(csv.path()).env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "id,status,last_four_card_digits,expiry_month,expiry_year,currency,amount",
        ))
        .stdout(predicate::str::contains(format!(
            ",authorized,8877,4,{year},GBP,100"
        )))
        .stdout(predicate::str::contains(format!(
            ",declined,8112,12,{year},USD,60000"
        )))
        .stdout(predicate::str::contains(",rejected,,,,,"))
        .stdout(predicate::str::contains("2222405343248877").not());

    Ok(())
}

#[test]
fn test_cli_unavailable_bank_writes_no_row() -> Result<(), Box<dyn std::error::Error>> {
    let year = common::next_year().to_string();
    let mut csv = tempfile::NamedTempFile::new()?;
    common::write_requests_csv(
        &mut csv,
        &[["2222405343248870", "4", year.as_str(), "GBP", "100", "123"]],
    )?;

    let mut cmd = Command::new(cargo_bin!("payauth"));
    cmd.arg(csv.path()).env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error processing payment"))
        .stdout(predicate::str::contains("8870").not());

    Ok(())
}

#[test]
fn test_cli_configured_currencies() -> Result<(), Box<dyn std::error::Error>> {
    let year = common::next_year().to_string();
    let mut csv = tempfile::NamedTempFile::new()?;
    common::write_requests_csv(
        &mut csv,
        &[
            ["2222405343248877", "4", year.as_str(), "JPY", "100", "123"],
            ["2222405343248877", "4", year.as_str(), "GBP", "100", "123"],
        ],
    )?;

    let mut cmd = Command::new(cargo_bin!("payauth"));
    cmd.arg(csv.path())
        .arg("--currencies")
        .arg("JPY")
        .env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            ",authorized,8877,4,{year},JPY,100"
        )))
        .stdout(predicate::str::contains(",rejected,,,,,"))
        .stdout(predicate::str::contains("GBP").not());

    Ok(())
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("payauth"));
    cmd.arg("does/not/exist.csv");

    cmd.assert().failure();
}
