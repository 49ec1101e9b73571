use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

mod common;

#[test]
fn test_batch_fixture() {
    let mut cmd = Command::new(cargo_bin!("salestax"));
    cmd.args(["batch", "tests/fixtures/items.csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "base_value,category,taxes,total_tax,total_value",
        ))
        .stdout(predicate::str::contains("1000,Basic Foods,VAT 5%=50,50,1050"))
        .stdout(predicate::str::contains(
            "2000,Liquors,VAT 19%=380;Liquor Tax=500,880,2880",
        ))
        .stdout(predicate::str::contains(
            "1234.56789,Plastic Bags,VAT 19%=234.5678991;Plastic Bag Tax=246.913578,481.4814771,1716.0493671",
        ))
        .stdout(predicate::str::contains(
            "10000000,Fuels,VAT 19%=1900000;National Consumption Tax=800000,2700000,12700000",
        ))
        .stdout(predicate::str::contains(
            "150000,Public Utilities,Exempt=0,0,150000",
        ))
        .stdout(predicate::str::contains("5000,Other,VAT 19%=950,950,5950"));
}

#[test]
fn test_batch_skips_malformed_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "base_value, category").unwrap();
    writeln!(file, "100, Other").unwrap();
    writeln!(file, "not_a_number, Other").unwrap(); // Unreadable
    writeln!(file, "0, Other").unwrap(); // Rejected by the engine
    writeln!(file, "100, Toys").unwrap(); // Unknown category
    writeln!(file, "200, fuels").unwrap();

    let mut cmd = Command::new(cargo_bin!("salestax"));
    cmd.arg("batch").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading item"))
        .stderr(predicate::str::contains(
            "Error computing taxes: base value must be greater than 0",
        ))
        .stderr(predicate::str::contains(
            "Error computing taxes: invalid category: Toys",
        ))
        .stdout(predicate::str::contains("100,Other,VAT 19%=19,19,119"))
        .stdout(predicate::str::contains(
            "200,Fuels,VAT 19%=38;National Consumption Tax=16,54,254",
        ))
        .stdout(predicate::str::contains("Toys").not());
}

#[test]
fn test_batch_missing_file() {
    let mut cmd = Command::new(cargo_bin!("salestax"));
    cmd.args(["batch", "tests/fixtures/does_not_exist.csv"]);

    cmd.assert().failure();
}

#[test]
fn test_batch_generated_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("generated.csv");
    common::generate_items_csv(&path, 600).expect("Failed to generate CSV");

    let output = Command::new(cargo_bin!("salestax"))
        .arg("batch")
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let mut reader = csv::Reader::from_reader(output.stdout.as_slice());
    let mut rows = 0;
    for record in reader.records() {
        let record = record.unwrap();
        let base: f64 = record[0].parse().unwrap();
        let total_tax: f64 = record[3].parse().unwrap();
        let total_value: f64 = record[4].parse().unwrap();
        assert!((base + total_tax - total_value).abs() < 1e-9);
        rows += 1;
    }
    assert_eq!(rows, 600);
}

#[test]
fn test_batch_warns_about_skipped_items() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "base_value,category").unwrap();
    writeln!(file, "10,Toys").unwrap();
    writeln!(file, "10,Other").unwrap();

    let mut cmd = Command::new(cargo_bin!("salestax"));
    cmd.env("RUST_LOG", "warn").arg("batch").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("some items were skipped"))
        .stdout(predicate::str::contains("10,Other,VAT 19%=1.9,1.9,11.9"));
}
