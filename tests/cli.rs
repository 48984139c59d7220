use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const AXIS_STATEMENT: &str = "\
Date,Withdrawals,Deposits,Transaction Details
Rahul,,,
International Transactions,,,
05-01-2023,40,,Hotel Stay London GBP
06-01-2023,,12.5,Uber Trip Paris EUR
Domestic Transactions,,,
01-01-2023,100,0,Coffee Shop mumbai
01-01-2023,abc,0,Broken Row mumbai
";

fn cardnorm(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cardnorm").unwrap();
    cmd.env("HOME", home).env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_formats_lists_layouts_in_priority_order() {
    let home = tempfile::tempdir().unwrap();
    let output = cardnorm(home.path()).arg("formats").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let idfc = stdout.find("idfc").unwrap();
    let hdfc = stdout.find("hdfc").unwrap();
    let icici = stdout.find("icici").unwrap();
    let axis = stdout.find("axis").unwrap();
    assert!(idfc < hdfc && hdfc < icici && icici < axis);
}

#[test]
fn test_convert_writes_standardized_file() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = work.path().join("Axis-Input-Case1.csv");
    std::fs::write(&input, AXIS_STATEMENT).unwrap();
    let out_dir = work.path().join("out");

    cardnorm(home.path())
        .arg("convert")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Axis Bank"))
        .stdout(predicate::str::contains("1 failed"))
        .stderr(predicate::str::contains("Error processing row"));

    let written = std::fs::read_to_string(out_dir.join("Axis-Output-Case1.csv")).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Date,Transaction Description,Debit,Credit,Currency,CardName,Transaction,Location",
            "2023-01-05,Hotel Stay,40.0,0.0,GBP,Rahul,International,london",
            "2023-01-06,Uber Trip,0.0,12.5,EUR,Rahul,International,paris",
            "2023-01-01,Coffee Shop,100.0,0.0,INR,Rahul,Domestic,mumbai",
        ]
    );
}

#[test]
fn test_convert_rejects_unknown_format_key() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = work.path().join("a.csv");
    std::fs::write(&input, AXIS_STATEMENT).unwrap();

    cardnorm(home.path())
        .args(["convert", input.to_str().unwrap(), "--format", "sbi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format key: sbi"));
}

#[test]
fn test_convert_unrecognized_layout_fails() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = work.path().join("mystery.csv");
    std::fs::write(&input, "foo,bar\n1,2\n").unwrap();

    cardnorm(home.path())
        .arg("convert")
        .arg(&input)
        .arg("--output-dir")
        .arg(work.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown statement format"));
    assert!(!work.path().join("out").join("mystery.csv").exists());
}

#[test]
fn test_convert_missing_file_fails() {
    let home = tempfile::tempdir().unwrap();
    cardnorm(home.path())
        .args(["convert", "/no/such/statement.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid path"));
}

#[test]
fn test_batch_mirrors_directory() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let in_dir = work.path().join("in");
    std::fs::create_dir(&in_dir).unwrap();
    std::fs::write(in_dir.join("Axis-Input.csv"), AXIS_STATEMENT).unwrap();
    std::fs::write(in_dir.join("Bad-Input.csv"), "foo,bar\n").unwrap();
    std::fs::write(in_dir.join("readme.txt"), "ignore me").unwrap();
    let out_dir = work.path().join("out");

    cardnorm(home.path())
        .arg("batch")
        .arg(&in_dir)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 files processed, 1 written, 1 failed"));

    assert!(out_dir.join("Axis-Output.csv").exists());
    assert!(!out_dir.join("Bad-Output.csv").exists());
}

#[test]
fn test_detect_reports_layout() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let input = work.path().join("idfc.csv");
    std::fs::write(
        &input,
        "Transaction Details,Date,Amount\nSwiggy Order bangalore,12-03-2023,450\n",
    )
    .unwrap();

    cardnorm(home.path())
        .arg("detect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected: IDFC First Bank"));
}

#[test]
fn test_config_persists_output_dir() {
    let home = tempfile::tempdir().unwrap();
    cardnorm(home.path())
        .args(["config", "--output-dir", "/tmp/cardnorm-statements"])
        .assert()
        .success();
    assert!(home.path().join(".config/cardnorm/settings.json").exists());

    cardnorm(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/cardnorm-statements"));
}
