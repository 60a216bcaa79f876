//! End-to-end tests for the calculate-reimbursement binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("calculate-reimbursement").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("REIMBURSE_LOG")
        .env_remove("REIMBURSE_FORMAT")
        .env_remove("REIMBURSE_STRICT");
    cmd
}

#[test]
fn one_day_low_effort_trip() {
    cmd()
        .args(["1", "10", "0"])
        .assert()
        .success()
        .stdout("34.0\n");
}

#[test]
fn five_day_medium_trip() {
    cmd()
        .args(["5", "500", "600"])
        .assert()
        .success()
        .stdout("1075.48\n");
}

#[test]
fn two_decimal_result() {
    cmd()
        .args(["14", "1317.07", "2494.69"])
        .assert()
        .success()
        .stdout("2636.53\n");
}

#[test]
fn two_arguments_is_usage_error() {
    cmd()
        .args(["5", "500"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Usage:"));
}

#[test]
fn four_arguments_is_usage_error() {
    cmd()
        .args(["5", "500", "600", "7"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Usage:"));
}

#[test]
fn no_arguments_is_usage_error() {
    cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("trip_duration_days"));
}

#[test]
fn non_numeric_days_is_parse_error() {
    cmd()
        .args(["abc", "500", "600"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Error: Invalid input format (").and(contains("abc")));
}

#[test]
fn non_numeric_receipts_is_parse_error() {
    cmd()
        .args(["5", "500", "lots"])
        .assert()
        .code(1)
        .stderr(contains("total_receipts_amount").and(contains("lots")));
}

#[test]
fn negative_values_flow_through() {
    cmd()
        .args(["3", "-100", "-50"])
        .assert()
        .success()
        .stdout("97.75\n");
}

#[test]
fn hyphen_prefixed_reals_are_figures() {
    cmd()
        .args(["3", "-.5", "1"])
        .assert()
        .success()
        .stdout("97.75\n");
}

#[test]
fn negative_infinite_receipts_flow_through() {
    cmd()
        .args(["3", "100", "-inf"])
        .assert()
        .success()
        .stdout("157.25\n");
}

#[test]
fn short_help_in_figure_slot_is_parse_error() {
    cmd()
        .args(["-h", "1", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Error: Invalid input format (").and(contains("'-h'")));
}

#[test]
fn zero_days_prints_whole_dollar_cap() {
    cmd()
        .args(["0", "1000", "500"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn strict_rejects_zero_days() {
    cmd()
        .args(["0", "1000", "500", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Error: Invalid input (trip_duration_days must be positive"));
}

#[test]
fn strict_from_environment() {
    cmd()
        .env("REIMBURSE_STRICT", "true")
        .args(["3", "100", "-1"])
        .assert()
        .code(1)
        .stderr(contains("total_receipts_amount must not be negative"));
}

#[test]
fn json_format() {
    cmd()
        .args(["--format", "json", "5", "500", "600"])
        .assert()
        .success()
        .stdout(
            contains("\"amount\": 1075.48")
                .and(contains("\"amount_cents\": 107548"))
                .and(contains("\"location\": \"Medium\"")),
        );
}

#[test]
fn json_format_from_environment() {
    cmd()
        .env("REIMBURSE_FORMAT", "json")
        .args(["1", "10", "0"])
        .assert()
        .success()
        .stdout(contains("\"display\": \"$34.00\""));
}

#[test]
fn invalid_environment_value() {
    cmd()
        .env("REIMBURSE_FORMAT", "xml")
        .args(["1", "10", "0"])
        .assert()
        .code(1)
        .stderr(contains("REIMBURSE_FORMAT"));
}

#[test]
fn debug_logs_stay_off_stdout() {
    cmd()
        .env("REIMBURSE_LOG", "reimburse_core=debug")
        .args(["5", "500", "600"])
        .assert()
        .success()
        .stdout("1075.48\n")
        .stderr(contains("Reimbursement calculated"));
}

#[test]
fn help_goes_to_stdout() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("miles_traveled"));
}

#[test]
fn repeated_runs_are_identical() {
    let first = cmd().args(["7", "1000", "300"]).output().unwrap();
    let second = cmd().args(["7", "1000", "300"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stdout, b"1516.88\n");
}
