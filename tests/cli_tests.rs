#![cfg(feature = "cli")]

mod common;

use assert_cmd::Command;
use common::SAMPLE_ROSTER;
use predicates::str::contains as str_contains;
use tempfile::{NamedTempFile, TempDir};

fn roster_file() -> NamedTempFile {
    let file = NamedTempFile::new().expect("create temp file");
    std::fs::write(file.path(), SAMPLE_ROSTER).expect("write roster text");
    file
}

#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("cli").expect("cli binary")
}

#[test]
fn names_lists_employees_and_rejections() {
    let roster = roster_file();
    cli()
        .arg("names")
        .arg(roster.path())
        .assert()
        .success()
        .stdout(str_contains("PICKETT, CHANCE  (3 shifts)"))
        .stdout(str_contains("LEE, ANNA  (unreadable: invalid time phrase '8:00AM'"));
}

#[test]
fn calendar_writes_ics_file() {
    let roster = roster_file();
    let out = TempDir::new().expect("create temp dir");
    cli()
        .arg("calendar")
        .arg(roster.path())
        .args(["--employee", "PICKETT, CHANCE", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(str_contains("Wrote 3 shifts"));

    let ics = std::fs::read_to_string(out.path().join("PICKETT, CHANCE_schedule.ics")).unwrap();
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
}

#[test]
fn calendar_for_unknown_employee_fails() {
    let roster = roster_file();
    let out = TempDir::new().expect("create temp dir");
    cli()
        .arg("calendar")
        .arg(roster.path())
        .args(["--employee", "NOBODY, HERE", "--out"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(str_contains("no schedule found for NOBODY, HERE"));
}

#[test]
fn export_csv_to_stdout() {
    let roster = roster_file();
    cli()
        .arg("export")
        .arg(roster.path())
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(str_contains("employee,date,start,end"))
        .stdout(str_contains("\"SMITH, JOHN\",2025-06-04,6:00 AM,2:00 PM"));
}

#[test]
fn year_override_moves_dates() {
    let roster = roster_file();
    cli()
        .arg("export")
        .arg(roster.path())
        .args(["--format", "csv", "--year", "2026"])
        .assert()
        .success()
        .stdout(str_contains("2026-06-04"));
}

#[test]
fn unknown_timezone_is_reported() {
    let roster = roster_file();
    cli()
        .arg("names")
        .arg(roster.path())
        .args(["--timezone", "Nowhere/Special"])
        .assert()
        .failure()
        .stderr(str_contains("unknown timezone 'Nowhere/Special'"));
}
