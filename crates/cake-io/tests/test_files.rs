//! File-level tests: roster validation and reading, CSV output.

use std::fs;

use cake_core::Error;
use cake_io::{read_roster, validate_roster_path, write_csv};
use cake_schedule::CakeDayPlanner;
use cake_time::CompanyCalendar;
use chrono::NaiveDate;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn directory_is_not_a_roster() {
    let dir = TempDir::new().unwrap();
    let err = validate_roster_path(dir.path()).unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
}

#[test]
fn missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("TestData.txt");
    let err = validate_roster_path(&path).unwrap_err();
    assert_eq!(err, Error::FileNotFound(path.display().to_string()));
}

#[test]
fn unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "TestData.doc", "Steve,1997-01-01\n");
    let err = validate_roster_path(&path).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedFileType {
            found: "doc".into(),
            allowed: "txt, csv".into(),
        }
    );

    let no_ext = write_file(&dir, "TestData", "Steve,1997-01-01\n");
    assert!(matches!(
        validate_roster_path(&no_ext),
        Err(Error::UnsupportedFileType { .. })
    ));
}

#[test]
fn txt_and_csv_are_accepted() {
    let dir = TempDir::new().unwrap();
    for name in ["employees.txt", "employees.csv"] {
        let path = write_file(&dir, name, "Steve,1997-01-01\nLaura,1977-07-21\n");
        let roster = read_roster(&path).unwrap();
        assert_eq!(roster.len(), 2);
    }
}

#[test]
fn malformed_roster_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "invalidDate.txt", "Steve,0000/00/00\nLaura,0000/00/00\n");
    assert!(matches!(
        read_roster(&path),
        Err(Error::InvalidRecordFormat { .. })
    ));
}

#[test]
fn roster_to_csv() {
    let dir = TempDir::new().unwrap();
    let roster_path = write_file(
        &dir,
        "employeeBdy.txt",
        "Steve,1977-07-21
         Laura,1977-07-21
         Maria,1987-09-24
",
    );
    let roster = read_roster(&roster_path).unwrap();
    let schedule = CakeDayPlanner::new(CompanyCalendar::standard(), 2024)
        .unwrap()
        .plan(&roster)
        .unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let csv_path = write_csv(&schedule, dir.path(), today).unwrap();
    assert_eq!(csv_path, dir.path().join("EmpBdyCakes-09-03-2024.csv"));

    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "2024-07-23,0,1,\"Steve, Laura\"");
    assert_eq!(lines[2], "2024-09-25,1,0,Maria");
}

#[test]
fn unwritable_output_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let err = write_csv(&[], &missing, today).unwrap_err();
    assert!(matches!(err, Error::Io(ref m) if m.starts_with("Unable to generate a CSV")));
}
