mod common;

use common::SAMPLE_ROSTER;
use roster_ics::{
    ResolvedConfig, parse_roster, save_roster_to_csv, save_roster_to_json, write_roster_csv,
    write_roster_json,
};
use tempfile::NamedTempFile;

#[test]
fn csv_has_one_row_per_working_day() {
    let roster = parse_roster(SAMPLE_ROSTER, &ResolvedConfig::default()).unwrap();
    let mut out = Vec::new();
    write_roster_csv(&roster, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("employee,date,start,end"));
    let rows: Vec<&str> = lines.collect();
    // DOE 3 + PICKETT 3 + SMITH 1; LEE is rejected.
    assert_eq!(rows.len(), 7);
    assert!(rows.contains(&"\"PICKETT, CHANCE\",2025-06-03,8:00 AM,4:00 PM"));
    assert!(!text.contains("LEE, ANNA"));
}

#[test]
fn json_carries_dates_schedules_and_rejections() {
    let roster = parse_roster(SAMPLE_ROSTER, &ResolvedConfig::default()).unwrap();
    let mut out = Vec::new();
    write_roster_json(&roster, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value["dates"][0], "2025-06-02");
    let smith = &value["schedules"]["SMITH, JOHN"];
    assert_eq!(smith["dropped_dates"], 2);
    assert_eq!(smith["entries"][0]["date"], "2025-06-04");
    assert_eq!(smith["entries"][0]["start_phrase"], "6:00 AM");
    assert_eq!(value["rejected"]["LEE, ANNA"]["kind"], "time_phrase_invalid");
}

#[test]
fn save_helpers_write_files() {
    let roster = parse_roster(SAMPLE_ROSTER, &ResolvedConfig::default()).unwrap();

    let json_file = NamedTempFile::new().expect("create temp file");
    save_roster_to_json(&roster, json_file.path()).unwrap();
    let json = std::fs::read_to_string(json_file.path()).unwrap();
    assert!(json.contains("PICKETT, CHANCE"));

    let csv_file = NamedTempFile::new().expect("create temp file");
    save_roster_to_csv(&roster, csv_file.path()).unwrap();
    let csv = std::fs::read_to_string(csv_file.path()).unwrap();
    assert!(csv.starts_with("employee,date,start,end"));
}
