use chrono::NaiveDate;
use roster_ics::{RosterError, extract_header_dates};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn header_dates_in_column_order() {
    let text = "Weekly Roster\nAssociates Mon 06/02 Tue 06/03 Wed 06/04 Total\nDOE, JANE OFF\n";
    let dates = extract_header_dates(text, "Associates", 2025).unwrap();
    assert_eq!(dates, vec![d(2025, 6, 2), d(2025, 6, 3), d(2025, 6, 4)]);
}

#[test]
fn dates_before_the_marker_are_ignored() {
    let text = "Printed 05/30 Associates 06/02 06/03\n";
    let dates = extract_header_dates(text, "Associates", 2025).unwrap();
    assert_eq!(dates, vec![d(2025, 6, 2), d(2025, 6, 3)]);
}

#[test]
fn configured_year_is_applied() {
    let text = "Associates 12/29 12/30\n";
    let dates = extract_header_dates(text, "Associates", 2026).unwrap();
    assert_eq!(dates, vec![d(2026, 12, 29), d(2026, 12, 30)]);
}

#[test]
fn only_the_first_marker_line_is_used() {
    let text = "Associates 06/02\nDOE, JANE OFF\nAssociates 06/09\n";
    let dates = extract_header_dates(text, "Associates", 2025).unwrap();
    assert_eq!(dates, vec![d(2025, 6, 2)]);
}

#[test]
fn missing_marker_is_header_not_found() {
    let err = extract_header_dates("Staff 06/02 06/03\n", "Associates", 2025).unwrap_err();
    assert_eq!(
        err,
        RosterError::HeaderNotFound {
            marker: "Associates".into()
        }
    );
    assert!(err.to_string().contains("Associates"));
}

#[test]
fn marker_line_without_dates_is_no_date_tokens() {
    let err = extract_header_dates("Associates Mon Tue Wed\n", "Associates", 2025).unwrap_err();
    assert_eq!(err, RosterError::NoDateTokens);
}

#[test]
fn impossible_date_is_rejected() {
    let err = extract_header_dates("Associates 02/28 02/30\n", "Associates", 2025).unwrap_err();
    assert_eq!(
        err,
        RosterError::InvalidHeaderDate {
            token: "02/30".into(),
            year: 2025
        }
    );
}
