use crate::error::{RosterError, RosterResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{2})/(\d{2})").expect("valid header date regex"));

/// Extracts the column dates from the first line containing `marker`.
///
/// Only the part of the line from the marker onwards is scanned, so stray
/// dates printed before the marker (report titles, print dates) are ignored.
/// Dates come back in left-to-right column order.
pub fn extract_header_dates(text: &str, marker: &str, year: i32) -> RosterResult<Vec<NaiveDate>> {
    let header = text
        .lines()
        .find_map(|line| line.find(marker).map(|idx| &line[idx..]))
        .ok_or_else(|| RosterError::HeaderNotFound {
            marker: marker.to_string(),
        })?;

    let mut dates = Vec::new();
    for caps in HEADER_DATE.captures_iter(header) {
        let token = &caps[0];
        let invalid = || RosterError::InvalidHeaderDate {
            token: token.to_string(),
            year,
        };
        let month: u32 = caps[1].parse().map_err(|_| invalid())?;
        let day: u32 = caps[2].parse().map_err(|_| invalid())?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
        dates.push(date);
    }

    if dates.is_empty() {
        return Err(RosterError::NoDateTokens);
    }
    tracing::debug!(count = dates.len(), "extracted header dates");
    Ok(dates)
}
