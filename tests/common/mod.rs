#![allow(dead_code)]

use chrono::NaiveDate;

/// A week of roster text as it comes out of PDF text extraction.
pub const SAMPLE_ROSTER: &str = "\
U of A Catering - Weekly Schedule
Associates Mon 06/02 Tue 06/03 Wed 06/04 Thu 06/05 Fri 06/06
PICKETT, CHANCE OFF 8:00 AM - 4:00 PM 9:30 AM - 6:00 PM OFF 7:00 AM - 3:30 PM
DOE, JANE MARIE 10:00 AM - 6:30 PM OFF OFF 10:00 AM - 6:30 PM
    11:00 AM - 7:00 PM
SMITH, JOHN OFF OFF ??? 6:00 AM - 2:00 PM
LEE, ANNA 8:00AM - 4:00PM OFF OFF OFF OFF
";

pub fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
