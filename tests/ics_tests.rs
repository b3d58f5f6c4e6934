mod common;

use common::SAMPLE_ROSTER;
use roster_ics::{
    EmployeeName, EventMaterializer, ResolvedConfig, calendar_file_name, parse_roster,
    render_calendar,
};

#[test]
fn file_name_follows_employee_key() {
    let name = EmployeeName::new("PICKETT, CHANCE");
    assert_eq!(calendar_file_name(&name), "PICKETT, CHANCE_schedule.ics");
}

#[test]
fn calendar_has_one_vevent_per_shift() {
    let config = ResolvedConfig::default();
    let roster = parse_roster(SAMPLE_ROSTER, &config).unwrap();
    let events = roster
        .materialize("PICKETT, CHANCE", &EventMaterializer::from_config(&config))
        .unwrap();
    let ics = render_calendar(&EmployeeName::new("PICKETT, CHANCE"), &events);

    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    assert_eq!(ics.matches("SUMMARY:Work Shift").count(), 3);
    assert_eq!(ics.matches("LOCATION:U of Ark-Catering").count(), 3);
    // 8:00 AM CDT on 2025-06-03
    assert!(ics.contains("DTSTART:20250603T130000Z"));
    assert!(ics.contains("DTEND:20250603T210000Z"));
}

#[test]
fn empty_schedule_renders_an_empty_calendar() {
    let ics = render_calendar(&EmployeeName::new("DOE, JANE"), &[]);
    assert!(ics.contains("BEGIN:VCALENDAR"));
    assert!(!ics.contains("BEGIN:VEVENT"));
}

#[test]
fn uids_are_stable_across_renders() {
    let config = ResolvedConfig::default();
    let roster = parse_roster(SAMPLE_ROSTER, &config).unwrap();
    let materializer = EventMaterializer::from_config(&config);
    let name = EmployeeName::new("DOE, JANE MARIE");
    let events = roster.materialize(name.as_str(), &materializer).unwrap();

    let uids = |ics: &str| -> Vec<String> {
        ics.lines()
            .filter(|line| line.starts_with("UID:"))
            .map(str::to_string)
            .collect()
    };
    let first = uids(&render_calendar(&name, &events));
    let second = uids(&render_calendar(&name, &events));
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert!(first[0].starts_with("UID:doe-jane-marie-"));
}
