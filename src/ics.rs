use crate::event::CalendarEvent;
use crate::rows::EmployeeName;
use chrono::Utc;
use icalendar::{Calendar, Component, Event, EventLike};

pub const CALENDAR_EXTENSION: &str = "ics";
pub const CALENDAR_MIME_TYPE: &str = "text/calendar";

/// `"{employee}_schedule.ics"`
pub fn calendar_file_name(name: &EmployeeName) -> String {
    format!("{name}_schedule.{CALENDAR_EXTENSION}")
}

fn uid_for(name: &EmployeeName, event: &CalendarEvent) -> String {
    let key: String = name
        .as_str()
        .chars()
        .filter_map(|c| match c {
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            ' ' | '-' => Some('-'),
            _ => None,
        })
        .collect();
    format!(
        "{key}-{}@roster-ics",
        event.start.with_timezone(&Utc).format("%Y%m%dT%H%M%SZ")
    )
}

/// Builds a `VCALENDAR` with one `VEVENT` per shift. Instants are written in
/// UTC so readers need no timezone definitions.
pub fn build_calendar(name: &EmployeeName, events: &[CalendarEvent]) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.name(&format!("{name} schedule"));
    for event in events {
        calendar.push(
            Event::new()
                .uid(&uid_for(name, event))
                .summary(&event.title)
                .starts(event.start.with_timezone(&Utc))
                .ends(event.end.with_timezone(&Utc))
                .location(&event.location)
                .done(),
        );
    }
    calendar.done()
}

pub fn render_calendar(name: &EmployeeName, events: &[CalendarEvent]) -> String {
    build_calendar(name, events).to_string()
}
