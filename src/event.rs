use crate::assemble::{EmployeeSchedule, ScheduleEntry};
use crate::config::ResolvedConfig;
use crate::error::{RosterError, RosterResult};
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;

const TIME_PHRASE_FORMAT: &str = "%I:%M %p";

/// A single work shift placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub location: String,
}

/// Parses a `"H:MM AM"` / `"H:MM PM"` phrase.
pub fn parse_time_phrase(phrase: &str) -> RosterResult<NaiveTime> {
    NaiveTime::parse_from_str(phrase.trim(), TIME_PHRASE_FORMAT).map_err(|_| {
        RosterError::TimePhraseInvalid {
            phrase: phrase.to_string(),
        }
    })
}

/// Pins a wall-clock time to `tz`.
///
/// Ambiguous times (clocks falling back) take the later, standard-time
/// instant. Times inside a spring-forward gap are read with the offset that
/// was in effect before the gap.
pub fn localize(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(first, second) => first.max(second),
        LocalResult::None => {
            let before = tz
                .offset_from_utc_datetime(&(naive - Duration::days(1)))
                .fix();
            let utc = naive - Duration::seconds(i64::from(before.local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

/// Turns schedule entries into calendar events for one timezone.
#[derive(Debug, Clone)]
pub struct EventMaterializer {
    timezone: Tz,
    title: String,
    location: String,
}

impl EventMaterializer {
    pub fn new(timezone: Tz, title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            timezone,
            title: title.into(),
            location: location.into(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.timezone,
            config.event_title.clone(),
            config.location_label.clone(),
        )
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Builds the event for one working day.
    ///
    /// A shift whose end is not after its start (e.g. `10:00 PM - 6:00 AM`)
    /// ends on the following day.
    pub fn materialize(&self, entry: &ScheduleEntry) -> RosterResult<CalendarEvent> {
        let start_time = parse_time_phrase(&entry.interval.start_phrase)?;
        let end_time = parse_time_phrase(&entry.interval.end_phrase)?;

        let end_date = if end_time <= start_time {
            entry.date + Duration::days(1)
        } else {
            entry.date
        };

        Ok(CalendarEvent {
            title: self.title.clone(),
            start: localize(self.timezone, entry.date.and_time(start_time)),
            end: localize(self.timezone, end_date.and_time(end_time)),
            location: self.location.clone(),
        })
    }

    /// Builds every event of a schedule, or fails on the first bad phrase.
    pub fn materialize_schedule(
        &self,
        schedule: &EmployeeSchedule,
    ) -> RosterResult<Vec<CalendarEvent>> {
        schedule
            .entries
            .iter()
            .map(|entry| self.materialize(entry))
            .collect()
    }
}
