use crate::assemble::{EmployeeSchedule, assemble_schedule};
use crate::config::ResolvedConfig;
use crate::error::{RosterError, RosterResult};
use crate::event::{CalendarEvent, EventMaterializer};
use crate::header::extract_header_dates;
use crate::rows::{EmployeeName, extract_rows};
use crate::shift::parse_shift_tokens;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Everything read from one roster document.
///
/// Built fresh by [`parse_roster`] and never mutated afterwards; a new
/// document produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedRoster {
    dates: Vec<NaiveDate>,
    schedules: BTreeMap<EmployeeName, EmployeeSchedule>,
    rejected: BTreeMap<EmployeeName, RosterError>,
}

impl ParsedRoster {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn schedules(&self) -> &BTreeMap<EmployeeName, EmployeeSchedule> {
        &self.schedules
    }

    /// Rows that could not be read, with the reason.
    pub fn rejected(&self) -> &BTreeMap<EmployeeName, RosterError> {
        &self.rejected
    }

    /// Every name found in the document, parsed or not, in sorted order.
    pub fn employee_names(&self) -> Vec<&EmployeeName> {
        self.schedules
            .keys()
            .chain(self.rejected.keys())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn schedule_for(&self, name: &str) -> RosterResult<&EmployeeSchedule> {
        if let Some(schedule) = self.schedules.get(name) {
            return Ok(schedule);
        }
        match self.rejected.get(name) {
            Some(err) => Err(err.clone()),
            None => Err(RosterError::NoMatchingEmployee {
                name: name.to_string(),
            }),
        }
    }

    /// Calendar events for one employee's working days.
    pub fn materialize(
        &self,
        name: &str,
        materializer: &EventMaterializer,
    ) -> RosterResult<Vec<CalendarEvent>> {
        let schedule = self.schedule_for(name)?;
        materializer.materialize_schedule(schedule)
    }
}

/// Reads a roster document into per-employee schedules.
///
/// Missing or empty headers fail the whole document. Problems confined to one
/// row (fused clock tokens, a name listed on several rows) reject only that
/// employee; the reason is kept in [`ParsedRoster::rejected`].
pub fn parse_roster(text: &str, config: &ResolvedConfig) -> RosterResult<ParsedRoster> {
    let dates = extract_header_dates(text, &config.header_marker, config.default_year)?;
    let rows = extract_rows(text, config);

    let mut row_counts: HashMap<&EmployeeName, usize> = HashMap::new();
    for row in &rows {
        *row_counts.entry(&row.name).or_default() += 1;
    }

    let mut schedules = BTreeMap::new();
    let mut rejected = BTreeMap::new();
    for row in &rows {
        let count = row_counts.get(&row.name).copied().unwrap_or(1);
        if count > 1 {
            tracing::warn!(employee = %row.name, rows = count, "duplicate roster row");
            rejected.insert(
                row.name.clone(),
                RosterError::DuplicateEmployee {
                    name: row.name.to_string(),
                    rows: count,
                },
            );
            continue;
        }

        match parse_shift_tokens(&row.blob, dates.len()) {
            Ok(shifts) => {
                let schedule = assemble_schedule(&dates, &shifts);
                if schedule.dropped_dates > 0 {
                    tracing::warn!(
                        employee = %row.name,
                        dropped = schedule.dropped_dates,
                        "row has fewer shifts than header dates; trailing dates dropped"
                    );
                }
                tracing::debug!(employee = %row.name, shifts = schedule.len(), "parsed row");
                schedules.insert(row.name.clone(), schedule);
            }
            Err(err) => {
                tracing::warn!(employee = %row.name, error = %err, "rejected roster row");
                rejected.insert(row.name.clone(), err);
            }
        }
    }

    tracing::info!(
        dates = dates.len(),
        employees = schedules.len(),
        rejected = rejected.len(),
        "parsed roster"
    );
    Ok(ParsedRoster {
        dates,
        schedules,
        rejected,
    })
}
