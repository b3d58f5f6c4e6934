use crate::shift::{ShiftInterval, ShiftToken};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A working day: one header date paired with its shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub interval: ShiftInterval,
}

/// One employee's working days in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSchedule {
    pub entries: Vec<ScheduleEntry>,
    /// Trailing header dates left without a shift token.
    #[serde(default)]
    pub dropped_dates: usize,
}

impl EmployeeSchedule {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pairs dates with shift tokens by position and keeps the working days.
///
/// When the row produced fewer tokens than there are dates the trailing dates
/// are dropped and counted in [`EmployeeSchedule::dropped_dates`]; extra
/// tokens cannot occur because the tokenizer stops at the date count.
pub fn assemble_schedule(dates: &[NaiveDate], shifts: &[ShiftToken]) -> EmployeeSchedule {
    let entries = dates
        .iter()
        .zip(shifts)
        .filter_map(|(date, shift)| match shift {
            ShiftToken::Off => None,
            ShiftToken::Interval(interval) => Some(ScheduleEntry {
                date: *date,
                interval: interval.clone(),
            }),
        })
        .collect();

    EmployeeSchedule {
        entries,
        dropped_dates: dates.len().saturating_sub(shifts.len()),
    }
}
