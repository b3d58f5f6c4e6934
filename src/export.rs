use crate::error::ExportResult;
use crate::roster::ParsedRoster;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct EntryCsvRecord<'a> {
    employee: &'a str,
    date: String,
    start: &'a str,
    end: &'a str,
}

pub fn write_roster_json<W: Write>(roster: &ParsedRoster, writer: W) -> ExportResult<()> {
    serde_json::to_writer_pretty(writer, roster)?;
    Ok(())
}

/// One row per working day: `employee,date,start,end`. Rejected rows are
/// left out.
pub fn write_roster_csv<W: Write>(roster: &ParsedRoster, writer: W) -> ExportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (name, schedule) in roster.schedules() {
        for entry in &schedule.entries {
            csv_writer.serialize(EntryCsvRecord {
                employee: name.as_str(),
                date: entry.date.format("%Y-%m-%d").to_string(),
                start: &entry.interval.start_phrase,
                end: &entry.interval.end_phrase,
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_roster_to_json<P: AsRef<Path>>(roster: &ParsedRoster, path: P) -> ExportResult<()> {
    let file = File::create(path)?;
    write_roster_json(roster, file)
}

pub fn save_roster_to_csv<P: AsRef<Path>>(roster: &ParsedRoster, path: P) -> ExportResult<()> {
    let file = File::create(path)?;
    write_roster_csv(roster, file)
}
