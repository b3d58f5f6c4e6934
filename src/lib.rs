pub mod assemble;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod header;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod ics;
pub mod logging;
pub mod roster;
pub mod rows;
pub mod session;
pub mod shift;

pub use assemble::{EmployeeSchedule, ScheduleEntry, assemble_schedule};
pub use config::{ResolvedConfig, RosterConfig};
pub use error::{ConfigError, ExportError, RosterError, RosterResult};
pub use event::{CalendarEvent, EventMaterializer};
pub use export::{save_roster_to_csv, save_roster_to_json, write_roster_csv, write_roster_json};
pub use header::extract_header_dates;
pub use ics::{calendar_file_name, render_calendar};
pub use roster::{ParsedRoster, parse_roster};
pub use rows::{EmployeeName, RosterRow, extract_rows};
pub use session::{SessionId, SessionStore};
pub use shift::{ShiftInterval, ShiftToken, parse_shift_tokens};
