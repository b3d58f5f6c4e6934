use serde::Serialize;
use std::io;
use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

/// Failures raised while reading a roster document or materializing one
/// employee's shifts.
///
/// Document-level variants abort a whole parse. Row-level variants
/// (`TimePhraseInvalid`, `DuplicateEmployee`) are recorded against a single
/// employee and returned when that employee is requested.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RosterError {
    #[error("could not find the date header line (no line contains '{marker}')")]
    HeaderNotFound { marker: String },

    #[error("the date header line contains no MM/DD dates")]
    NoDateTokens,

    #[error("header date '{token}' is not a valid calendar date in {year}")]
    InvalidHeaderDate { token: String, year: i32 },

    #[error("no schedule found for {name}")]
    NoMatchingEmployee { name: String },

    #[error("invalid time phrase '{phrase}' (expected H:MM AM or H:MM PM)")]
    TimePhraseInvalid { phrase: String },

    #[error("{name} appears on {rows} roster rows; refusing to pick one")]
    DuplicateEmployee { name: String, rows: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("invalid employee name pattern '{pattern}': {source}")]
    InvalidNamePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
