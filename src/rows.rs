use crate::config::ResolvedConfig;
use crate::shift::OFF_TOKEN;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque employee key, e.g. `"PICKETT, CHANCE"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeName(String);

impl EmployeeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmployeeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EmployeeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One employee row: the recognized name and the unparsed text after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub name: EmployeeName,
    pub blob: String,
}

/// Splits a roster document into employee rows.
///
/// A name only counts when it starts a line. Its blob runs to the next line
/// that starts with a name, the next repeated header line, or the end of the
/// document, so shift text wrapped onto continuation lines stays with its
/// row. Lines before the first name are ignored.
pub fn extract_rows(text: &str, config: &ResolvedConfig) -> Vec<RosterRow> {
    let mut rows = Vec::new();
    let mut current: Option<RosterRow> = None;

    for line in text.lines() {
        if line.contains(&config.header_marker) {
            rows.extend(current.take());
            continue;
        }

        let trimmed = line.trim_start();
        match match_row_start(trimmed, &config.name_pattern) {
            Some((name, rest)) => {
                rows.extend(current.take());
                current = Some(RosterRow {
                    name: EmployeeName::new(name),
                    blob: rest.trim().to_string(),
                });
            }
            None => {
                if let Some(row) = current.as_mut() {
                    let continuation = trimmed.trim_end();
                    if !continuation.is_empty() {
                        if !row.blob.is_empty() {
                            row.blob.push(' ');
                        }
                        row.blob.push_str(continuation);
                    }
                }
            }
        }
    }
    rows.extend(current);

    tracing::debug!(rows = rows.len(), "extracted roster rows");
    rows
}

/// Returns `(name, rest_of_line)` when `line` begins with an employee name.
fn match_row_start<'a>(line: &'a str, pattern: &Regex) -> Option<(&'a str, &'a str)> {
    let caps = pattern.captures(line)?;
    let whole = caps.get(0)?;
    if whole.start() != 0 {
        return None;
    }
    let matched = caps.get(1).unwrap_or(whole);
    let mut name = matched.as_str().trim_end();

    // A trailing "middle name" that is really the first shift keyword.
    if let Some((head, last)) = name.rsplit_once(' ') {
        if last == OFF_TOKEN && head.contains(", ") && !head.ends_with(',') {
            name = head;
        }
    }
    let end = matched.start() + name.len();
    Some((name, &line[end..]))
}
