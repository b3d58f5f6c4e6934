use crate::error::{RosterError, RosterResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Marker for a day without a shift.
pub const OFF_TOKEN: &str = "OFF";
const RANGE_SEPARATOR: &str = "-";
const INTERVAL_WIDTH: usize = 5;

// A clock value with the meridiem glued on ("8:00AM"). The window below
// assumes two tokens per time, so these must never be guessed at.
static FUSED_CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}(?i:[ap]m)$").expect("valid fused clock regex"));

/// Start and end of one shift, as `"H:MM AM"` phrases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftInterval {
    pub start_phrase: String,
    pub end_phrase: String,
}

impl ShiftInterval {
    pub fn new(start_phrase: impl Into<String>, end_phrase: impl Into<String>) -> Self {
        Self {
            start_phrase: start_phrase.into(),
            end_phrase: end_phrase.into(),
        }
    }
}

impl fmt::Display for ShiftInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start_phrase, self.end_phrase)
    }
}

/// What one date column holds for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShiftToken {
    Off,
    Interval(ShiftInterval),
}

impl ShiftToken {
    pub fn interval(start_phrase: impl Into<String>, end_phrase: impl Into<String>) -> Self {
        ShiftToken::Interval(ShiftInterval::new(start_phrase, end_phrase))
    }

    pub fn is_off(&self) -> bool {
        matches!(self, ShiftToken::Off)
    }
}

/// Reads up to `target` shift tokens from a row blob.
///
/// The blob is split on whitespace and scanned with a cursor:
///
/// - `OFF` yields [`ShiftToken::Off`] and advances one token;
/// - a five-token window `[time, meridiem, "-", time, meridiem]` yields an
///   interval and advances five;
/// - anything else is noise and is skipped.
///
/// Scanning stops once `target` tokens are collected or the blob runs out, so
/// the result can be shorter than `target`. A clock fused with its meridiem
/// (`8:00AM`) fails the row with [`RosterError::TimePhraseInvalid`].
pub fn parse_shift_tokens(blob: &str, target: usize) -> RosterResult<Vec<ShiftToken>> {
    let tokens: Vec<&str> = blob.split_whitespace().collect();
    let mut shifts = Vec::with_capacity(target);
    let mut i = 0;

    while shifts.len() < target && i < tokens.len() {
        let token = tokens[i];
        reject_fused_clock(token)?;

        if token == OFF_TOKEN {
            shifts.push(ShiftToken::Off);
            i += 1;
        } else if i + INTERVAL_WIDTH - 1 < tokens.len() && tokens[i + 2] == RANGE_SEPARATOR {
            // The end clock would otherwise swallow the next column as its meridiem.
            reject_fused_clock(tokens[i + 3])?;
            shifts.push(ShiftToken::interval(
                format!("{} {}", tokens[i], tokens[i + 1]),
                format!("{} {}", tokens[i + 3], tokens[i + 4]),
            ));
            i += INTERVAL_WIDTH;
        } else {
            tracing::trace!(token, "skipping noise token");
            i += 1;
        }
    }

    Ok(shifts)
}

fn reject_fused_clock(token: &str) -> RosterResult<()> {
    if FUSED_CLOCK.is_match(token) {
        return Err(RosterError::TimePhraseInvalid {
            phrase: token.to_string(),
        });
    }
    Ok(())
}
