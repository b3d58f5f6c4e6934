use crate::error::ConfigError;
use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Matches `LASTNAME, FIRSTNAME` with an optional middle name at the start of
/// a row. Group 1 is the employee key.
pub const DEFAULT_NAME_PATTERN: &str = r"^([A-Z][A-Z'\-]*, [A-Z][A-Z'\-]*(?: [A-Z][A-Z'\-]*)?)(?:\s|$)";

/// User-facing roster settings, as read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Substring identifying the date header line.
    pub header_marker: String,
    /// Year appended to the `MM/DD` header tokens.
    pub default_year: i32,
    /// IANA zone identifier used to localize shift times.
    pub timezone: String,
    /// Text stamped on every event as its location.
    pub location_label: String,
    pub event_title: String,
    pub name_pattern: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            header_marker: "Associates".to_string(),
            default_year: 2025,
            timezone: "America/Chicago".to_string(),
            location_label: "U of Ark-Catering".to_string(),
            event_title: "Work Shift".to_string(),
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
        }
    }
}

impl RosterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Validates the settings and compiles the pieces the parser needs.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        if self.header_marker.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "header_marker must not be empty".to_string(),
            ));
        }
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|_| ConfigError::UnknownTimezone(self.timezone.clone()))?;
        let name_pattern =
            Regex::new(&self.name_pattern).map_err(|source| ConfigError::InvalidNamePattern {
                pattern: self.name_pattern.clone(),
                source,
            })?;

        Ok(ResolvedConfig {
            header_marker: self.header_marker.clone(),
            default_year: self.default_year,
            timezone,
            location_label: self.location_label.clone(),
            event_title: self.event_title.clone(),
            name_pattern,
        })
    }
}

/// Validated settings shared by every stage of a parse.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub header_marker: String,
    pub default_year: i32,
    pub timezone: Tz,
    pub location_label: String,
    pub event_title: String,
    pub name_pattern: Regex,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        RosterConfig::default()
            .resolve()
            .expect("default roster configuration is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = RosterConfig::from_toml_str("default_year = 2026\n").unwrap();
        assert_eq!(config.default_year, 2026);
        assert_eq!(config.header_marker, "Associates");
        assert_eq!(config.timezone, "America/Chicago");
    }

    #[test]
    fn resolve_rejects_unknown_timezone() {
        let config = RosterConfig {
            timezone: "Mars/Olympus_Mons".into(),
            ..RosterConfig::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::UnknownTimezone(tz)) if tz == "Mars/Olympus_Mons"
        ));
    }

    #[test]
    fn resolve_rejects_bad_name_pattern() {
        let config = RosterConfig {
            name_pattern: "([A-Z]+".into(),
            ..RosterConfig::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::InvalidNamePattern { .. })
        ));
    }

    #[test]
    fn resolve_rejects_blank_marker() {
        let config = RosterConfig {
            header_marker: "  ".into(),
            ..RosterConfig::default()
        };
        assert!(matches!(config.resolve(), Err(ConfigError::InvalidConfig(_))));
    }
}
