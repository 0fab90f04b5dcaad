//! Input boundary: raw worker records and availability text.
//!
//! Records arrive with availability as one string per weekday, in the
//! form `"09:00-11:00, 13:00-15:00"`, and preferences either as a list or
//! as a comma-separated string. This module turns them into [`Worker`]s.
//!
//! # Cutoff
//! Ranges ending after the daily cutoff are dropped here, before the
//! engine sees them. Ranges with `end <= start` are kept so that
//! validation can report them; the engine skips them.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::models::{ClockTime, TimeInterval, Weekday, Worker};
use crate::scheduler::EngineConfig;

/// One worker as supplied by an external reader (spreadsheet, JSON, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRecord {
    /// Unique worker identifier.
    #[serde(alias = "employee_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role tag.
    #[serde(alias = "position", default)]
    pub role: String,
    /// Preferred location names, most preferred first.
    #[serde(
        alias = "location_preferences",
        default,
        deserialize_with = "deserialize_preferences"
    )]
    pub preferences: Vec<String>,
    /// Availability text per weekday name. Missing or blank = unavailable.
    #[serde(default)]
    pub availability: BTreeMap<String, Option<String>>,
}

impl WorkerRecord {
    /// Creates a record with no preferences or availability.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            preferences: Vec::new(),
            availability: BTreeMap::new(),
        }
    }

    /// Sets preferences from comma-separated text.
    pub fn with_preferences(mut self, text: &str) -> Self {
        self.preferences = parse_preferences(text);
        self
    }

    /// Sets the availability text for a weekday name.
    pub fn with_day(mut self, day: impl Into<String>, text: impl Into<String>) -> Self {
        self.availability.insert(day.into(), Some(text.into()));
        self
    }

    /// Converts the record into a [`Worker`].
    ///
    /// Unknown weekday names are logged and skipped. Unparseable
    /// availability text is an error.
    pub fn into_worker(&self, cutoff: ClockTime) -> Result<Worker, ParseError> {
        let mut worker = Worker::new(&self.id, &self.name)
            .with_role(&self.role)
            .with_preferences(self.preferences.iter().cloned());

        for (day_name, text) in &self.availability {
            let day = match day_name.parse::<Weekday>() {
                Ok(day) => day,
                Err(err) => {
                    warn!(worker = %self.id, %err, "ignoring availability");
                    continue;
                }
            };
            let Some(text) = text else { continue };
            let ranges = parse_ranges(text, cutoff)?;
            if !ranges.is_empty() {
                worker.availability.entry(day).or_default().extend(ranges);
            }
        }
        Ok(worker)
    }
}

/// Converts every record, stopping at the first parse error.
pub fn load_workers(records: &[WorkerRecord], config: &EngineConfig) -> Result<Vec<Worker>, ParseError> {
    records
        .iter()
        .map(|r| r.into_worker(config.daily_cutoff()))
        .collect()
}

/// Parses comma-separated availability text.
///
/// Blank text yields no ranges. Ranges ending after `cutoff` are dropped.
pub fn parse_ranges(text: &str, cutoff: ClockTime) -> Result<Vec<TimeInterval>, ParseError> {
    let mut ranges = Vec::new();
    for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let interval = TimeInterval::parse(part)?;
        if interval.end > cutoff {
            debug!(%interval, %cutoff, "dropping range past cutoff");
            continue;
        }
        ranges.push(interval);
    }
    Ok(ranges)
}

/// Splits comma-separated location names, trimming blanks.
pub fn parse_preferences(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn deserialize_preferences<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Preferences {
        Text(String),
        List(Vec<String>),
    }

    Ok(match Preferences::deserialize(deserializer)? {
        Preferences::Text(text) => parse_preferences(&text),
        Preferences::List(list) => list
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUTOFF: ClockTime = ClockTime::hm(15, 30);

    #[test]
    fn test_parse_ranges() {
        let r = parse_ranges("09:00-11:00,13:00-15:00", CUTOFF).unwrap();
        assert_eq!(r, vec![TimeInterval::hm(9, 0, 11, 0), TimeInterval::hm(13, 0, 15, 0)]);
    }

    #[test]
    fn test_parse_ranges_keeps_declaration_order() {
        let r = parse_ranges(" 13:00 - 15:00 , 07:00-09:00 ", CUTOFF).unwrap();
        assert_eq!(r, vec![TimeInterval::hm(13, 0, 15, 0), TimeInterval::hm(7, 0, 9, 0)]);
    }

    #[test]
    fn test_parse_ranges_cutoff() {
        let r = parse_ranges("14:00-15:30,14:00-16:00", CUTOFF).unwrap();
        assert_eq!(r, vec![TimeInterval::hm(14, 0, 15, 30)]);
    }

    #[test]
    fn test_parse_ranges_blank() {
        assert!(parse_ranges("", CUTOFF).unwrap().is_empty());
        assert!(parse_ranges("  ", CUTOFF).unwrap().is_empty());
    }

    #[test]
    fn test_parse_ranges_keeps_backwards_interval() {
        let r = parse_ranges("11:00-09:00", CUTOFF).unwrap();
        assert_eq!(r.len(), 1);
        assert!(!r[0].is_valid());
    }

    #[test]
    fn test_parse_ranges_malformed() {
        assert!(matches!(
            parse_ranges("09:00-11:00,lunch", CUTOFF),
            Err(ParseError::InvalidRange { .. })
        ));
        assert!(matches!(
            parse_ranges("9h-11h", CUTOFF),
            Err(ParseError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_parse_preferences() {
        assert_eq!(
            parse_preferences("The Trove, CSC ,,ERC"),
            vec!["The Trove", "CSC", "ERC"]
        );
        assert!(parse_preferences("").is_empty());
    }

    #[test]
    fn test_record_into_worker() {
        let record = WorkerRecord::new("EMP001", "Alice Smith", "Lead")
            .with_preferences("Seventh,CSC")
            .with_day("Monday", "09:00-11:00,13:00-15:00")
            .with_day("Friday", "13:00-16:00")
            .with_day("Funday", "09:00-11:00");

        let w = record.into_worker(CUTOFF).unwrap();
        assert_eq!(w.id, "EMP001");
        assert!(w.has_role("lead"));
        assert_eq!(w.preferences, vec!["Seventh", "CSC"]);
        assert_eq!(w.availability_on(Weekday::Monday).len(), 2);
        // Past the cutoff
        assert!(w.availability_on(Weekday::Friday).is_empty());
        assert_eq!(w.availability.len(), 1);
    }

    #[test]
    fn test_record_into_worker_error() {
        let record = WorkerRecord::new("E1", "A", "Staff").with_day("Monday", "morning");
        assert!(record.into_worker(CUTOFF).is_err());
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{
            "employee_id": "EMP002",
            "name": "Bob Johnson",
            "position": "Staff",
            "location_preferences": "ERC, CSC",
            "availability": {
                "Monday": "07:00-09:00,12:00-14:00",
                "Tuesday": null,
                "Wednesday": ""
            }
        }"#;
        let record: WorkerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "EMP002");
        assert_eq!(record.role, "Staff");
        assert_eq!(record.preferences, vec!["ERC", "CSC"]);

        let w = record.into_worker(CUTOFF).unwrap();
        assert_eq!(w.availability_on(Weekday::Monday).len(), 2);
        assert!(w.availability_on(Weekday::Tuesday).is_empty());
        assert!(w.availability_on(Weekday::Wednesday).is_empty());
    }

    #[test]
    fn test_record_preferences_as_list() {
        let json = r#"{"id": "E1", "name": "A", "preferences": [" CSC", "ERC "]}"#;
        let record: WorkerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.preferences, vec!["CSC", "ERC"]);
        assert!(record.role.is_empty());
    }

    #[test]
    fn test_load_workers() {
        let records = vec![
            WorkerRecord::new("E1", "A", "Staff").with_day("Monday", "09:00-11:00"),
            WorkerRecord::new("E2", "B", "Lead").with_day("Tuesday", "10:00-12:30"),
        ];
        let workers = load_workers(&records, &EngineConfig::default()).unwrap();
        assert_eq!(workers.len(), 2);
        assert_eq!(workers[1].availability_on(Weekday::Tuesday).len(), 1);
    }
}
