//! Worker model and per-worker assignment registry.
//!
//! A worker declares candidate intervals per weekday and accumulates
//! committed assignments during a scheduling run.
//!
//! # Invariants
//! For every weekday, committed assignments are sorted by start time and
//! pairwise non-overlapping. Sorting is maintained by [`Worker::commit`];
//! non-overlap is the caller's responsibility and must be checked with
//! [`Worker::is_available`] first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{TimeInterval, Weekday};

/// A committed shift: an interval worked at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Time of day worked.
    pub interval: TimeInterval,
    /// Location name.
    pub location: String,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(interval: TimeInterval, location: impl Into<String>) -> Self {
        Self {
            interval,
            location: location.into(),
        }
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.interval.duration_minutes()
    }
}

/// A worker with declared availability and committed assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Role tag. Only used to decide processing order.
    pub role: String,
    /// Preferred location names, most preferred first.
    pub preferences: Vec<String>,
    /// Candidate intervals per weekday, in declaration order.
    pub availability: BTreeMap<Weekday, Vec<TimeInterval>>,
    #[serde(default)]
    assignments: BTreeMap<Weekday, Vec<Assignment>>,
}

impl Worker {
    /// Creates a worker with no role, preferences, or availability.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: String::new(),
            preferences: Vec::new(),
            availability: BTreeMap::new(),
            assignments: BTreeMap::new(),
        }
    }

    /// Sets the role tag.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Appends a preferred location.
    pub fn with_preference(mut self, location: impl Into<String>) -> Self {
        self.preferences.push(location.into());
        self
    }

    /// Replaces the preferred locations.
    pub fn with_preferences<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = locations.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a candidate interval for a weekday.
    pub fn with_availability(mut self, day: Weekday, interval: TimeInterval) -> Self {
        self.availability.entry(day).or_default().push(interval);
        self
    }

    /// Whether the role tag matches `role`, ignoring case.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.to_lowercase() == role.to_lowercase()
    }

    /// Candidate intervals declared for a weekday, in declaration order.
    pub fn availability_on(&self, day: Weekday) -> &[TimeInterval] {
        self.availability.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Committed assignments for a weekday, sorted by start time.
    pub fn assignments_on(&self, day: Weekday) -> &[Assignment] {
        self.assignments.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All committed assignments keyed by weekday.
    pub fn assignments(&self) -> &BTreeMap<Weekday, Vec<Assignment>> {
        &self.assignments
    }

    /// Returns `false` iff `interval` overlaps a committed assignment on `day`.
    pub fn is_available(&self, day: Weekday, interval: &TimeInterval) -> bool {
        !self
            .assignments_on(day)
            .iter()
            .any(|a| a.interval.overlaps(interval))
    }

    /// Records an assignment and keeps the day sorted by start time.
    ///
    /// Performs no overlap check; call [`Worker::is_available`] first.
    pub fn commit(&mut self, day: Weekday, interval: TimeInterval, location: impl Into<String>) {
        let day_assignments = self.assignments.entry(day).or_default();
        day_assignments.push(Assignment::new(interval, location));
        day_assignments.sort_by_key(|a| a.interval.start);
    }

    /// Total committed minutes across all weekdays.
    pub fn committed_minutes(&self) -> u32 {
        self.assignments
            .values()
            .flatten()
            .map(Assignment::duration_minutes)
            .sum()
    }

    /// Total committed hours across all weekdays.
    pub fn committed_hours(&self) -> f64 {
        f64::from(self.committed_minutes()) / 60.0
    }

    /// Number of committed assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    /// Whether the worker received no assignments.
    pub fn is_unassigned(&self) -> bool {
        self.assignment_count() == 0
    }
}
