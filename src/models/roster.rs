//! Day-by-location roster view.
//!
//! Regroups per-worker assignments into the layout a staffing sheet uses:
//! one column per weekday, one block per location inside each column,
//! and one `Name (HH:MM-HH:MM)` line per assignment.
//!
//! Locations appear in the order supplied to the run; entries within a
//! block follow worker input order, then start time. The text rendering
//! prints location headers in upper case, as staffing sheets do; the
//! data keeps the names unchanged.

use std::fmt;

use serde::Serialize;

use super::{Location, TimeInterval, Weekday, Worker};

/// One assignment line in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    /// Worker identifier.
    pub worker_id: String,
    /// Worker display name.
    pub worker_name: String,
    /// Assigned interval.
    pub interval: TimeInterval,
}

impl fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.worker_name, self.interval)
    }
}

/// Assignments at one location on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterBlock {
    /// Location name.
    pub location: String,
    /// Assignment lines.
    pub entries: Vec<RosterEntry>,
}

/// All location blocks for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterDay {
    /// Weekday.
    pub day: Weekday,
    /// One block per location, including empty ones.
    pub blocks: Vec<RosterBlock>,
}

/// The full roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    /// One entry per weekday, in processing order.
    pub days: Vec<RosterDay>,
}

impl Roster {
    /// Builds a roster from workers holding committed assignments.
    pub fn build(workers: &[Worker], locations: &[Location], weekdays: &[Weekday]) -> Self {
        let days = weekdays
            .iter()
            .map(|&day| RosterDay {
                day,
                blocks: locations
                    .iter()
                    .map(|loc| RosterBlock {
                        location: loc.name.clone(),
                        entries: workers
                            .iter()
                            .flat_map(|w| {
                                w.assignments_on(day)
                                    .iter()
                                    .filter(|a| a.location == loc.name)
                                    .map(move |a| RosterEntry {
                                        worker_id: w.id.clone(),
                                        worker_name: w.name.clone(),
                                        interval: a.interval,
                                    })
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { days }
    }

    /// The roster column for a weekday.
    pub fn day(&self, day: Weekday) -> Option<&RosterDay> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Entries at a location on a weekday (empty if either is absent).
    pub fn entries(&self, day: Weekday, location: &str) -> &[RosterEntry] {
        self.day(day)
            .and_then(|d| d.blocks.iter().find(|b| b.location == location))
            .map(|b| b.entries.as_slice())
            .unwrap_or(&[])
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.days {
            writeln!(f, "{}", day.day)?;
            for block in &day.blocks {
                writeln!(f, "  {}", block.location.to_uppercase())?;
                for entry in &block.entries {
                    writeln!(f, "    {entry}")?;
                }
            }
        }
        Ok(())
    }
}
