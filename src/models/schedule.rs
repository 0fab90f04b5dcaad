//! Schedule (solution) model.
//!
//! A schedule is the outcome of one engine run: every worker with their
//! committed assignments, the locations they were assigned against, and
//! the run counters. There is no persistence; re-running the engine on
//! fresh workers produces a new schedule.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Assignment, Location, Roster, Weekday, Worker};

/// Counters accumulated during one engine run.
///
/// The primary-location count lives here rather than on a shared
/// location value so that independent runs never interfere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Assignments made to the primary location.
    pub primary_assignments: usize,
    /// Total assignments committed.
    pub assignments: usize,
    /// Total committed minutes across all workers.
    pub committed_minutes: u32,
}

/// A completed weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Workers in input order, each holding their committed assignments.
    pub workers: Vec<Worker>,
    /// Locations in the order they were supplied.
    pub locations: Vec<Location>,
    /// Weekdays the run covered, in processing order.
    pub weekdays: Vec<Weekday>,
    /// Name of the capacity-limited primary location.
    pub primary_location: String,
    /// Capacity ceiling that applied to the primary location.
    pub primary_location_cap: usize,
    /// Run counters.
    pub stats: RunStats,
}

impl Schedule {
    /// Finds a worker by ID.
    pub fn worker(&self, id: &str) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Number of committed assignments.
    pub fn assignment_count(&self) -> usize {
        self.workers.iter().map(Worker::assignment_count).sum()
    }

    /// Number of assignments at the primary location.
    pub fn primary_count(&self) -> usize {
        self.stats.primary_assignments
    }

    /// Every assignment at a location as `(worker, day, assignment)`,
    /// ordered by worker input order, then weekday.
    pub fn assignments_for_location(&self, location: &str) -> Vec<(&Worker, Weekday, &Assignment)> {
        self.workers
            .iter()
            .flat_map(|w| {
                w.assignments().iter().flat_map(move |(&day, list)| {
                    list.iter()
                        .filter(move |a| a.location == location)
                        .map(move |a| (w, day, a))
                })
            })
            .collect()
    }

    /// Assignment count per location name.
    pub fn location_counts(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for a in self.workers.iter().flat_map(|w| w.assignments().values().flatten()) {
            *counts.entry(a.location.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Total committed hours across all workers.
    pub fn total_hours(&self) -> f64 {
        self.workers.iter().map(Worker::committed_hours).sum()
    }

    /// Workers who received no assignments, in input order.
    pub fn unassigned_workers(&self) -> Vec<&Worker> {
        self.workers.iter().filter(|w| w.is_unassigned()).collect()
    }

    /// Day-by-location view of the schedule.
    pub fn roster(&self) -> Roster {
        Roster::build(&self.workers, &self.locations, &self.weekdays)
    }
}
