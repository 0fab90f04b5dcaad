//! Schedule quality metrics (KPIs).
//!
//! The engine does not optimize any of these; they describe how well a
//! greedy run covered the workforce.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Hours | Sum of committed durations |
//! | Coverage Rate | Fraction of workers with at least one assignment |
//! | Avg Hours | Mean committed hours per assigned worker |
//! | Primary Fill | Primary assignments / primary cap |
//! | Assignments by Location | Count per location name |

use std::collections::HashMap;

use crate::models::Schedule;

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Total committed hours.
    pub total_hours: f64,
    /// Committed hours per worker ID.
    pub hours_by_worker: HashMap<String, f64>,
    /// Assignment count per location name.
    pub assignments_by_location: HashMap<String, usize>,
    /// IDs of workers with no assignments, in input order.
    pub unassigned_workers: Vec<String>,
    /// Fraction of workers with at least one assignment (0.0..1.0).
    pub coverage_rate: f64,
    /// Mean hours over workers with at least one assignment.
    pub avg_hours_assigned: f64,
    /// Primary-location fill ratio (0.0..1.0); 0.0 when the cap is zero.
    pub primary_fill: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let hours_by_worker: HashMap<String, f64> = schedule
            .workers
            .iter()
            .map(|w| (w.id.clone(), w.committed_hours()))
            .collect();

        let unassigned_workers: Vec<String> = schedule
            .unassigned_workers()
            .iter()
            .map(|w| w.id.clone())
            .collect();

        let total_hours = schedule.total_hours();
        let worker_count = schedule.workers.len();
        let assigned_count = worker_count - unassigned_workers.len();

        let coverage_rate = if worker_count == 0 {
            0.0
        } else {
            assigned_count as f64 / worker_count as f64
        };

        let avg_hours_assigned = if assigned_count == 0 {
            0.0
        } else {
            total_hours / assigned_count as f64
        };

        let primary_fill = if schedule.primary_location_cap == 0 {
            0.0
        } else {
            schedule.primary_count() as f64 / schedule.primary_location_cap as f64
        };

        Self {
            total_hours,
            hours_by_worker,
            assignments_by_location: schedule.location_counts(),
            unassigned_workers,
            coverage_rate,
            avg_hours_assigned,
            primary_fill,
        }
    }

    /// Whether at least `min_coverage` of the workforce was assigned.
    pub fn meets_coverage(&self, min_coverage: f64) -> bool {
        self.coverage_rate >= min_coverage
    }
}
