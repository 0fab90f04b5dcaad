//! Greedy first-fit shift assigner.
//!
//! # Algorithm
//!
//! 1. Order workers with [`processing_order`] (stable partition on role).
//! 2. For each worker, walk the configured weekdays in order, stopping
//!    once the worker has reached the weekly cap.
//! 3. For each candidate interval of the day, in declaration order, skip
//!    it if it is malformed, ends after the daily cutoff, is shorter than
//!    the minimum shift, or would push the worker over the weekly cap.
//! 4. Try the worker's preferred locations with the primary location
//!    moved to the front. Skip the primary location once it is full and
//!    any location whose operating window does not contain the interval.
//!    Commit to the first location where the worker has no overlapping
//!    assignment that day.
//!
//! One pass, no backtracking: an interval that was committed is never
//! revisited, and an earlier declared interval always wins over a later
//! one. Infeasibility is never an error; it just yields fewer assignments.
//!
//! # Complexity
//! O(w * d * c * p) where w=workers, d=weekdays, c=candidate intervals per
//! day, p=preferred locations.

use tracing::{debug, info, trace};

use super::{processing_order, EngineConfig};
use crate::models::{Location, RunStats, Schedule, TimeInterval, Weekday, Worker};

/// Greedy, deterministic shift assigner.
///
/// # Example
///
/// ```
/// use u_shift::models::{TimeInterval, Weekday, Worker};
/// use u_shift::scheduler::{EngineConfig, ShiftScheduler};
///
/// let config = EngineConfig::default();
/// let locations = config.default_locations();
/// let mut workers = vec![
///     Worker::new("EMP001", "Alice Smith")
///         .with_role("Staff")
///         .with_preference("CSC")
///         .with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 11, 0)),
/// ];
///
/// let stats = ShiftScheduler::new(config).optimize(&mut workers, &locations);
/// assert_eq!(stats.primary_assignments, 1);
/// assert_eq!(workers[0].assignments_on(Weekday::Monday)[0].location, "CSC");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    config: EngineConfig,
}

impl ShiftScheduler {
    /// Creates a scheduler with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Assigns shifts, mutating each worker's committed assignments.
    ///
    /// Workers should arrive with no prior assignments; existing ones are
    /// respected by the overlap check but not counted toward the cap.
    pub fn optimize(&self, workers: &mut [Worker], locations: &[Location]) -> RunStats {
        let cap_minutes = self.config.weekly_cap_minutes();
        let mut stats = RunStats::default();

        let order = processing_order(
            workers,
            &self.config.priority_role,
            self.config.priority_placement,
        );

        for idx in order {
            let worker = &mut workers[idx];
            let preferences = self.preference_order(&worker.preferences);
            let mut minutes_assigned: u32 = 0;

            for &day in &self.config.weekdays {
                if minutes_assigned >= cap_minutes {
                    break;
                }

                let candidates = worker.availability_on(day).to_vec();
                for interval in candidates {
                    if !self.is_eligible(interval, minutes_assigned) {
                        trace!(worker = %worker.id, %day, %interval, "candidate rejected");
                        continue;
                    }

                    if let Some(location) =
                        self.place(worker, day, interval, &preferences, locations, &mut stats)
                    {
                        let minutes = interval.duration_minutes();
                        minutes_assigned += minutes;
                        stats.assignments += 1;
                        stats.committed_minutes += minutes;
                        debug!(
                            worker = %worker.id,
                            %day,
                            %interval,
                            location,
                            "shift committed"
                        );
                    }
                }
            }
        }

        info!(
            workers = workers.len(),
            assignments = stats.assignments,
            primary = stats.primary_assignments,
            hours = f64::from(stats.committed_minutes) / 60.0,
            "schedule optimized"
        );
        stats
    }

    /// Runs [`optimize`](Self::optimize) and packages the result.
    pub fn schedule(&self, mut workers: Vec<Worker>, locations: Vec<Location>) -> Schedule {
        let stats = self.optimize(&mut workers, &locations);
        Schedule {
            workers,
            locations,
            weekdays: self.config.weekdays.clone(),
            primary_location: self.config.primary_location.clone(),
            primary_location_cap: self.config.primary_location_cap,
            stats,
        }
    }

    /// Preferred locations with the primary location moved to the front.
    fn preference_order(&self, preferences: &[String]) -> Vec<String> {
        let mut ordered = preferences.to_vec();
        // Stable: other preferences keep their relative order.
        ordered.sort_by_key(|name| *name != self.config.primary_location);
        ordered
    }

    /// Checks the interval on its own, independent of location.
    fn is_eligible(&self, interval: TimeInterval, minutes_assigned: u32) -> bool {
        if !interval.is_valid() || interval.end > self.config.daily_cutoff() {
            return false;
        }
        let minutes = interval.duration_minutes();
        minutes >= self.config.minimum_shift_minutes()
            && minutes_assigned + minutes <= self.config.weekly_cap_minutes()
    }

    /// Commits `interval` to the first acceptable preferred location.
    ///
    /// Returns the chosen location name, or `None` if nothing fit.
    fn place<'a>(
        &self,
        worker: &mut Worker,
        day: Weekday,
        interval: TimeInterval,
        preferences: &'a [String],
        locations: &[Location],
        stats: &mut RunStats,
    ) -> Option<&'a str> {
        for name in preferences {
            let is_primary = *name == self.config.primary_location;
            if is_primary && stats.primary_assignments >= self.config.primary_location_cap {
                trace!(location = %name, "primary location full");
                continue;
            }

            let Some(location) = locations.iter().find(|l| l.name == *name) else {
                trace!(worker = %worker.id, location = %name, "unknown location");
                continue;
            };
            if !location.accepts(&interval) {
                continue;
            }

            if worker.is_available(day, &interval) {
                worker.commit(day, interval, name.clone());
                if is_primary {
                    stats.primary_assignments += 1;
                }
                return Some(name.as_str());
            }
        }
        None
    }
}

/// Runs the engine with the given cap and primary location, other
/// settings at their defaults.
pub fn optimize_with_cap(
    workers: &mut [Worker],
    locations: &[Location],
    weekly_hour_cap: f64,
    primary_location: &str,
    primary_location_cap: usize,
) -> RunStats {
    let config = EngineConfig::default()
        .with_weekly_hour_cap(weekly_hour_cap)
        .with_primary_location(primary_location, primary_location_cap);
    ShiftScheduler::new(config).optimize(workers, locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::PriorityPlacement;

    fn window() -> TimeInterval {
        TimeInterval::hm(7, 0, 15, 30)
    }

    fn locations() -> Vec<Location> {
        EngineConfig::default().default_locations()
    }

    fn staff(id: &str, prefs: &[&str]) -> Worker {
        Worker::new(id, format!("Worker {id}"))
            .with_role("Staff")
            .with_preferences(prefs.iter().copied())
    }

    #[test]
    fn test_single_assignment() {
        let mut workers =
            vec![staff("E1", &["CSC"]).with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 11, 0))];
        let stats = ShiftScheduler::default().optimize(&mut workers, &locations());

        assert_eq!(stats.primary_assignments, 1);
        assert_eq!(stats.assignments, 1);
        assert_eq!(stats.committed_minutes, 120);
        let a = &workers[0].assignments_on(Weekday::Monday)[0];
        assert_eq!(a.interval, TimeInterval::hm(9, 0, 11, 0));
        assert_eq!(a.location, "CSC");
    }

    #[test]
    fn test_short_interval_rejected() {
        let mut workers =
            vec![staff("E1", &["CSC"]).with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 9, 45))];
        let stats = ShiftScheduler::default().optimize(&mut workers, &locations());
        assert_eq!(stats.assignments, 0);
        assert!(workers[0].is_unassigned());
    }

    #[test]
    fn test_exactly_minimum_accepted() {
        let mut workers =
            vec![staff("E1", &["ERC"]).with_availability(Weekday::Friday, TimeInterval::hm(13, 30, 15, 30))];
        ShiftScheduler::default().optimize(&mut workers, &locations());
        assert_eq!(workers[0].assignment_count(), 1);
    }

    #[test]
    fn test_primary_moved_to_front() {
        let mut workers = vec![staff("E1", &["ERC", "Seventh", "CSC"])
            .with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 11, 0))];
        ShiftScheduler::default().optimize(&mut workers, &locations());
        assert_eq!(workers[0].assignments_on(Weekday::Monday)[0].location, "CSC");
    }

    #[test]
    fn test_preference_order_is_stable() {
        let scheduler = ShiftScheduler::default();
        let prefs: Vec<String> = ["ERC", "Seventh", "CSC", "The Trove"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            scheduler.preference_order(&prefs),
            vec!["CSC", "ERC", "Seventh", "The Trove"]
        );
    }

    #[test]
    fn test_primary_full_falls_through() {
        let config = EngineConfig::default().with_primary_location("CSC", 1);
        let mut workers = vec![
            staff("E1", &["CSC", "ERC"]).with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 11, 0)),
            staff("E2", &["CSC", "ERC"]).with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 11, 0)),
        ];
        let stats = ShiftScheduler::new(config).optimize(&mut workers, &locations());

        assert_eq!(stats.primary_assignments, 1);
        assert_eq!(workers[0].assignments_on(Weekday::Monday)[0].location, "CSC");
        assert_eq!(workers[1].assignments_on(Weekday::Monday)[0].location, "ERC");
    }

    #[test]
    fn test_operating_window_enforced_per_location() {
        let locs = vec![
            Location::new("CSC", TimeInterval::hm(7, 0, 10, 0)),
            Location::new("ERC", window()),
        ];
        let mut workers = vec![staff("E1", &["CSC", "ERC"])
            .with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 11, 0))];
        let stats = ShiftScheduler::default().optimize(&mut workers, &locs);

        assert_eq!(stats.primary_assignments, 0);
        assert_eq!(workers[0].assignments_on(Weekday::Monday)[0].location, "ERC");
    }

    #[test]
    fn test_interval_past_cutoff_rejected() {
        // Even if a location would accept it, the global cutoff wins.
        let locs = vec![Location::new("CSC", TimeInterval::hm(7, 0, 18, 0))];
        let mut workers = vec![staff("E1", &["CSC"])
            .with_availability(Weekday::Monday, TimeInterval::hm(14, 0, 16, 0))];
        ShiftScheduler::default().optimize(&mut workers, &locs);
        assert!(workers[0].is_unassigned());
    }

    #[test]
    fn test_malformed_interval_rejected() {
        let mut workers = vec![staff("E1", &["CSC"])
            .with_availability(Weekday::Monday, TimeInterval::hm(13, 0, 9, 0))
            .with_availability(Weekday::Monday, TimeInterval::hm(10, 0, 10, 0))];
        let stats = ShiftScheduler::default().optimize(&mut workers, &locations());
        assert_eq!(stats.assignments, 0);
    }

    #[test]
    fn test_overlapping_candidates_first_wins() {
        let mut workers = vec![staff("E1", &["CSC"])
            .with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 11, 0))
            .with_availability(Weekday::Monday, TimeInterval::hm(10, 0, 12, 0))];
        ShiftScheduler::default().optimize(&mut workers, &locations());

        let monday = workers[0].assignments_on(Weekday::Monday);
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].interval, TimeInterval::hm(9, 0, 11, 0));
    }

    #[test]
    fn test_declaration_order_not_sorted() {
        let mut workers = vec![staff("E1", &["ERC"])
            .with_availability(Weekday::Monday, TimeInterval::hm(13, 0, 15, 0))
            .with_availability(Weekday::Monday, TimeInterval::hm(7, 0, 9, 0))];
        let config = EngineConfig::default().with_weekly_hour_cap(2.0);
        ShiftScheduler::new(config).optimize(&mut workers, &locations());

        // Cap allows one shift; the first declared one is taken.
        let monday = workers[0].assignments_on(Weekday::Monday);
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].interval, TimeInterval::hm(13, 0, 15, 0));
    }

    #[test]
    fn test_weekly_cap() {
        // 5 days x 4.5h = 22.5h offered, cap 19.5h → 4 days (18h); the
        // fifth would reach 22.5h.
        let mut w = staff("E1", &["ERC"]);
        for day in Weekday::WORKWEEK {
            w = w.with_availability(day, TimeInterval::hm(9, 0, 13, 30));
        }
        let mut workers = vec![w];
        let stats = ShiftScheduler::default().optimize(&mut workers, &locations());

        assert_eq!(stats.assignments, 4);
        assert_eq!(workers[0].committed_minutes(), 1080);
        assert!(workers[0].assignments_on(Weekday::Friday).is_empty());
    }

    #[test]
    fn test_limits_between_whole_minutes() {
        let slot = || {
            vec![staff("E1", &["ERC"]).with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 11, 0))]
        };

        let config = EngineConfig::default().with_weekly_hour_cap(1.999);
        let mut workers = slot();
        ShiftScheduler::new(config.clone()).optimize(&mut workers, &locations());
        assert!(workers[0].committed_hours() <= config.weekly_hour_cap);
        assert!(workers[0].is_unassigned());

        let config = EngineConfig::default().with_minimum_shift_hours(2.005);
        let mut workers = slot();
        ShiftScheduler::new(config).optimize(&mut workers, &locations());
        assert_eq!(workers[0].assignment_count(), 0);
    }

    #[test]
    fn test_cap_allows_smaller_later_interval() {
        // 18h used; a 1.5h slot fits under 19.5h only if it meets the minimum.
        let mut w = staff("E1", &["ERC"]);
        for day in &Weekday::WORKWEEK[..4] {
            w = w.with_availability(*day, TimeInterval::hm(9, 0, 13, 30));
        }
        w = w
            .with_availability(Weekday::Friday, TimeInterval::hm(7, 0, 11, 0))
            .with_availability(Weekday::Friday, TimeInterval::hm(12, 0, 13, 30));
        let config = EngineConfig::default().with_minimum_shift_hours(1.5);
        let mut workers = vec![w];
        ShiftScheduler::new(config).optimize(&mut workers, &locations());

        let friday = workers[0].assignments_on(Weekday::Friday);
        assert_eq!(friday.len(), 1);
        assert_eq!(friday[0].interval, TimeInterval::hm(12, 0, 13, 30));
        assert_eq!(workers[0].committed_minutes(), 1170);
    }

    #[test]
    fn test_unknown_location_ignored() {
        let mut workers = vec![staff("E1", &["Library", "Seventh"])
            .with_availability(Weekday::Tuesday, TimeInterval::hm(10, 0, 12, 30))];
        ShiftScheduler::default().optimize(&mut workers, &locations());
        assert_eq!(workers[0].assignments_on(Weekday::Tuesday)[0].location, "Seventh");
    }

    #[test]
    fn test_weekend_availability_ignored_by_default() {
        let mut workers = vec![staff("E1", &["CSC"])
            .with_availability(Weekday::Saturday, TimeInterval::hm(9, 0, 12, 0))];
        ShiftScheduler::default().optimize(&mut workers, &locations());
        assert!(workers[0].is_unassigned());

        let config = EngineConfig::default().with_weekdays([Weekday::Saturday]);
        ShiftScheduler::new(config).optimize(&mut workers, &locations());
        assert_eq!(workers[0].assignment_count(), 1);
    }

    #[test]
    fn test_priority_workers_processed_last() {
        let config = EngineConfig::default().with_primary_location("CSC", 1);
        let slot = TimeInterval::hm(9, 0, 11, 0);
        let mut workers = vec![
            Worker::new("L1", "Lead")
                .with_role("lead")
                .with_preference("CSC")
                .with_availability(Weekday::Monday, slot),
            staff("S1", &["CSC"]).with_availability(Weekday::Monday, slot),
        ];
        ShiftScheduler::new(config.clone()).optimize(&mut workers, &locations());
        assert!(workers[0].is_unassigned());
        assert_eq!(workers[1].assignment_count(), 1);

        let mut workers = vec![
            Worker::new("L1", "Lead")
                .with_role("lead")
                .with_preference("CSC")
                .with_availability(Weekday::Monday, slot),
            staff("S1", &["CSC"]).with_availability(Weekday::Monday, slot),
        ];
        let config = config.with_priority_placement(PriorityPlacement::First);
        ShiftScheduler::new(config).optimize(&mut workers, &locations());
        assert_eq!(workers[0].assignment_count(), 1);
        assert!(workers[1].is_unassigned());
    }

    #[test]
    fn test_schedule_packages_result() {
        let workers = vec![
            staff("E1", &["CSC"]).with_availability(Weekday::Monday, TimeInterval::hm(9, 0, 11, 0)),
            staff("E2", &["ERC"]),
        ];
        let schedule = ShiftScheduler::default().schedule(workers, locations());
        assert_eq!(schedule.assignment_count(), 1);
        assert_eq!(schedule.primary_count(), 1);
        assert_eq!(schedule.primary_location_cap, 10);
        assert_eq!(schedule.weekdays.len(), 5);
        assert_eq!(schedule.unassigned_workers()[0].id, "E2");
    }

    #[test]
    fn test_optimize_with_cap() {
        let mut workers = vec![
            staff("E1", &["ERC"]).with_availability(Weekday::Monday, TimeInterval::hm(7, 0, 10, 0)),
        ];
        let stats = optimize_with_cap(&mut workers, &locations(), 2.5, "ERC", 0);
        // 3h exceeds the 2.5h cap
        assert_eq!(stats.assignments, 0);

        let stats = optimize_with_cap(&mut workers, &locations(), 3.0, "ERC", 0);
        // ERC is primary with zero capacity
        assert_eq!(stats.assignments, 0);

        let stats = optimize_with_cap(&mut workers, &locations(), 3.0, "ERC", 1);
        assert_eq!(stats.primary_assignments, 1);
    }

    #[test]
    fn test_empty_input() {
        let stats = ShiftScheduler::default().optimize(&mut [], &[]);
        assert_eq!(stats, RunStats::default());
    }
}
