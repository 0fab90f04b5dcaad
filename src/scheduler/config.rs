//! Engine configuration.
//!
//! Every tunable constant of the assignment engine lives here so tests
//! and callers can vary them. Defaults reproduce the reference campus
//! deployment: 19.5 h weekly cap, 2 h minimum shift, 07:00-15:30 at every
//! location, and at most 10 assignments at "CSC".
//!
//! Configuration can be loaded from a partial TOML document; missing keys
//! keep their defaults.
//!
//! ```
//! use u_shift::scheduler::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     weekly_hour_cap = 12.0
//!     primary_location_cap = 4
//! "#).unwrap();
//! assert_eq!(config.primary_location_cap, 4);
//! assert_eq!(config.primary_location, "CSC");
//! ```

use serde::{Deserialize, Serialize};

use super::PriorityPlacement;
use crate::error::ConfigError;
use crate::models::{ClockTime, Location, TimeInterval, Weekday};

/// Location names of the reference deployment, primary first.
pub const DEFAULT_LOCATIONS: [&str; 4] = ["CSC", "The Trove", "Seventh", "ERC"];

/// Tunable parameters for [`ShiftScheduler`](super::ShiftScheduler).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum committed hours per worker per run.
    pub weekly_hour_cap: f64,
    /// Shortest shift that may be committed (hours).
    pub minimum_shift_hours: f64,
    /// Daily operating window. Used for default locations and as the
    /// global cutoff no committed shift may end after.
    pub operating_window: TimeInterval,
    /// Name of the capacity-limited primary location.
    pub primary_location: String,
    /// Maximum assignments at the primary location per run.
    pub primary_location_cap: usize,
    /// Weekdays to schedule, in processing order.
    pub weekdays: Vec<Weekday>,
    /// Role tag that marks priority workers (case-insensitive).
    pub priority_role: String,
    /// Where priority workers go in the processing order.
    pub priority_placement: PriorityPlacement,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weekly_hour_cap: 19.5,
            minimum_shift_hours: 2.0,
            operating_window: TimeInterval::hm(7, 0, 15, 30),
            primary_location: DEFAULT_LOCATIONS[0].to_string(),
            primary_location_cap: 10,
            weekdays: Weekday::WORKWEEK.to_vec(),
            priority_role: "Lead".to_string(),
            priority_placement: PriorityPlacement::default(),
        }
    }
}

impl EngineConfig {
    /// Parses a (possibly partial) TOML document and validates it.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the weekly hour cap.
    pub fn with_weekly_hour_cap(mut self, hours: f64) -> Self {
        self.weekly_hour_cap = hours;
        self
    }

    /// Sets the minimum shift length.
    pub fn with_minimum_shift_hours(mut self, hours: f64) -> Self {
        self.minimum_shift_hours = hours;
        self
    }

    /// Sets the daily operating window.
    pub fn with_operating_window(mut self, window: TimeInterval) -> Self {
        self.operating_window = window;
        self
    }

    /// Sets the primary location and its capacity.
    pub fn with_primary_location(mut self, name: impl Into<String>, cap: usize) -> Self {
        self.primary_location = name.into();
        self.primary_location_cap = cap;
        self
    }

    /// Sets the weekday processing order.
    pub fn with_weekdays(mut self, weekdays: impl Into<Vec<Weekday>>) -> Self {
        self.weekdays = weekdays.into();
        self
    }

    /// Sets the priority role tag.
    pub fn with_priority_role(mut self, role: impl Into<String>) -> Self {
        self.priority_role = role.into();
        self
    }

    /// Sets where priority workers are placed in the processing order.
    pub fn with_priority_placement(mut self, placement: PriorityPlacement) -> Self {
        self.priority_placement = placement;
        self
    }

    /// Checks that numeric limits are positive and the window is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("weekly_hour_cap", self.weekly_hour_cap)?;
        ensure_positive("minimum_shift_hours", self.minimum_shift_hours)?;
        if !self.operating_window.is_valid() {
            return Err(ConfigError::EmptyOperatingWindow(
                self.operating_window.to_string(),
            ));
        }
        if self.primary_location.trim().is_empty() {
            return Err(ConfigError::EmptyPrimaryLocation);
        }
        Ok(())
    }

    /// Largest whole number of minutes that stays within the weekly cap.
    pub fn weekly_cap_minutes(&self) -> u32 {
        minutes_at_most(self.weekly_hour_cap)
    }

    /// Smallest whole number of minutes that meets the minimum shift length.
    pub fn minimum_shift_minutes(&self) -> u32 {
        minutes_at_least(self.minimum_shift_hours)
    }

    /// Latest time any committed shift may end.
    pub fn daily_cutoff(&self) -> ClockTime {
        self.operating_window.end
    }

    /// The reference locations, each open during the configured window.
    pub fn default_locations(&self) -> Vec<Location> {
        DEFAULT_LOCATIONS
            .iter()
            .map(|name| Location::new(*name, self.operating_window))
            .collect()
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn as_hours(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}

// Both conversions agree with comparing `minutes / 60.0` against the
// configured hours, so a minute-based check never admits a shift the
// hour-based check would refuse.
fn minutes_at_most(hours: f64) -> u32 {
    if hours.is_nan() || hours <= 0.0 {
        return 0;
    }
    if hours * 60.0 >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    let mut minutes = (hours * 60.0).floor() as u32;
    while minutes > 0 && as_hours(minutes) > hours {
        minutes -= 1;
    }
    while as_hours(minutes + 1) <= hours {
        minutes += 1;
    }
    minutes
}

fn minutes_at_least(hours: f64) -> u32 {
    if hours.is_nan() || hours <= 0.0 {
        return 0;
    }
    if hours * 60.0 >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    let mut minutes = (hours * 60.0).ceil() as u32;
    while minutes > 0 && as_hours(minutes - 1) >= hours {
        minutes -= 1;
    }
    while as_hours(minutes) < hours {
        minutes += 1;
    }
    minutes
}
