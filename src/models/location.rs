//! Location model.
//!
//! A location is a physical site where shifts are worked. Each location
//! has its own daily operating window; a shift is only accepted if it
//! lies entirely inside that window.

use serde::{Deserialize, Serialize};

use super::TimeInterval;

/// A site that workers can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique location name (matched against worker preferences).
    pub name: String,
    /// Daily operating window.
    pub operating_window: TimeInterval,
}

impl Location {
    /// Creates a new location.
    pub fn new(name: impl Into<String>, operating_window: TimeInterval) -> Self {
        Self {
            name: name.into(),
            operating_window,
        }
    }

    /// Whether a shift fits inside the operating window.
    pub fn accepts(&self, shift: &TimeInterval) -> bool {
        shift.is_within(&self.operating_window)
    }
}
