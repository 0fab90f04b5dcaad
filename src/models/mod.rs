//! Shift assignment domain models.
//!
//! Provides the data types for representing who can work when, where
//! shifts may be worked, and what was assigned.
//!
//! # Domain Mappings
//!
//! | u-shift | Campus staffing | Retail | Clinic |
//! |---------|-----------------|--------|--------|
//! | Worker | Student employee | Associate | Nurse |
//! | Location | Service desk | Store | Ward |
//! | TimeInterval | Class-free block | Shift slot | Rota slot |
//! | Schedule | Weekly desk plan | Weekly rota | Weekly roster |

mod location;
mod roster;
mod schedule;
mod time;
mod weekday;
mod worker;

pub use location::Location;
pub use roster::{Roster, RosterBlock, RosterDay, RosterEntry};
pub use schedule::{RunStats, Schedule};
pub use time::{ClockTime, TimeInterval};
pub use weekday::Weekday;
pub use worker::{Assignment, Worker};
