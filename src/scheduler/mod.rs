//! Greedy shift assignment and KPI evaluation.
//!
//! # Algorithm
//!
//! `ShiftScheduler` makes one deterministic first-fit pass over
//! workers × weekdays × candidate intervals × preferred locations. It is
//! not optimal: outcomes depend on worker order and declaration order,
//! and nothing committed is ever undone.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes coverage: total hours, per-worker hours,
//! per-location counts, and which workers received nothing.

mod config;
mod greedy;
mod kpi;
mod ordering;

pub use config::{EngineConfig, DEFAULT_LOCATIONS};
pub use greedy::{optimize_with_cap, ShiftScheduler};
pub use kpi::ScheduleKpi;
pub use ordering::{processing_order, PriorityPlacement};
