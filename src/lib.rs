//! Greedy shift assignment for small multi-location workforces.
//!
//! Assigns workers to time-bounded shifts at a handful of locations,
//! honoring per-worker weekday availability, location preferences, a
//! weekly hour cap, per-location operating windows, and a capacity cap on
//! one primary location.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Worker`, `Location`, `TimeInterval`,
//!   `Assignment`, `Schedule`, `Roster`
//! - **`scheduler`**: `ShiftScheduler` (single greedy pass), `EngineConfig`,
//!   worker ordering, and `ScheduleKpi`
//! - **`input`**: Raw `WorkerRecord`s and availability text parsing
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   locations, malformed intervals)
//!
//! # Scope
//!
//! Reading spreadsheets, generating sample data, and rendering styled
//! reports are left to callers. The engine takes parsed workers and
//! returns an in-memory schedule.
//!
//! # Example
//!
//! ```
//! use u_shift::input::{load_workers, WorkerRecord};
//! use u_shift::scheduler::{EngineConfig, ShiftScheduler};
//!
//! let config = EngineConfig::default();
//! let records = vec![
//!     WorkerRecord::new("EMP001", "Alice Smith", "Staff")
//!         .with_preferences("ERC, CSC")
//!         .with_day("Monday", "09:00-11:00,13:00-15:00"),
//! ];
//! let workers = load_workers(&records, &config).unwrap();
//!
//! let schedule = ShiftScheduler::new(config.clone())
//!     .schedule(workers, config.default_locations());
//! assert_eq!(schedule.assignment_count(), 2);
//! assert_eq!(schedule.primary_count(), 2);
//! println!("{}", schedule.roster());
//! ```

pub mod error;
pub mod input;
pub mod models;
pub mod scheduler;
pub mod validation;
