//! Error types for the input boundary.
//!
//! The assignment engine itself never fails: infeasible input simply
//! produces fewer assignments. Errors only arise while turning raw
//! records and configuration text into domain values.

use thiserror::Error;

/// Errors raised while parsing availability text or clock times.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A clock time was not in `HH:MM` form.
    #[error("invalid clock time '{input}': expected HH:MM")]
    InvalidTime {
        /// The offending text.
        input: String,
    },

    /// A time range was not in `HH:MM-HH:MM` form.
    #[error("invalid time range '{input}': expected HH:MM-HH:MM")]
    InvalidRange {
        /// The offending text.
        input: String,
    },

    /// A weekday name could not be recognised.
    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),
}

/// Errors raised while loading or checking an [`EngineConfig`](crate::scheduler::EngineConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be deserialized.
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A numeric setting must be strictly positive.
    #[error("'{field}' must be positive, got {value}")]
    NonPositive {
        /// Setting name.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// The operating window must have its start before its end.
    #[error("operating window {0} is empty")]
    EmptyOperatingWindow(String),

    /// The primary location name must not be blank.
    #[error("primary location name is empty")]
    EmptyPrimaryLocation,
}
