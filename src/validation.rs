//! Input validation for shift assignment.
//!
//! Checks worker records and locations before scheduling. The engine
//! tolerates all of these problems by assigning less; validation exists
//! so callers can report them instead of silently losing shifts.
//!
//! Detects:
//! - Duplicate worker IDs and duplicate location names
//! - Preferences naming unknown locations
//! - Unknown weekday names and unparseable availability text
//! - Intervals whose end is not after their start
//! - Locations with an empty operating window

use crate::input::{parse_ranges, WorkerRecord};
use crate::models::{ClockTime, Location, Weekday};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workers or two locations share an identifier.
    DuplicateId,
    /// A preference names a location that doesn't exist.
    UnknownLocation,
    /// An availability key is not a weekday name.
    UnknownWeekday,
    /// Availability text could not be parsed.
    MalformedAvailability,
    /// An interval ends at or before its start.
    EmptyInterval,
    /// A location's operating window ends at or before its start.
    EmptyOperatingWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates worker records against the available locations.
///
/// Checks:
/// 1. No duplicate location names
/// 2. Every location has a non-empty operating window
/// 3. No duplicate worker IDs
/// 4. Every preference names a known location
/// 5. Every availability key is a weekday name
/// 6. Every availability string parses, and every interval has `start < end`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_records(
    records: &[WorkerRecord],
    locations: &[Location],
    cutoff: ClockTime,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut location_names = HashSet::new();
    for loc in locations {
        if !location_names.insert(loc.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate location name: {}", loc.name),
            ));
        }
        if !loc.operating_window.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyOperatingWindow,
                format!(
                    "Location '{}' has empty operating window {}",
                    loc.name, loc.operating_window
                ),
            ));
        }
    }

    let mut worker_ids = HashSet::new();
    for record in records {
        if !worker_ids.insert(record.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", record.id),
            ));
        }

        for pref in &record.preferences {
            if !location_names.contains(pref.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownLocation,
                    format!("Worker '{}' prefers unknown location '{}'", record.id, pref),
                ));
            }
        }

        for (day_name, text) in &record.availability {
            if day_name.parse::<Weekday>().is_err() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownWeekday,
                    format!("Worker '{}' has availability for unknown day '{}'", record.id, day_name),
                ));
            }

            let Some(text) = text else { continue };
            match parse_ranges(text, cutoff) {
                Ok(ranges) => {
                    for interval in ranges.iter().filter(|i| !i.is_valid()) {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::EmptyInterval,
                            format!(
                                "Worker '{}' has empty interval {} on {}",
                                record.id, interval, day_name
                            ),
                        ));
                    }
                }
                Err(err) => errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedAvailability,
                    format!("Worker '{}' on {}: {}", record.id, day_name, err),
                )),
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
