//! Worker processing order.
//!
//! Workers are processed one at a time and earlier workers see more free
//! capacity, so the order decides who gets scarce primary-location slots.
//! Ordering is a stable partition on the role tag: workers keep their
//! input order within each group.

use serde::{Deserialize, Serialize};

use crate::models::Worker;

/// Where workers carrying the priority role are placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityPlacement {
    /// Priority workers are processed after everyone else.
    #[default]
    Last,
    /// Priority workers are processed before everyone else.
    First,
}

/// Returns worker indices in processing order.
pub fn processing_order(
    workers: &[Worker],
    priority_role: &str,
    placement: PriorityPlacement,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..workers.len()).collect();
    // sort_by_key is stable, so input order survives within each group
    indices.sort_by_key(|&i| {
        let is_priority = workers[i].has_role(priority_role);
        match placement {
            PriorityPlacement::Last => is_priority,
            PriorityPlacement::First => !is_priority,
        }
    });
    indices
}
