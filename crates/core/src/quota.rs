//! Hour Quota Tracker math.
//!
//! Consumed hours are the summed durations of *confirmed* slots for a
//! (subject, cohort) pair; pending slots never count. The remaining figure
//! is informational only and never goes negative. Whether it should ever
//! hard-block a slot creation is a product decision; today it does not.

use serde::Serialize;

/// Planned vs. consumed hours for one (subject, cohort) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaSummary {
    /// The subject's planned total hours.
    pub planned: i32,
    /// Hours consumed by confirmed slots.
    pub consumed: i64,
    /// `max(0, planned - consumed)`.
    pub remaining: i64,
}

impl QuotaSummary {
    /// Build a summary from the planned load and the confirmed-hours sum.
    pub fn new(planned: i32, consumed: i64) -> QuotaSummary {
        QuotaSummary {
            planned,
            consumed,
            remaining: (i64::from(planned) - consumed).max(0),
        }
    }
}
