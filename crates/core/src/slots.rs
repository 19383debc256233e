//! Slot validation rules: numeric bounds, approval status, week visibility
//! policy, and edit authorization.
//!
//! Every rejection maps to one distinct [`CoreError`] variant so the API
//! layer can surface a specific taxonomy value (validation, disabled-slot,
//! forbidden) with a human-readable reason. All checks here are pure; the
//! engine in `quadro-api` runs them before touching the database.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::grid::Weekday;
use crate::roles::Role;
use crate::types::DbId;

/// First period of the teaching day.
pub const MIN_PERIOD: i16 = 1;

/// Last period of the teaching day. The grid is always 15 rows tall; weeks
/// merely hide rows they do not use.
pub const MAX_PERIOD: i16 = 15;

/// Minimum slot duration in consecutive periods.
pub const MIN_DURATION: i16 = 1;

/// Maximum slot duration in consecutive periods.
pub const MAX_DURATION: i16 = 3;

// ---------------------------------------------------------------------------
// Approval status
// ---------------------------------------------------------------------------

/// Approval state of a scheduled slot.
///
/// Instructor-created slots start `Pending` and await administrator action;
/// administrator-created slots are `Confirmed` immediately. Only confirmed
/// slots count toward a subject's consumed hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Pending,
    Confirmed,
}

impl SlotStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotStatus::Pending => "pending",
            SlotStatus::Confirmed => "confirmed",
        }
    }

    /// The status a slot gets when created or rewritten by `role`.
    pub fn for_creator(role: Role) -> SlotStatus {
        if role.is_administrator() {
            SlotStatus::Confirmed
        } else {
            SlotStatus::Pending
        }
    }
}

impl FromStr for SlotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SlotStatus::Pending),
            "confirmed" => Ok(SlotStatus::Confirmed),
            other => Err(format!("Unknown slot status '{other}'")),
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Numeric bounds
// ---------------------------------------------------------------------------

/// Validate the (start period, duration) pair against the fixed grid shape.
///
/// The span must start within [1, 15], occupy 1 to 3 consecutive periods,
/// and end no later than period 15. Applies to every caller role.
pub fn validate_span(period: i16, duration: i16) -> Result<(), CoreError> {
    if !(MIN_PERIOD..=MAX_PERIOD).contains(&period) {
        return Err(CoreError::Validation(format!(
            "Period must be between {MIN_PERIOD} and {MAX_PERIOD}, got {period}"
        )));
    }
    if !(MIN_DURATION..=MAX_DURATION).contains(&duration) {
        return Err(CoreError::Validation(format!(
            "Duration must be between {MIN_DURATION} and {MAX_DURATION} periods, got {duration}"
        )));
    }
    if period + duration - 1 > MAX_PERIOD {
        return Err(CoreError::Validation(format!(
            "A slot of duration {duration} starting at period {period} runs past period {MAX_PERIOD}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Week visibility policy
// ---------------------------------------------------------------------------

/// Per-week grid-shape configuration: which weekend days and late periods
/// are open for scheduling, and how many periods a weekend day allows.
///
/// Administrators are exempt; the policy only binds instructor callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekPolicy {
    pub show_saturday: bool,
    pub show_sunday: bool,
    pub show_period_13: bool,
    pub show_period_14: bool,
    pub show_period_15: bool,
    pub max_periods_saturday: i16,
    pub max_periods_sunday: i16,
}

impl WeekPolicy {
    /// Check whether `role` may schedule a span on `day` starting at
    /// `period` for `duration` periods under this week's configuration.
    ///
    /// The span is assumed to already satisfy [`validate_span`].
    pub fn check(
        &self,
        role: Role,
        day: Weekday,
        period: i16,
        duration: i16,
    ) -> Result<(), CoreError> {
        if role.bypasses_week_policy() {
            return Ok(());
        }

        let last = period + duration - 1;

        match day {
            Weekday::Saturday => {
                if !self.show_saturday {
                    return Err(CoreError::DisabledSlot(
                        "Saturday is not open for scheduling this week".into(),
                    ));
                }
                if self.max_periods_saturday > 0 && last > self.max_periods_saturday {
                    return Err(CoreError::DisabledSlot(format!(
                        "Saturday allows at most {} periods this week",
                        self.max_periods_saturday
                    )));
                }
            }
            Weekday::Sunday => {
                if !self.show_sunday {
                    return Err(CoreError::DisabledSlot(
                        "Sunday is not open for scheduling this week".into(),
                    ));
                }
                if self.max_periods_sunday > 0 && last > self.max_periods_sunday {
                    return Err(CoreError::DisabledSlot(format!(
                        "Sunday allows at most {} periods this week",
                        self.max_periods_sunday
                    )));
                }
            }
            _ => {}
        }

        for p in period..=last {
            let enabled = match p {
                13 => self.show_period_13,
                14 => self.show_period_14,
                15 => self.show_period_15,
                _ => true,
            };
            if !enabled {
                return Err(CoreError::DisabledSlot(format!(
                    "Period {p} is not open for scheduling this week"
                )));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Edit authorization
// ---------------------------------------------------------------------------

/// Whether a caller may edit or remove an existing slot.
///
/// Administrators may edit any slot; instructors only slots assigned to
/// their own instructor profile.
pub fn can_edit_slot(
    role: Role,
    caller_instructor_id: Option<DbId>,
    slot_instructor_id: DbId,
) -> bool {
    if role.is_administrator() {
        return true;
    }
    role == Role::Instructor && caller_instructor_id == Some(slot_instructor_id)
}
