//! Timetable Grid Builder.
//!
//! Renders one (cohort, week) as a fixed 15-period × 7-day matrix. Cells
//! default to an independent "disposal" placeholder; persisted slots are
//! written in as occupancy records, with continuation markers below a
//! multi-period slot. Rows whose day name or period no longer fits the grid
//! (stale data from an older grid shape) are skipped rather than failing
//! the whole render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::types::DbId;

/// Number of teaching periods per day (grid rows).
pub const GRID_PERIODS: usize = 15;

/// Number of days per week (grid columns), Monday first.
pub const GRID_DAYS: usize = 7;

/// Label shown in every unoccupied cell.
pub const DISPOSAL_LABEL: &str = "At the unit's disposal";

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// Day of the week, in fixed column order Monday..Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All weekdays in grid column order.
pub const WEEKDAYS: [Weekday; GRID_DAYS] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Grid column index, 0 = Monday .. 6 = Sunday.
    pub fn column(self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            other => Err(format!("Unknown weekday '{other}'")),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Builder input
// ---------------------------------------------------------------------------

/// One persisted slot, joined with its display fields, as fed to the builder.
///
/// `day_of_week` stays a raw string here: the builder is the defensive
/// boundary that tolerates legacy rows with day names the current grid no
/// longer recognises.
#[derive(Debug, Clone)]
pub struct SlotView {
    pub id: DbId,
    pub day_of_week: String,
    pub period: i16,
    pub duration: i16,
    pub subject_name: String,
    pub instructor_name: String,
    pub instructor_id: DbId,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Grid cells
// ---------------------------------------------------------------------------

/// One cell of the rendered timetable matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    /// No class scheduled here.
    Disposal { label: String },
    /// Start cell of a scheduled slot.
    Class {
        slot_id: DbId,
        subject: String,
        instructor: String,
        duration: i16,
        status: String,
        can_edit: bool,
    },
    /// Covered by the multi-period slot above it in the same column.
    Continuation,
}

impl GridCell {
    /// A fresh placeholder value. Each cell gets its own copy; the
    /// placeholder is never shared by reference across cells.
    pub fn disposal() -> GridCell {
        GridCell::Disposal {
            label: DISPOSAL_LABEL.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the 15×7 timetable matrix for one (cohort, week).
///
/// `role` and `caller_instructor_id` drive the per-cell `can_edit` flag:
/// administrators may edit everything, instructors only their own slots.
///
/// Slots with an unrecognised day name or an out-of-range period are
/// skipped; continuation markers stop at the bottom edge of the grid.
pub fn build_grid(
    slots: &[SlotView],
    role: Role,
    caller_instructor_id: Option<DbId>,
) -> Vec<Vec<GridCell>> {
    let mut matrix: Vec<Vec<GridCell>> = (0..GRID_PERIODS)
        .map(|_| (0..GRID_DAYS).map(|_| GridCell::disposal()).collect())
        .collect();

    for slot in slots {
        let Ok(day) = slot.day_of_week.parse::<Weekday>() else {
            continue;
        };
        let Ok(row) = usize::try_from(slot.period - 1) else {
            continue;
        };
        if row >= GRID_PERIODS {
            continue;
        }

        let can_edit =
            crate::slots::can_edit_slot(role, caller_instructor_id, slot.instructor_id);

        matrix[row][day.column()] = GridCell::Class {
            slot_id: slot.id,
            subject: slot.subject_name.clone(),
            instructor: slot.instructor_name.clone(),
            duration: slot.duration,
            status: slot.status.clone(),
            can_edit,
        };

        for offset in 1..slot.duration as usize {
            let Some(cell_row) = matrix.get_mut(row + offset) else {
                break;
            };
            cell_row[day.column()] = GridCell::Continuation;
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn slot(id: DbId, day: &str, period: i16, duration: i16) -> SlotView {
        SlotView {
            id,
            day_of_week: day.to_string(),
            period,
            duration,
            subject_name: "Close Order Drill".to_string(),
            instructor_name: "Sgt Bastos".to_string(),
            instructor_id: 1,
            status: "confirmed".to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // Empty grid
    // -----------------------------------------------------------------------

    #[test]
    fn empty_grid_is_all_placeholders() {
        let matrix = build_grid(&[], Role::Instructor, Some(1));
        assert_eq!(matrix.len(), GRID_PERIODS);
        for row in &matrix {
            assert_eq!(row.len(), GRID_DAYS);
            for cell in row {
                assert_eq!(*cell, GridCell::disposal());
            }
        }
    }

    #[test]
    fn placeholder_cells_are_independent_values() {
        let mut matrix = build_grid(&[], Role::Student, None);
        if let GridCell::Disposal { label } = &mut matrix[0][0] {
            label.push_str(" (edited)");
        }
        // Mutating one cell must not leak into any sibling.
        assert_eq!(matrix[0][1], GridCell::disposal());
        assert_eq!(matrix[1][0], GridCell::disposal());
    }

    // -----------------------------------------------------------------------
    // Placement and continuation markers
    // -----------------------------------------------------------------------

    #[test]
    fn single_period_slot_occupies_one_cell() {
        let matrix = build_grid(&[slot(10, "wednesday", 5, 1)], Role::Administrator, None);
        assert_matches!(matrix[4][2], GridCell::Class { slot_id: 10, .. });
        assert_eq!(matrix[5][2], GridCell::disposal());
    }

    #[test]
    fn multi_period_slot_marks_continuations_in_same_column() {
        let matrix = build_grid(&[slot(10, "monday", 3, 3)], Role::Administrator, None);
        assert_matches!(matrix[2][0], GridCell::Class { duration: 3, .. });
        assert_eq!(matrix[3][0], GridCell::Continuation);
        assert_eq!(matrix[4][0], GridCell::Continuation);
        assert_eq!(matrix[5][0], GridCell::disposal());
        // Neighbouring columns untouched.
        assert_eq!(matrix[3][1], GridCell::disposal());
    }

    #[test]
    fn continuations_truncate_at_grid_boundary() {
        // Starts at the last row: duration spills past period 15 and the
        // overflow is dropped without error.
        let matrix = build_grid(&[slot(10, "friday", 15, 3)], Role::Administrator, None);
        assert_matches!(matrix[14][4], GridCell::Class { .. });
        for row in &matrix[..14] {
            assert_eq!(row[4], GridCell::disposal());
        }
    }

    // -----------------------------------------------------------------------
    // Defensive skips
    // -----------------------------------------------------------------------

    #[test]
    fn unknown_day_name_is_skipped() {
        let matrix = build_grid(&[slot(10, "feriado", 1, 1)], Role::Administrator, None);
        assert_eq!(matrix[0][0], GridCell::disposal());
    }

    #[test]
    fn out_of_range_period_is_skipped() {
        let stale_high = slot(10, "monday", 22, 1);
        let stale_low = slot(11, "monday", 0, 1);
        let matrix = build_grid(&[stale_high, stale_low], Role::Administrator, None);
        for row in &matrix {
            for cell in row {
                assert_eq!(*cell, GridCell::disposal());
            }
        }
    }

    #[test]
    fn valid_slots_still_render_next_to_skipped_ones() {
        let matrix = build_grid(
            &[slot(10, "feriado", 1, 1), slot(11, "tuesday", 1, 1)],
            Role::Administrator,
            None,
        );
        assert_matches!(matrix[0][1], GridCell::Class { slot_id: 11, .. });
    }

    // -----------------------------------------------------------------------
    // can_edit flag
    // -----------------------------------------------------------------------

    #[test]
    fn administrator_can_edit_every_slot() {
        let matrix = build_grid(&[slot(10, "monday", 1, 1)], Role::Administrator, None);
        assert_matches!(matrix[0][0], GridCell::Class { can_edit: true, .. });
    }

    #[test]
    fn instructor_can_edit_only_own_slot() {
        let own = build_grid(&[slot(10, "monday", 1, 1)], Role::Instructor, Some(1));
        assert_matches!(own[0][0], GridCell::Class { can_edit: true, .. });

        let other = build_grid(&[slot(10, "monday", 1, 1)], Role::Instructor, Some(2));
        assert_matches!(other[0][0], GridCell::Class { can_edit: false, .. });
    }

    #[test]
    fn student_view_is_read_only() {
        let matrix = build_grid(&[slot(10, "monday", 1, 1)], Role::Student, None);
        assert_matches!(matrix[0][0], GridCell::Class { can_edit: false, .. });
    }

    // -----------------------------------------------------------------------
    // Weekday parsing
    // -----------------------------------------------------------------------

    #[test]
    fn weekday_columns_follow_monday_first_order() {
        for (idx, day) in WEEKDAYS.iter().enumerate() {
            assert_eq!(day.column(), idx);
            assert_eq!(day.as_str().parse::<Weekday>().unwrap(), *day);
        }
    }
}
