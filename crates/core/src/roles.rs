//! The closed set of caller roles.
//!
//! Roles are parsed once, at token validation, so an unknown or legacy role
//! string can never reach a capability check. Capabilities are explicit
//! methods rather than ad-hoc string comparisons scattered through handlers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Caller role. Must match the `role` column seed values in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Instructor,
    Student,
}

impl Role {
    /// The canonical wire/database spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Instructor => "instructor",
            Role::Student => "student",
        }
    }

    /// Administrators schedule on behalf of any instructor, edit any slot,
    /// and their slots are confirmed immediately.
    pub fn is_administrator(self) -> bool {
        matches!(self, Role::Administrator)
    }

    /// Whether this role may propose or edit timetable slots at all.
    /// Students only ever read the grid.
    pub fn can_schedule(self) -> bool {
        matches!(self, Role::Administrator | Role::Instructor)
    }

    /// Administrators bypass the per-week visibility configuration
    /// (weekend days, periods 13-15, per-day period caps).
    pub fn bypasses_week_policy(self) -> bool {
        self.is_administrator()
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "administrator" => Ok(Role::Administrator),
            "instructor" => Ok(Role::Instructor),
            "student" => Ok(Role::Student),
            other => Err(format!("Unknown role '{other}'")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_canonical_names() {
        for role in [Role::Administrator, Role::Instructor, Role::Student] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn rejects_legacy_role_spellings() {
        // Spellings that drifted through older revisions of the system must
        // not silently grant capabilities.
        for legacy in ["admin", "super_admin", "programador", ""] {
            assert!(legacy.parse::<Role>().is_err(), "{legacy:?} should fail");
        }
    }

    #[test]
    fn only_administrator_bypasses_week_policy() {
        assert!(Role::Administrator.bypasses_week_policy());
        assert!(!Role::Instructor.bypasses_week_policy());
        assert!(!Role::Student.bypasses_week_policy());
    }

    #[test]
    fn students_cannot_schedule() {
        assert!(Role::Administrator.can_schedule());
        assert!(Role::Instructor.can_schedule());
        assert!(!Role::Student.can_schedule());
    }
}
