//! Approval workflow actions.
//!
//! A pending slot has exactly two administrator actions: approve (becomes
//! confirmed, terminal) or deny (the row is deleted). There is no un-confirm
//! path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Administrator decision on a pending slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalAction {
    /// Set status to confirmed; every other field is left unchanged.
    Approve,
    /// Delete the slot entirely.
    Deny,
}

impl ApprovalAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalAction::Approve => "approve",
            ApprovalAction::Deny => "deny",
        }
    }
}

impl FromStr for ApprovalAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(ApprovalAction::Approve),
            "deny" => Ok(ApprovalAction::Deny),
            other => Err(format!(
                "Invalid action '{other}'. Must be one of: approve, deny"
            )),
        }
    }
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_actions() {
        assert_eq!("approve".parse::<ApprovalAction>().unwrap(), ApprovalAction::Approve);
        assert_eq!("deny".parse::<ApprovalAction>().unwrap(), ApprovalAction::Deny);
    }

    #[test]
    fn rejects_unknown_action() {
        let err = "defer".parse::<ApprovalAction>().unwrap_err();
        assert!(err.contains("Invalid action"));
        assert!("".parse::<ApprovalAction>().is_err());
    }
}
