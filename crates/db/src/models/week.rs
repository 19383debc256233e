//! Week entity: the temporal frame for one scheduling pass, including the
//! per-week grid-shape configuration.

use chrono::NaiveDate;
use quadro_core::slots::WeekPolicy;
use quadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `weeks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Week {
    pub id: DbId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cycle: i32,
    pub show_saturday: bool,
    pub show_sunday: bool,
    pub show_period_13: bool,
    pub show_period_14: bool,
    pub show_period_15: bool,
    pub max_periods_saturday: i16,
    pub max_periods_sunday: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Week {
    /// The visibility policy this week imposes on non-administrators.
    pub fn policy(&self) -> WeekPolicy {
        WeekPolicy {
            show_saturday: self.show_saturday,
            show_sunday: self.show_sunday,
            show_period_13: self.show_period_13,
            show_period_14: self.show_period_14,
            show_period_15: self.show_period_15,
            max_periods_saturday: self.max_periods_saturday,
            max_periods_sunday: self.max_periods_sunday,
        }
    }
}

/// DTO for creating a week.
#[derive(Debug, Deserialize)]
pub struct CreateWeek {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_cycle")]
    pub cycle: i32,
    #[serde(default)]
    pub show_saturday: bool,
    #[serde(default)]
    pub show_sunday: bool,
    #[serde(default)]
    pub show_period_13: bool,
    #[serde(default)]
    pub show_period_14: bool,
    #[serde(default)]
    pub show_period_15: bool,
    #[serde(default)]
    pub max_periods_saturday: i16,
    #[serde(default)]
    pub max_periods_sunday: i16,
}

fn default_cycle() -> i32 {
    1
}
