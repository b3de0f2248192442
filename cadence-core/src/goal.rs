//! Daily goal snapshot types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalItemStatus {
    #[serde(rename = "done")]
    Done,
    #[serde(rename = "not-done")]
    NotDone,
    #[serde(rename = "partial")]
    Partial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalItem {
    pub text: String,
    pub status: GoalItemStatus,
}

/// One goal record per day; items belong to exactly that day.
///
/// Only `Done` items count as achieved; `Partial` exists on the wire but
/// never contributes to completion totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoal {
    pub date: NaiveDate,
    pub items: Vec<GoalItem>,
}

impl DailyGoal {
    pub fn new(date: NaiveDate, items: Vec<GoalItem>) -> Self {
        Self { date, items }
    }

    /// A day's goal is achieved when it has items and every item is `Done`.
    pub fn is_achieved(&self) -> bool {
        !self.items.is_empty()
            && self.items.iter().all(|i| i.status == GoalItemStatus::Done)
    }
}
