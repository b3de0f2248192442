//! Month-over-month comparison: always three fixed entries, computed from
//! two already-built stat sets, never from raw records.

use serde::{Deserialize, Serialize};

use crate::monthly::MonthlyStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub label: String,
    /// current − previous.
    pub change: i64,
    /// A flat month (change 0) still reads as positive.
    pub is_positive: bool,
}

impl ComparisonEntry {
    fn new(label: &str, current: usize, previous: usize) -> Self {
        let change = current as i64 - previous as i64;
        Self { label: label.to_string(), change, is_positive: change >= 0 }
    }
}

/// Exactly 3 entries, fixed labels, in this order.
pub fn compute_month_comparison(
    current: &MonthlyStats,
    previous: &MonthlyStats,
) -> Vec<ComparisonEntry> {
    vec![
        ComparisonEntry::new("tasks-completed", current.tasks_completed, previous.tasks_completed),
        ComparisonEntry::new("events-attended", current.events_attended, previous.events_attended),
        ComparisonEntry::new("goals-achieved", current.goals_achieved, previous.goals_achieved),
    ]
}
