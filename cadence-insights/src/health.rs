//! Health scorer: six workload signals into a 0-100 score and a status tier.

use cadence_core::{within_next_days, Event, Task};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::streak::{calculate_daily_load, calculate_streak_pressure};

const OPEN_TASK_WEIGHT: f64 = 0.8;
const OVERDUE_WEIGHT: f64 = 5.0;
const EVENTS_TODAY_WEIGHT: f64 = 3.0;
const EVENTS_WEEK_WEIGHT: f64 = 0.5;
const BACKLOG_WEIGHT: f64 = 3.0;
const STREAK_WEIGHT: f64 = 8.0;

const CALM_MAX: u32 = 35;
const BUSY_MAX: u32 = 70;

/// The inline hint list never exceeds this.
const MAX_DETAIL_INSIGHTS: usize = 2;

/// Open tasks due within this many days count as backlog pressure.
pub const BACKLOG_WINDOW_DAYS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "calm")]
    Calm,
    #[serde(rename = "busy")]
    Busy,
    #[serde(rename = "overloaded")]
    Overloaded,
}

/// Raw workload signals. Unsigned by construction, so the scorer is total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInputs {
    pub open_tasks: u32,
    pub overdue_tasks: u32,
    pub events_today: u32,
    pub events_week: u32,
    /// Open tasks due within the next 3 days.
    pub backlog_pressure: u32,
    /// Consecutive heavy days starting today, 0-5 (see `streak`).
    pub streak_pressure: u32,
}

impl HealthInputs {
    /// Derive the six signals from a raw snapshot.
    ///
    /// The week window is `[today, today + 6]`; the 7-day load series for
    /// streak pressure counts events plus open due tasks per day.
    pub fn from_snapshot(tasks: &[Task], events: &[Event], today: NaiveDate) -> Self {
        let day_load = |date: NaiveDate| -> u32 {
            let ev = events.iter().filter(|e| e.date == date).count() as u32;
            let due = tasks
                .iter()
                .filter(|t| t.is_open() && t.due_date == Some(date))
                .count() as u32;
            calculate_daily_load(ev, due)
        };

        let loads: Vec<u32> = (0..7)
            .filter_map(|offset| today.checked_add_days(Days::new(offset)))
            .map(day_load)
            .collect();

        Self {
            open_tasks: tasks.iter().filter(|t| t.is_open()).count() as u32,
            overdue_tasks: tasks.iter().filter(|t| t.is_overdue(today)).count() as u32,
            events_today: events.iter().filter(|e| e.date == today).count() as u32,
            events_week: events
                .iter()
                .filter(|e| within_next_days(e.date, today, 6))
                .count() as u32,
            backlog_pressure: tasks
                .iter()
                .filter(|t| {
                    t.is_open()
                        && t.due_date
                            .is_some_and(|due| within_next_days(due, today, BACKLOG_WINDOW_DAYS))
                })
                .count() as u32,
            streak_pressure: calculate_streak_pressure(&loads),
        }
    }
}

/// Raw counts echoed back plus at most two inline hint strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDetails {
    pub counts: HealthInputs,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResult {
    /// Weighted score, rounded and clamped to [0, 100].
    pub score: u32,
    pub status: HealthStatus,
    pub details: HealthDetails,
}

/// Pure and total for any inputs; same inputs always yield the same result.
pub fn compute_health_score(inputs: &HealthInputs) -> HealthResult {
    let raw = f64::from(inputs.open_tasks) * OPEN_TASK_WEIGHT
        + f64::from(inputs.overdue_tasks) * OVERDUE_WEIGHT
        + f64::from(inputs.events_today) * EVENTS_TODAY_WEIGHT
        + f64::from(inputs.events_week) * EVENTS_WEEK_WEIGHT
        + f64::from(inputs.backlog_pressure) * BACKLOG_WEIGHT
        + f64::from(inputs.streak_pressure) * STREAK_WEIGHT;

    let score = (raw.round() as u32).min(100);

    HealthResult {
        score,
        status: status_for(score),
        details: HealthDetails {
            counts: *inputs,
            insights: detail_insights(inputs),
        },
    }
}

/// Tier cut points are exact: <=35 calm, <=70 busy, else overloaded.
fn status_for(score: u32) -> HealthStatus {
    if score <= CALM_MAX {
        HealthStatus::Calm
    } else if score <= BUSY_MAX {
        HealthStatus::Busy
    } else {
        HealthStatus::Overloaded
    }
}

/// Ordered checklist, first-match order preserved. Intentionally not the
/// ranked insight engine; these are quick header hints.
fn detail_insights(inputs: &HealthInputs) -> Vec<String> {
    let mut out = Vec::new();

    if inputs.overdue_tasks > 0 {
        out.push(format!("{} overdue tasks need attention", inputs.overdue_tasks));
    }
    if inputs.backlog_pressure > 3 {
        out.push(format!(
            "{} tasks are due in the next {} days",
            inputs.backlog_pressure, BACKLOG_WINDOW_DAYS
        ));
    }
    if inputs.events_today > 4 {
        out.push(format!("{} events on today's calendar", inputs.events_today));
    }
    if inputs.streak_pressure >= 3 {
        out.push(format!(
            "{} heavy days in a row starting today",
            inputs.streak_pressure
        ));
    }
    if inputs.open_tasks > 15 {
        out.push(format!("{} open tasks are piling up", inputs.open_tasks));
    }

    if out.is_empty() {
        out.push("Workload is under control".to_string());
        out.push("The day ahead is open".to_string());
    }

    out.truncate(MAX_DETAIL_INSIGHTS);
    out
}
