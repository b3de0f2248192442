//! Monthly report builder: one month of raw records into stats, a fixed
//! 5-bucket weekly breakdown, a priority distribution and a few templated
//! observations.

use cadence_core::{completion_rate, in_month, DailyGoal, Event, Priority, Task, TaskStatus};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use cadence_insights::{rank_candidates, Candidate, Insight, InsightKind, Severity};

use crate::label::month_label;

/// The breakdown always has exactly this many buckets, by calendar position
/// (days 1-7, 8-14, 15-21, 22-28, 29-end). Summary cards assume five, so
/// this is not an ISO-week split and must not become one.
pub const WEEK_BUCKETS: usize = 5;

const MONTHLY_HIGH_BAR: u32 = 80;
const MONTHLY_LOW_BAR: u32 = 50;
const MONTHLY_MIN_TASKS: usize = 5;
const MONTHLY_MIN_GOAL_DAYS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReviewInput {
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
    pub goals: Vec<DailyGoal>,
    /// 1-based calendar month.
    pub month: u32,
    pub year: i32,
}

/// A dated load extreme (busiest or calmest day).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLoad {
    pub date: NaiveDate,
    pub load: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub tasks_created: usize,
    pub tasks_completed: usize,
    /// round(completed / created * 100), 0 on an empty month.
    pub task_completion_rate: u32,
    pub events_attended: usize,
    pub goals_achieved: usize,
    pub goals_total: usize,
    pub goal_completion_rate: u32,
    /// None when the month had no activity at all.
    pub busiest_day: Option<DayLoad>,
    pub calmest_day: Option<DayLoad>,
    /// Total month load averaged over every day of the month.
    pub average_daily_load: f64,
    pub total_events_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekBucket {
    /// 1..=5.
    pub week: u8,
    pub tasks_completed: usize,
    pub events: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReview {
    pub stats: MonthlyStats,
    pub insights: Vec<Insight>,
    pub weekly_breakdown: Vec<WeekBucket>,
    pub priority_distribution: Vec<PriorityCount>,
    pub month_label: String,
}

/// Build the full monthly review. Pure; recomputes from the snapshot every
/// call.
pub fn compute_monthly_review(input: &MonthlyReviewInput) -> MonthlyReview {
    let tasks: Vec<&Task> = input
        .tasks
        .iter()
        .filter(|t| in_month(t.created_at.date(), input.year, input.month))
        .collect();
    let events: Vec<&Event> = input
        .events
        .iter()
        .filter(|e| in_month(e.date, input.year, input.month))
        .collect();
    let goals: Vec<&DailyGoal> = input
        .goals
        .iter()
        .filter(|g| in_month(g.date, input.year, input.month))
        .collect();

    let stats = compute_stats(&tasks, &events, &goals, input.year, input.month);
    let insights = monthly_insights(&stats);
    let weekly_breakdown = weekly_breakdown(&tasks, &events);
    let priority_distribution = priority_distribution(&tasks);

    MonthlyReview {
        stats,
        insights,
        weekly_breakdown,
        priority_distribution,
        month_label: month_label(input.month, input.year),
    }
}

fn compute_stats(
    tasks: &[&Task],
    events: &[&Event],
    goals: &[&DailyGoal],
    year: i32,
    month: u32,
) -> MonthlyStats {
    let tasks_created = tasks.len();
    let tasks_completed = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();

    // Goals count per day: a day is achieved only when all its items are.
    let goals_total = goals.len();
    let goals_achieved = goals.iter().filter(|g| g.is_achieved()).count();

    // Day-level load: events on the day plus tasks due that day, whatever
    // their status; a finished task still made the day busy.
    let days = days_in_month(year, month);
    let mut total_load = 0u32;
    let mut busiest: Option<DayLoad> = None;
    let mut calmest: Option<DayLoad> = None;

    for day in 1..=days {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let ev = events.iter().filter(|e| e.date == date).count() as u32;
        let due = tasks.iter().filter(|t| t.due_date == Some(date)).count() as u32;
        let load = ev + due;
        total_load += load;

        // Zero-load days never compete; ties keep the earliest date.
        if load >= 1 {
            if busiest.is_none_or(|b| load > b.load) {
                busiest = Some(DayLoad { date, load });
            }
            if calmest.is_none_or(|c| load < c.load) {
                calmest = Some(DayLoad { date, load });
            }
        }
    }

    MonthlyStats {
        tasks_created,
        tasks_completed,
        task_completion_rate: completion_rate(tasks_completed, tasks_created),
        events_attended: events.len(),
        goals_achieved,
        goals_total,
        goal_completion_rate: completion_rate(goals_achieved, goals_total),
        busiest_day: busiest,
        calmest_day: calmest,
        average_daily_load: f64::from(total_load) / f64::from(days),
        total_events_hours: events.iter().map(|e| e.duration_hours()).sum(),
    }
}

/// Exactly 5 buckets by calendar position, regardless of month length.
fn weekly_breakdown(tasks: &[&Task], events: &[&Event]) -> Vec<WeekBucket> {
    let bucket_of = |day: u32| ((day as usize - 1) / 7).min(WEEK_BUCKETS - 1);

    let mut buckets: Vec<WeekBucket> = (1..=WEEK_BUCKETS as u8)
        .map(|week| WeekBucket { week, tasks_completed: 0, events: 0 })
        .collect();

    for task in tasks.iter().filter(|t| t.status == TaskStatus::Done) {
        buckets[bucket_of(task.created_at.day())].tasks_completed += 1;
    }
    for event in events {
        buckets[bucket_of(event.date.day())].events += 1;
    }

    buckets
}

/// One entry per priority actually present, in Low/Medium/High order.
fn priority_distribution(tasks: &[&Task]) -> Vec<PriorityCount> {
    [Priority::Low, Priority::Medium, Priority::High]
        .into_iter()
        .filter_map(|priority| {
            let count = tasks.iter().filter(|t| t.priority == priority).count();
            (count > 0).then_some(PriorityCount { priority, count })
        })
        .collect()
}

/// Templated month-level observations, same vocabulary and merge policy as
/// the live insight engines but generated from the finished stats.
fn monthly_insights(stats: &MonthlyStats) -> Vec<Insight> {
    let mut candidates = Vec::new();

    if stats.tasks_created >= MONTHLY_MIN_TASKS && stats.task_completion_rate >= MONTHLY_HIGH_BAR {
        candidates.push(Candidate::new(
            Insight::new(
                InsightKind::PerformanceUp,
                Severity::Info,
                "Strong month",
                format!("{}% of the month's tasks got done", stats.task_completion_rate),
            ),
            1,
        ));
    } else if stats.tasks_created >= MONTHLY_MIN_TASKS
        && stats.task_completion_rate < MONTHLY_LOW_BAR
    {
        candidates.push(Candidate::new(
            Insight::new(
                InsightKind::CompletionLow,
                Severity::Warning,
                "Tasks piled up",
                format!("Only {}% of the month's tasks got done", stats.task_completion_rate),
            ),
            1,
        ));
    }

    if stats.goals_total >= MONTHLY_MIN_GOAL_DAYS && stats.goal_completion_rate >= MONTHLY_HIGH_BAR
    {
        candidates.push(Candidate::new(
            Insight::new(
                InsightKind::PerformanceUp,
                Severity::Info,
                "Goals on track",
                format!("{}% of daily goals achieved", stats.goal_completion_rate),
            ),
            2,
        ));
    }

    rank_candidates(candidates)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(_), Some(next)) => next.pred_opt().map(|d| d.day()).unwrap_or(30),
        _ => 30,
    }
}
