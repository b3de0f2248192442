//! Creator-scope insight engine: a fixed battery of independent detectors.
//!
//! Each detector reads the whole snapshot and emits at most one candidate;
//! the battery runs in declared order, then `rank_candidates` sorts by
//! priority and caps the result. Adding a rule means adding a function to
//! `DETECTORS`, never touching the merge logic.

use cadence_core::{
    completion_rate, days_overdue, in_month, within_next_days, Company, Event, Task, TaskStatus,
};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::HashMap;

use crate::insight::{rank_candidates, Candidate, Insight, InsightKind, Severity};
use crate::streak::{calculate_daily_load, calculate_streak_pressure};

/// Overdue by at least this many days escalates the finding to risk.
const LONG_OVERDUE_DAYS: i64 = 3;

/// Company share tiers for the concentration detector.
const CONCENTRATION_RISK_SHARE: f64 = 0.60;
const CONCENTRATION_NOTE_SHARE: f64 = 0.40;

/// The completion detector stays quiet below this sample size.
const COMPLETION_MIN_TASKS: usize = 5;
const COMPLETION_LOW_BAR: u32 = 50;

/// Everything a detector may look at. Read-only.
pub struct InsightContext<'a> {
    pub tasks: &'a [Task],
    pub events: &'a [Event],
    pub companies: &'a [Company],
    pub today: NaiveDate,
}

type Detector = fn(&InsightContext) -> Option<Candidate>;

const DETECTORS: &[Detector] = &[
    detect_overdue,
    detect_heavy_week,
    detect_concentration,
    detect_completion_rate,
    detect_empty_week,
];

/// Run the full battery and return at most 3 ranked insights.
pub fn compute_insights(
    tasks: &[Task],
    events: &[Event],
    companies: &[Company],
    today: NaiveDate,
) -> Vec<Insight> {
    let ctx = InsightContext { tasks, events, companies, today };
    let candidates = DETECTORS.iter().filter_map(|detect| detect(&ctx)).collect();
    rank_candidates(candidates)
}

/// Overdue tasks, two tiers. The risk tier (anything >= 3 days late)
/// suppresses the plain warning for the same condition.
fn detect_overdue(ctx: &InsightContext) -> Option<Candidate> {
    let overdue: Vec<&Task> = ctx.tasks.iter().filter(|t| t.is_overdue(ctx.today)).collect();
    if overdue.is_empty() {
        return None;
    }

    let long_overdue = overdue
        .iter()
        .filter(|t| t.due_date.is_some_and(|due| days_overdue(due, ctx.today) >= LONG_OVERDUE_DAYS))
        .count();

    if long_overdue > 0 {
        return Some(Candidate::new(
            Insight::new(
                InsightKind::Overdue,
                Severity::Risk,
                "Tasks slipping",
                format!("{long_overdue} tasks are 3+ days overdue"),
            ),
            1,
        ));
    }

    Some(Candidate::new(
        Insight::new(
            InsightKind::Overdue,
            Severity::Warning,
            "Overdue tasks",
            format!("{} tasks are past their due date", overdue.len()),
        ),
        3,
    ))
}

/// Heavy week ahead: a streak of 3+ heavy days in the 7-day forward series.
fn detect_heavy_week(ctx: &InsightContext) -> Option<Candidate> {
    let loads: Vec<u32> = (0..7)
        .filter_map(|offset| ctx.today.checked_add_days(Days::new(offset)))
        .map(|date| {
            let ev = ctx.events.iter().filter(|e| e.date == date).count() as u32;
            let due = ctx
                .tasks
                .iter()
                .filter(|t| t.is_open() && t.due_date == Some(date))
                .count() as u32;
            calculate_daily_load(ev, due)
        })
        .collect();

    let streak = calculate_streak_pressure(&loads);
    if streak < 3 {
        return None;
    }

    Some(Candidate::new(
        Insight::new(
            InsightKind::HeavyStreak,
            Severity::Warning,
            "Heavy week ahead",
            format!("{streak} back-to-back heavy days starting today"),
        ),
        2,
    ))
}

/// One company dominating the creator's combined event + task volume.
///
/// Ties on the top share break by company id, so the outcome never depends
/// on input order.
fn detect_concentration(ctx: &InsightContext) -> Option<Candidate> {
    let mut per_company: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;

    for id in ctx
        .events
        .iter()
        .filter_map(|e| e.company_id.as_deref())
        .chain(ctx.tasks.iter().filter_map(|t| t.company_id.as_deref()))
    {
        *per_company.entry(id).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return None;
    }

    let (top_id, top_count) = per_company
        .into_iter()
        .min_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)))?;

    let share = top_count as f64 / total as f64;
    if share < CONCENTRATION_NOTE_SHARE {
        return None;
    }

    let name = ctx
        .companies
        .iter()
        .find(|c| c.id == top_id)
        .map(|c| c.name.as_str())
        .unwrap_or(top_id);
    let percent = (share * 100.0).round() as u32;
    let message = format!("{name} accounts for {percent}% of this period's workload");

    if share >= CONCENTRATION_RISK_SHARE {
        Some(Candidate::new(
            Insight::new(InsightKind::Concentration, Severity::Warning, "Client concentration", message),
            2,
        ))
    } else {
        Some(Candidate::new(
            Insight::new(InsightKind::Concentration, Severity::Info, "Leaning on one client", message),
            5,
        ))
    }
}

/// Low completion rate over this month's created tasks.
fn detect_completion_rate(ctx: &InsightContext) -> Option<Candidate> {
    let this_month: Vec<&Task> = ctx
        .tasks
        .iter()
        .filter(|t| in_month(t.created_at.date(), ctx.today.year(), ctx.today.month()))
        .collect();

    if this_month.len() < COMPLETION_MIN_TASKS {
        return None;
    }

    let done = this_month.iter().filter(|t| t.status == TaskStatus::Done).count();
    let rate = completion_rate(done, this_month.len());
    if rate >= COMPLETION_LOW_BAR {
        return None;
    }

    Some(Candidate::new(
        Insight::new(
            InsightKind::CompletionLow,
            Severity::Warning,
            "Completion rate dipping",
            format!("Only {rate}% of this month's tasks are done"),
        ),
        3,
    ))
}

/// No events anywhere in the next 7 days, today included.
fn detect_empty_week(ctx: &InsightContext) -> Option<Candidate> {
    let any = ctx
        .events
        .iter()
        .any(|e| within_next_days(e.date, ctx.today, 6));
    if any {
        return None;
    }

    Some(Candidate::new(
        Insight::new(
            InsightKind::EmptyWeek,
            Severity::Info,
            "Quiet week",
            "No events scheduled for the next 7 days",
        ),
        6,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ts(y: i32, m: u32, day: u32) -> NaiveDateTime {
        d(y, m, day).and_hms_opt(9, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        d(2026, 4, 15)
    }

    #[test]
    fn test_never_more_than_three_insights() {
        // 10 overdue tasks plus enough signal to fire several detectors.
        let tasks: Vec<Task> = (0..10)
            .map(|i| Task::new(format!("t{i}"), "late", ts(2026, 4, 1)).with_due(d(2026, 4, 5)))
            .collect();

        let insights = compute_insights(&tasks, &[], &[], today());
        assert!(insights.len() <= 3);
    }

    #[test]
    fn test_long_overdue_escalates_and_suppresses_warning() {
        let tasks = vec![
            Task::new("t1", "very late", ts(2026, 4, 1)).with_due(d(2026, 4, 10)),
            Task::new("t2", "barely late", ts(2026, 4, 1)).with_due(d(2026, 4, 14)),
        ];

        let insights = compute_insights(&tasks, &[], &[], today());
        let overdue: Vec<&Insight> =
            insights.iter().filter(|i| i.kind == InsightKind::Overdue).collect();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].severity, Severity::Risk);
        // Only the 3+ day subset is reported.
        assert!(overdue[0].message.starts_with("1 "));
    }

    #[test]
    fn test_done_task_is_never_overdue() {
        let tasks = vec![Task::new("t1", "ancient", ts(2026, 4, 1))
            .with_due(d(2020, 1, 1))
            .with_status(TaskStatus::Done)];

        let insights = compute_insights(&tasks, &[], &[], today());
        assert!(insights.iter().all(|i| i.kind != InsightKind::Overdue));
    }

    #[test]
    fn test_empty_snapshot_yields_empty_week() {
        let insights = compute_insights(&[], &[], &[], today());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::EmptyWeek);
        assert_eq!(insights[0].severity, Severity::Info);
    }

    #[test]
    fn test_heavy_week_streak_fires() {
        // 5 events on each of the next 3 days, then quiet.
        let mut events = Vec::new();
        for day in 0..3u64 {
            let date = today().checked_add_days(Days::new(day)).unwrap();
            for i in 0..5 {
                events.push(Event::new(format!("e{day}-{i}"), "shoot", date));
            }
        }

        let insights = compute_insights(&[], &events, &[], today());
        assert!(insights.iter().any(|i| i.kind == InsightKind::HeavyStreak));
        assert!(insights.iter().all(|i| i.kind != InsightKind::EmptyWeek));
    }

    #[test]
    fn test_concentration_tiers() {
        let companies = vec![
            Company::new("c1", "Glow Cosmetics"),
            Company::new("c2", "Peak Fitness"),
        ];

        // 3 of 5 referenced items for c1 -> 60% -> warning tier.
        let events = vec![
            Event::new("e1", "shoot", today()).with_company("c1"),
            Event::new("e2", "edit", today()).with_company("c1"),
            Event::new("e3", "call", today()).with_company("c2"),
        ];
        let tasks = vec![
            Task::new("t1", "brief", ts(2026, 4, 1)).with_company("c1"),
            Task::new("t2", "invoice", ts(2026, 4, 1)).with_company("c2"),
        ];

        let insights = compute_insights(&tasks, &events, &companies, today());
        let conc = insights.iter().find(|i| i.kind == InsightKind::Concentration).unwrap();
        assert_eq!(conc.severity, Severity::Warning);
        assert!(conc.message.contains("Glow Cosmetics"));
        assert!(conc.message.contains("60%"));
    }

    #[test]
    fn test_concentration_tie_breaks_by_company_id() {
        let companies = vec![Company::new("b", "Beta"), Company::new("a", "Alpha")];
        let events = vec![
            Event::new("e1", "x", today()).with_company("b"),
            Event::new("e2", "y", today()).with_company("a"),
        ];

        let insights = compute_insights(&[], &events, &companies, today());
        let conc = insights.iter().find(|i| i.kind == InsightKind::Concentration).unwrap();
        assert!(conc.message.contains("Alpha"));
    }

    #[test]
    fn test_low_completion_needs_sample_size() {
        let low_sample: Vec<Task> =
            (0..4).map(|i| Task::new(format!("t{i}"), "open", ts(2026, 4, 2))).collect();
        let insights = compute_insights(&low_sample, &[], &[], today());
        assert!(insights.iter().all(|i| i.kind != InsightKind::CompletionLow));

        let mut enough: Vec<Task> =
            (0..5).map(|i| Task::new(format!("t{i}"), "open", ts(2026, 4, 2))).collect();
        enough[0].status = TaskStatus::Done; // 20% done
        let insights = compute_insights(&enough, &[], &[], today());
        assert!(insights.iter().any(|i| i.kind == InsightKind::CompletionLow));
    }
}
