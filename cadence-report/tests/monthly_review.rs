//! End-to-end review of a synthetic creator month, plus the comparison
//! against the month before.

use cadence_core::{DailyGoal, Event, GoalItem, GoalItemStatus, Priority, Task, TaskStatus};
use cadence_report::{compute_month_comparison, compute_monthly_review, MonthlyReviewInput};
use chrono::{NaiveDate, NaiveDateTime};

fn d(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}

fn ts(month: u32, day: u32) -> NaiveDateTime {
    d(month, day).and_hms_opt(10, 30, 0).unwrap()
}

fn goal(month: u32, day: u32, statuses: &[GoalItemStatus]) -> DailyGoal {
    DailyGoal::new(
        d(month, day),
        statuses
            .iter()
            .map(|&status| GoalItem { text: "daily goal".into(), status })
            .collect(),
    )
}

/// A believable April for one creator: 8 tasks, a shoot-heavy second week,
/// daily goals for the first five days.
fn april() -> MonthlyReviewInput {
    let tasks = vec![
        Task::new("t1", "script teaser", ts(4, 1))
            .with_priority(Priority::High)
            .with_due(d(4, 3))
            .with_status(TaskStatus::Done),
        Task::new("t2", "edit teaser", ts(4, 2))
            .with_priority(Priority::High)
            .with_due(d(4, 8))
            .with_status(TaskStatus::Done),
        Task::new("t3", "brand call prep", ts(4, 6)).with_due(d(4, 9)).with_status(TaskStatus::Done),
        Task::new("t4", "invoice sponsors", ts(4, 10)).with_status(TaskStatus::Done),
        Task::new("t5", "storyboard vlog", ts(4, 12)).with_due(d(4, 20)),
        Task::new("t6", "answer collabs", ts(4, 15)).with_priority(Priority::Low),
        Task::new("t7", "plan may calendar", ts(4, 22)).with_status(TaskStatus::InProgress),
        Task::new("t8", "archive footage", ts(4, 29)).with_priority(Priority::Low),
    ];

    let events = vec![
        Event::new("e1", "studio shoot", d(4, 8)).with_category("shoot").with_times("09:00", "13:00"),
        Event::new("e2", "brand call", d(4, 9)).with_category("meeting").with_times("15:00", "15:45"),
        Event::new("e3", "edit session", d(4, 9)).with_category("edit").with_times("16:00", "19:00"),
        Event::new("e4", "meetup", d(4, 18)),
        Event::new("e5", "studio shoot", d(4, 25)).with_category("shoot").with_times("10:00", "12:00"),
    ];

    use GoalItemStatus::*;
    let goals = vec![
        goal(4, 1, &[Done, Done]),
        goal(4, 2, &[Done]),
        goal(4, 3, &[Done, Partial]),
        goal(4, 4, &[NotDone]),
        goal(4, 5, &[Done]),
    ];

    MonthlyReviewInput { tasks, events, goals, month: 4, year: 2026 }
}

#[test]
fn full_month_review() {
    let review = compute_monthly_review(&april());
    let stats = &review.stats;

    assert_eq!(stats.tasks_created, 8);
    assert_eq!(stats.tasks_completed, 4);
    assert_eq!(stats.task_completion_rate, 50);
    assert_eq!(stats.events_attended, 5);

    assert_eq!(stats.goals_total, 5);
    assert_eq!(stats.goals_achieved, 3);
    assert_eq!(stats.goal_completion_rate, 60);

    // April 9: two events plus one due task.
    let busiest = stats.busiest_day.unwrap();
    assert_eq!(busiest.date, d(4, 9));
    assert_eq!(busiest.load, 3);
    // Several days carry load 1; the earliest wins.
    let calmest = stats.calmest_day.unwrap();
    assert_eq!(calmest.date, d(4, 3));
    assert_eq!(calmest.load, 1);

    // 4h shoot + 45m call + 3h edit + 2h shoot.
    assert!((stats.total_events_hours - 9.75).abs() < 1e-9);
    assert!(stats.average_daily_load > 0.0);

    assert_eq!(review.weekly_breakdown.len(), 5);
    let events_per_week: Vec<usize> = review.weekly_breakdown.iter().map(|b| b.events).collect();
    assert_eq!(events_per_week, vec![0, 3, 1, 1, 0]);

    // Low/Medium/High order, only present priorities.
    let labels: Vec<_> = review.priority_distribution.iter().map(|p| (p.priority, p.count)).collect();
    assert_eq!(
        labels,
        vec![(Priority::Low, 2), (Priority::Medium, 4), (Priority::High, 2)]
    );

    assert_eq!(review.month_label, "אפריל 2026");
    assert!(review.insights.len() <= 3);
}

#[test]
fn month_over_month_comparison() {
    let april = compute_monthly_review(&april()).stats;

    // A quieter March.
    let march = compute_monthly_review(&MonthlyReviewInput {
        tasks: vec![
            Task::new("m1", "script", ts(3, 3)).with_status(TaskStatus::Done),
            Task::new("m2", "edit", ts(3, 10)),
        ],
        events: vec![Event::new("me1", "shoot", d(3, 12))],
        goals: vec![goal(3, 3, &[GoalItemStatus::Done])],
        month: 3,
        year: 2026,
    })
    .stats;

    let entries = compute_month_comparison(&april, &march);
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].label, "tasks-completed");
    assert_eq!(entries[0].change, 3);
    assert!(entries[0].is_positive);

    assert_eq!(entries[1].label, "events-attended");
    assert_eq!(entries[1].change, 4);

    assert_eq!(entries[2].label, "goals-achieved");
    assert_eq!(entries[2].change, 2);
}
