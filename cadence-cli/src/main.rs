use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cadence_insights::{
    compute_agency_insights, compute_health_score, compute_insights, CreatorSnapshot,
    HealthInputs, Insight,
};
use cadence_report::{compute_month_comparison, compute_monthly_review, MonthlyReviewInput};

mod snapshot;

use snapshot::{load_roster, load_snapshot, Snapshot};

#[derive(Parser, Debug)]
#[command(name = "cadence", version, about = "Cadence workload & insights CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a creator's workload health from a snapshot
    Health {
        /// JSON snapshot with tasks/events/goals/companies
        #[arg(long)]
        snapshot: PathBuf,

        /// Reference day (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Surface up to 3 ranked insights for a creator
    Insights {
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Surface up to 3 ranked insights for an agency roster
    Agency {
        /// JSON roster: a list of creators with their tasks and events
        #[arg(long)]
        roster: PathBuf,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Build the monthly review, with a comparison to the month before
    Monthly {
        #[arg(long)]
        snapshot: PathBuf,

        /// Calendar month, 1-12
        #[arg(long)]
        month: u32,

        #[arg(long)]
        year: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Health { snapshot, date } => {
            let snap = read_snapshot(&snapshot)?;
            print_health(&snap, reference_day(date));
        }

        Command::Insights { snapshot, date } => {
            let snap = read_snapshot(&snapshot)?;
            let insights =
                compute_insights(&snap.tasks, &snap.events, &snap.companies, reference_day(date));
            print_insights(&insights);
        }

        Command::Agency { roster, date } => {
            if !roster.exists() {
                bail!("roster not found: {} (pass --roster <path>)", roster.display());
            }
            let today = reference_day(date);

            // Reduce each creator to records + computed health status.
            let creators: Vec<CreatorSnapshot> = load_roster(&roster)?
                .into_iter()
                .map(|entry| {
                    let inputs = HealthInputs::from_snapshot(&entry.tasks, &entry.events, today);
                    let health = compute_health_score(&inputs);
                    CreatorSnapshot {
                        id: entry.id,
                        name: entry.name,
                        tasks: entry.tasks,
                        events: entry.events,
                        health_status: health.status,
                    }
                })
                .collect();

            println!("Roster: {} creators\n", creators.len());
            for c in &creators {
                println!("  {} -> {:?}", c.name, c.health_status);
            }
            println!();
            print_insights(&compute_agency_insights(&creators));
        }

        Command::Monthly { snapshot, month, year } => {
            if !(1..=12).contains(&month) {
                bail!("month must be 1-12, got {month}");
            }
            let snap = read_snapshot(&snapshot)?;
            print_monthly(&snap, month, year);
        }
    }

    Ok(())
}

fn read_snapshot(path: &PathBuf) -> Result<Snapshot> {
    if !path.exists() {
        bail!("snapshot not found: {} (pass --snapshot <path>)", path.display());
    }
    load_snapshot(path)
}

fn reference_day(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn print_health(snap: &Snapshot, today: NaiveDate) {
    let inputs = HealthInputs::from_snapshot(&snap.tasks, &snap.events, today);
    let result = compute_health_score(&inputs);

    println!("Health for {today}: {} ({:?})", result.score, result.status);
    println!(
        "  open={} overdue={} today={} week={} backlog={} streak={}",
        inputs.open_tasks,
        inputs.overdue_tasks,
        inputs.events_today,
        inputs.events_week,
        inputs.backlog_pressure,
        inputs.streak_pressure,
    );
    for line in &result.details.insights {
        println!("  - {line}");
    }
}

fn print_insights(insights: &[Insight]) {
    if insights.is_empty() {
        println!("No insights.");
        return;
    }
    for i in insights {
        println!("{} [{:?}] {} | {}", i.icon, i.severity, i.title, i.message);
    }
}

fn print_monthly(snap: &Snapshot, month: u32, year: i32) {
    let review = compute_monthly_review(&MonthlyReviewInput {
        tasks: snap.tasks.clone(),
        events: snap.events.clone(),
        goals: snap.goals.clone(),
        month,
        year,
    });

    let s = &review.stats;
    println!("Monthly review: {}\n", review.month_label);
    println!(
        "Tasks: {}/{} completed ({}%)",
        s.tasks_completed, s.tasks_created, s.task_completion_rate
    );
    println!("Events attended: {} ({:.1}h total)", s.events_attended, s.total_events_hours);
    println!(
        "Goals: {}/{} achieved ({}%)",
        s.goals_achieved, s.goals_total, s.goal_completion_rate
    );
    if let Some(day) = s.busiest_day {
        println!("Busiest day: {} (load {})", day.date, day.load);
    }
    if let Some(day) = s.calmest_day {
        println!("Calmest day: {} (load {})", day.date, day.load);
    }
    println!("Average daily load: {:.2}", s.average_daily_load);

    println!("\nWeekly breakdown:");
    for bucket in &review.weekly_breakdown {
        println!(
            "  week {}: {} tasks done, {} events",
            bucket.week, bucket.tasks_completed, bucket.events
        );
    }

    if !review.priority_distribution.is_empty() {
        println!("\nPriorities:");
        for entry in &review.priority_distribution {
            println!("  {:?}: {}", entry.priority, entry.count);
        }
    }

    if !review.insights.is_empty() {
        println!();
        print_insights(&review.insights);
    }

    // Same snapshot usually spans the previous month too; compare when the
    // calendar allows it.
    let (prev_month, prev_year) = if month == 1 { (12, year - 1) } else { (month - 1, year) };
    let previous = compute_monthly_review(&MonthlyReviewInput {
        tasks: snap.tasks.clone(),
        events: snap.events.clone(),
        goals: snap.goals.clone(),
        month: prev_month,
        year: prev_year,
    });

    println!("\nVersus {}:", previous.month_label);
    for entry in compute_month_comparison(&review.stats, &previous.stats) {
        let sign = if entry.change >= 0 { "+" } else { "" };
        println!("  {}: {}{}", entry.label, sign, entry.change);
    }
}
