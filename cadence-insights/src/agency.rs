//! Agency-scope insight engine: a smaller battery over a creator roster.

use cadence_core::{completion_rate, Event, Task, TaskStatus};
use serde::{Deserialize, Serialize};

use crate::health::HealthStatus;
use crate::insight::{rank_candidates, Candidate, Insight, InsightKind, Severity};

/// Pooled completion tiers: praise above, warn below, silent in between.
const PERFORMANCE_HIGH_BAR: u32 = 80;
const PERFORMANCE_LOW_BAR: u32 = 50;

/// How many at-risk creators get named before "and N more".
const NAMED_CREATORS: usize = 2;

/// One roster entry, already reduced by the caller: raw records plus the
/// creator's computed health status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSnapshot {
    pub id: String,
    pub name: String,
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
    pub health_status: HealthStatus,
}

type Detector = fn(&[CreatorSnapshot]) -> Option<Candidate>;

const DETECTORS: &[Detector] = &[detect_at_risk, detect_aggregate_performance];

/// Run the roster battery and return at most 3 ranked insights.
pub fn compute_agency_insights(creators: &[CreatorSnapshot]) -> Vec<Insight> {
    let candidates = DETECTORS.iter().filter_map(|detect| detect(creators)).collect();
    rank_candidates(candidates)
}

/// Creators whose health reads overloaded, named up to a limit.
fn detect_at_risk(creators: &[CreatorSnapshot]) -> Option<Candidate> {
    let at_risk: Vec<&CreatorSnapshot> = creators
        .iter()
        .filter(|c| c.health_status == HealthStatus::Overloaded)
        .collect();
    if at_risk.is_empty() {
        return None;
    }

    let mut names = at_risk
        .iter()
        .take(NAMED_CREATORS)
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if at_risk.len() > NAMED_CREATORS {
        names.push_str(&format!(" and {} more", at_risk.len() - NAMED_CREATORS));
    }

    Some(Candidate::new(
        Insight::new(
            InsightKind::CreatorAtRisk,
            Severity::Risk,
            "Creators overloaded",
            format!("{names} are running overloaded"),
        ),
        1,
    ))
}

/// Pooled completion rate across every creator's tasks.
///
/// An empty pool rates as 0%, which lands in the low tier like any other
/// rate below the bar.
fn detect_aggregate_performance(creators: &[CreatorSnapshot]) -> Option<Candidate> {
    let total: usize = creators.iter().map(|c| c.tasks.len()).sum();
    let done: usize = creators
        .iter()
        .flat_map(|c| c.tasks.iter())
        .filter(|t| t.status == TaskStatus::Done)
        .count();

    let rate = completion_rate(done, total);

    if rate >= PERFORMANCE_HIGH_BAR {
        return Some(Candidate::new(
            Insight::new(
                InsightKind::PerformanceUp,
                Severity::Info,
                "Excellent performance",
                format!("The roster is completing {rate}% of its tasks"),
            ),
            4,
        ));
    }

    if rate < PERFORMANCE_LOW_BAR {
        return Some(Candidate::new(
            Insight::new(
                InsightKind::CompletionLow,
                Severity::Warning,
                "Low completion across the roster",
                format!("Only {rate}% of roster tasks are getting done"),
            ),
            2,
        ));
    }

    None
}
