//! Ranked insight vocabulary shared by the creator engine, the agency
//! engine and the monthly report.

use serde::{Deserialize, Serialize};

/// A single invocation never surfaces more insights than this.
pub const MAX_INSIGHTS: usize = 3;

/// Closed set of insight kinds. Adding one is a compile-time, exhaustive
/// change, not a new free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsightKind {
    #[serde(rename = "overdue")]
    Overdue,
    #[serde(rename = "heavy-streak")]
    HeavyStreak,
    #[serde(rename = "concentration")]
    Concentration,
    #[serde(rename = "completion-low")]
    CompletionLow,
    #[serde(rename = "empty-week")]
    EmptyWeek,
    #[serde(rename = "creator-at-risk")]
    CreatorAtRisk,
    #[serde(rename = "performance-up")]
    PerformanceUp,
}

impl InsightKind {
    /// Glyph shown next to the insight card.
    pub fn icon(&self) -> &'static str {
        match self {
            InsightKind::Overdue => "⏰",
            InsightKind::HeavyStreak => "🔥",
            InsightKind::Concentration => "🏢",
            InsightKind::CompletionLow => "📉",
            InsightKind::EmptyWeek => "🌤️",
            InsightKind::CreatorAtRisk => "🚨",
            InsightKind::PerformanceUp => "🌟",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "risk")]
    Risk,
}

/// A surfaced insight. Carries no sort key; ranking already happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub kind: InsightKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub icon: String,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            title: title.into(),
            message: message.into(),
            icon: kind.icon().to_string(),
        }
    }
}

/// Detector output: an insight plus its internal sort key.
///
/// Priority is lower-is-first and exists only until [`rank_candidates`]
/// strips it.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub insight: Insight,
    pub priority: u8,
}

impl Candidate {
    pub fn new(insight: Insight, priority: u8) -> Self {
        Self { insight, priority }
    }
}

/// Merge policy for every detector battery: stable sort ascending by
/// priority (declaration order breaks ties), truncate, strip the key.
pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Insight> {
    candidates.sort_by_key(|c| c.priority);
    candidates.truncate(MAX_INSIGHTS);
    candidates.into_iter().map(|c| c.insight).collect()
}
