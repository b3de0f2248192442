//! cadence-insights: health scoring and ranked insight detection.
//!
//! Two deliberately separate vocabularies live here. `health` produces a
//! score plus at most two inline hint strings for the dashboard header;
//! `creator`/`agency` produce the ranked, capped `Insight` list for the
//! insights panel. They solve different problems; do not unify them.

pub mod agency;
pub mod creator;
pub mod health;
pub mod insight;
pub mod streak;

pub use agency::{compute_agency_insights, CreatorSnapshot};
pub use creator::compute_insights;
pub use health::{compute_health_score, HealthDetails, HealthInputs, HealthResult, HealthStatus};
pub use insight::{rank_candidates, Candidate, Insight, InsightKind, Severity, MAX_INSIGHTS};
pub use streak::{calculate_daily_load, calculate_streak_pressure, is_heavy_day};
