//! Calendar event snapshot type.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A calendar event with date-only semantics.
///
/// `start_time`/`end_time` ("HH:MM") exist for ordering and for the monthly
/// hours total; scoring and bucketing only ever look at `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,

    pub date: NaiveDate,

    /// Free-form category tag ("shoot", "edit", "meeting", ...).
    pub category: String,

    /// Owning company, when the event is tied to a client.
    pub company_id: Option<String>,

    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl Event {
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            category: "general".to_string(),
            company_id: None,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_company(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    /// Span in hours when both times parse as "HH:MM"; 0 otherwise.
    ///
    /// Malformed times are the caller's problem to sanitize; we stay total
    /// and contribute nothing for them.
    pub fn duration_hours(&self) -> f64 {
        let (Some(start), Some(end)) = (&self.start_time, &self.end_time) else {
            return 0.0;
        };
        let parse = |s: &str| NaiveTime::parse_from_str(s, "%H:%M").ok();
        match (parse(start), parse(end)) {
            (Some(s), Some(e)) if e > s => (e - s).num_minutes() as f64 / 60.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
    }

    #[test]
    fn test_builder_overrides_defaults() {
        let e = Event::new("e1", "studio day", day(3))
            .with_category("shoot")
            .with_company("c1");
        assert_eq!(e.category, "shoot");
        assert_eq!(e.company_id.as_deref(), Some("c1"));

        assert_eq!(Event::new("e2", "misc", day(4)).category, "general");
    }

    #[test]
    fn test_duration_from_times() {
        let e = Event::new("e1", "shoot", day(3)).with_times("09:00", "12:30");
        assert!((e.duration_hours() - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_duration_defaults_to_zero() {
        assert_eq!(Event::new("e1", "shoot", day(3)).duration_hours(), 0.0);

        let bad = Event::new("e2", "edit", day(4)).with_times("late", "later");
        assert_eq!(bad.duration_hours(), 0.0);

        let inverted = Event::new("e3", "call", day(5)).with_times("15:00", "14:00");
        assert_eq!(inverted.duration_hours(), 0.0);
    }
}
