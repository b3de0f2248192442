//! Time utilities: day-granular bucketing against a reference "today".
//!
//! The caller supplies already-localized dates; no time-zone conversion
//! happens here. Working on `NaiveDate` is the midnight normalization:
//! a task due "today" can never read as overdue because of time-of-day.

use chrono::{Datelike, Days, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRelation {
    Past,
    Today,
    Future,
}

/// Classify a date against the reference day.
pub fn day_relation(date: NaiveDate, today: NaiveDate) -> DayRelation {
    match date.cmp(&today) {
        std::cmp::Ordering::Less => DayRelation::Past,
        std::cmp::Ordering::Equal => DayRelation::Today,
        std::cmp::Ordering::Greater => DayRelation::Future,
    }
}

/// True when `date` falls in the given calendar month (1-based).
pub fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

/// True when `date` is within `[today, today + days]`, inclusive both ends.
pub fn within_next_days(date: NaiveDate, today: NaiveDate, days: u64) -> bool {
    let end = today
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX);
    date >= today && date <= end
}

/// True when `date` is within the month-long window `[today, today + 1 month]`.
pub fn within_next_month(date: NaiveDate, today: NaiveDate) -> bool {
    let end = today
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    date >= today && date <= end
}

/// Whole days a due date is past the reference day; <= 0 means not overdue.
pub fn days_overdue(due: NaiveDate, today: NaiveDate) -> i64 {
    (today - due).num_days()
}
