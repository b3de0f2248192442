//! Streak detector: consecutive heavy days from the start of a load series.

/// A day is heavy when its combined event + due-task load reaches this.
pub const HEAVY_DAY_THRESHOLD: u32 = 5;

/// Streak pressure never exceeds this, however long the run.
pub const STREAK_CAP: u32 = 5;

pub fn is_heavy_day(load: u32) -> bool {
    load >= HEAVY_DAY_THRESHOLD
}

/// Combined load for one day. No weighting by category.
pub fn calculate_daily_load(events_count: u32, due_tasks_count: u32) -> u32 {
    events_count + due_tasks_count
}

/// Count consecutive heavy days starting at index 0, capped at [`STREAK_CAP`].
///
/// The series reads "today, tomorrow, ..." so only a run from the start
/// matters; the count stops at the first non-heavy day even if heavier days
/// follow.
pub fn calculate_streak_pressure(daily_loads: &[u32]) -> u32 {
    let run = daily_loads.iter().take_while(|&&load| is_heavy_day(load)).count() as u32;
    run.min(STREAK_CAP)
}
