//! cadence-core: data model and temporal helpers for the workload engine.
//!
//! Everything in this crate is a snapshot type or a pure function. Storage,
//! auth and delivery live in other services; callers hand us already-scoped,
//! already-localized records and we only read them.

pub mod company;
pub mod event;
pub mod goal;
pub mod stats;
pub mod task;
pub mod time;

pub use company::Company;
pub use event::Event;
pub use goal::{DailyGoal, GoalItem, GoalItemStatus};
pub use stats::completion_rate;
pub use task::{Priority, Task, TaskStatus};
pub use time::{
    day_relation, days_overdue, in_month, within_next_days, within_next_month, DayRelation,
};
