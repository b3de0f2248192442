//! cadence-report: monthly aggregate report with comparisons.

pub mod comparison;
pub mod label;
pub mod monthly;

pub use comparison::{compute_month_comparison, ComparisonEntry};
pub use label::{format_date_hebrew, month_label};
pub use monthly::{
    compute_monthly_review, DayLoad, MonthlyReview, MonthlyReviewInput, MonthlyStats,
    PriorityCount, WeekBucket, WEEK_BUCKETS,
};
