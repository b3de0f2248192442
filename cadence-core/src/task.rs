//! Task snapshot type.
//!
//! Tasks are created and mutated by the task-management service; the engine
//! only reads a point-in-time copy.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "not-started")]
    NotStarted,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

/// Core task snapshot.
///
/// Kept small + serializable; the wire shape matches the SaaS's camelCase
/// JSON so API rows deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,

    pub status: TaskStatus,
    pub priority: Priority,

    /// Day-granular due date. A task without one can never be overdue.
    pub due_date: Option<NaiveDate>,

    /// Owning company, when the task is tied to a client.
    pub company_id: Option<String>,

    pub archived: bool,

    /// Local creation timestamp; only its (year, month) is ever bucketed.
    pub created_at: NaiveDateTime,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::NotStarted,
            priority: Priority::Medium,
            due_date: None,
            company_id: None,
            archived: false,
            created_at,
        }
    }

    pub fn with_due(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_company(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    pub fn is_open(&self) -> bool {
        self.status != TaskStatus::Done && !self.archived
    }

    /// Overdue iff open, dated, and due strictly before the reference day.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => self.is_open() && due < today,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let t = Task::new("t1", "write brief", ts(2026, 3, 2));
        assert_eq!(t.status, TaskStatus::NotStarted);
        assert_eq!(t.priority, Priority::Medium);
        assert!(t.due_date.is_none());
        assert!(t.is_open());
    }

    #[test]
    fn test_done_or_archived_is_not_open() {
        let done = Task::new("t1", "a", ts(2026, 3, 2)).with_status(TaskStatus::Done);
        assert!(!done.is_open());

        let archived = Task::new("t2", "b", ts(2026, 3, 2)).archived();
        assert!(!archived.is_open());
    }

    #[test]
    fn test_overdue_needs_open_dated_past() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let past = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

        let open = Task::new("t1", "a", ts(2026, 3, 2)).with_due(past);
        assert!(open.is_overdue(today));

        // Due today is never overdue, whatever the hour.
        let due_today = Task::new("t2", "b", ts(2026, 3, 2)).with_due(today);
        assert!(!due_today.is_overdue(today));

        let done = Task::new("t3", "c", ts(2026, 3, 2))
            .with_due(past)
            .with_status(TaskStatus::Done);
        assert!(!done.is_overdue(today));

        let undated = Task::new("t4", "d", ts(2026, 3, 2));
        assert!(!undated.is_overdue(today));
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let t = Task::new("t1", "brief", ts(2026, 3, 2)).with_due(
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        );
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"dueDate\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"not-started\""));
    }
}
