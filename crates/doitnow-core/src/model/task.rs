use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task - a single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (UUID v7)
    pub id: String,

    /// Trimmed, non-empty title
    pub title: String,

    pub is_completed: bool,

    /// Set when the task is completed, cleared when it is reopened
    pub completed_at: Option<DateTime<Utc>>,

    pub due_date: Option<NaiveDate>,

    /// Stored for the presentation layer; nothing schedules it
    pub reminder_time: Option<DateTime<Utc>>,

    /// Owning category, cleared when that category is deleted
    pub category_id: Option<String>,

    /// Position in the list; `count(tasks)` at creation time
    pub order_index: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create an open task with both timestamps set to `now`
    pub fn new(id: String, title: String, order_index: i64, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            is_completed: false,
            completed_at: None,
            due_date: None,
            reminder_time: None,
            category_id: None,
            order_index,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flip completion state, stamping `completed_at` when completing
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.is_completed = !self.is_completed;
        self.completed_at = if self.is_completed { Some(now) } else { None };
        self.updated_at = now;
    }

    /// Apply a partial update; an empty patch leaves the task untouched
    pub fn apply_patch(&mut self, patch: &TaskPatch, now: DateTime<Utc>) {
        if patch.is_empty() {
            return;
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(reminder_time) = patch.reminder_time {
            self.reminder_time = reminder_time;
        }
        if let Some(category_id) = &patch.category_id {
            self.category_id = category_id.clone();
        }
        if let Some(order_index) = patch.order_index {
            self.order_index = order_index;
        }
        self.updated_at = now;
    }

    /// True when the task is open and not past its due date
    pub fn is_due_on_or_after(&self, day: NaiveDate) -> bool {
        !self.is_completed && self.due_date.map_or(true, |due| due >= day)
    }
}

/// Partial update for a task
///
/// Nullable columns use `Option<Option<T>>`: `None` leaves the field alone,
/// `Some(None)` clears it. Completion is not patchable; use toggle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub reminder_time: Option<Option<DateTime<Utc>>>,
    pub category_id: Option<Option<String>>,
    pub order_index: Option<i64>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.due_date.is_none()
            && self.reminder_time.is_none()
            && self.category_id.is_none()
            && self.order_index.is_none()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn reminder_time(mut self, reminder_time: Option<DateTime<Utc>>) -> Self {
        self.reminder_time = Some(reminder_time);
        self
    }

    pub fn category_id(mut self, category_id: Option<String>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn order_index(mut self, order_index: i64) -> Self {
        self.order_index = Some(order_index);
        self
    }
}
