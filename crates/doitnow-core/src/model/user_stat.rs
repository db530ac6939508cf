use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-day aggregate of task activity
///
/// One row per UTC calendar day. Counters never go below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStat {
    pub id: String,
    pub date: NaiveDate,
    pub tasks_completed: u32,
    pub tasks_created: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserStat {
    /// Empty counters for a day
    pub fn new(id: String, date: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            date,
            tasks_completed: 0,
            tasks_created: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_completions(&self) -> bool {
        self.tasks_completed > 0
    }
}
