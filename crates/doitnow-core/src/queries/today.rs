use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Task;

/// Open tasks that are undated or due today or later, in list order
pub fn today_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.is_due_on_or_after(today)).collect()
}

pub fn completed_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| t.is_completed).collect()
}

/// Completion progress over every task
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// 0.0 to 100.0; 0.0 when there are no tasks
    pub percent: f64,
}

pub fn progress(tasks: &[Task]) -> Progress {
    let completed = tasks.iter().filter(|t| t.is_completed).count();
    let total = tasks.len();
    let percent = if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    Progress {
        completed,
        total,
        percent,
    }
}

/// Header line for the today view, e.g. `Sunday, October 18`
pub fn date_subtitle(today: NaiveDate) -> String {
    today.format("%A, %B %-d").to_string()
}
