use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::model::{Category, Task, UserStat};

/// Task counts shown on the profile cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskTotals {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

pub fn task_totals(tasks: &[Task]) -> TaskTotals {
    let completed = tasks.iter().filter(|t| t.is_completed).count();
    TaskTotals {
        total: tasks.len(),
        completed,
        active: tasks.len() - completed,
    }
}

/// Created/completed sums over the last seven days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WeeklySummary {
    pub completed: u32,
    pub created: u32,
}

/// Sum stat rows dated within the 7 days ending `today` (inclusive)
pub fn weekly_summary(stats: &[UserStat], today: NaiveDate) -> WeeklySummary {
    let first = today
        .checked_sub_signed(Duration::days(6))
        .unwrap_or(NaiveDate::MIN);
    stats
        .iter()
        .filter(|s| s.date >= first && s.date <= today)
        .fold(WeeklySummary::default(), |acc, s| WeeklySummary {
            completed: acc.completed + s.tasks_completed,
            created: acc.created + s.tasks_created,
        })
}

/// A category paired with how many tasks it holds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTaskCount<'a> {
    pub category: &'a Category,
    pub task_count: usize,
}

impl CategoryTaskCount<'_> {
    /// `1 task`, `3 tasks`
    pub fn label(&self) -> String {
        if self.task_count == 1 {
            "1 task".to_string()
        } else {
            format!("{} tasks", self.task_count)
        }
    }
}

/// Categories in the given order, each with its task count (completed included)
pub fn category_task_counts<'a>(
    categories: &'a [Category],
    tasks: &[Task],
) -> Vec<CategoryTaskCount<'a>> {
    categories
        .iter()
        .map(|category| CategoryTaskCount {
            category,
            task_count: tasks
                .iter()
                .filter(|t| t.category_id.as_deref() == Some(category.id.as_str()))
                .count(),
        })
        .collect()
}
