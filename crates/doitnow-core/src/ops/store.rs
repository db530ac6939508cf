use crate::errors::{DoItNowError, Result};
use crate::model::{Category, Settings, Task, UserStat};

/// In-memory mirror of persisted rows
///
/// Holds what the presentation layer renders: tasks in list order,
/// categories in picker order, the most recently fetched stat window and the
/// user's preferences. Not thread-safe; the state container owns it.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) tasks: Vec<Task>,
    pub(crate) categories: Vec<Category>,
    pub(crate) user_stats: Vec<UserStat>,
    pub(crate) settings: Settings,
    pub(crate) is_loading: bool,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in list order (`order_index ASC, created_at DESC`)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Stat rows of the last fetched window, newest first
    pub fn user_stats(&self) -> &[UserStat] {
        &self.user_stats
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// # Errors
    ///
    /// Returns `TaskNotFound` if no mirrored task has this id.
    pub fn get_task(&self, id: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DoItNowError::TaskNotFound {
                task_id: id.to_string(),
            })
    }

    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Append a task, or replace the mirrored row with the same id
    pub fn insert_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    /// # Errors
    ///
    /// Returns `TaskNotFound` if no mirrored task has this id.
    pub fn remove_task(&mut self, id: &str) -> Result<Task> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DoItNowError::TaskNotFound {
                task_id: id.to_string(),
            })?;
        Ok(self.tasks.remove(pos))
    }

    pub fn replace_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Append a category, or replace the mirrored row with the same id
    pub fn insert_category(&mut self, category: Category) {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    /// Remove a category and detach every mirrored task that referenced it
    ///
    /// Mirrors the `ON DELETE SET NULL` foreign key on `tasks.category_id`.
    /// Tasks are detached even when the category itself was never mirrored.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if no mirrored category has this id.
    pub fn remove_category(&mut self, id: &str) -> Result<Category> {
        for task in self
            .tasks
            .iter_mut()
            .filter(|t| t.category_id.as_deref() == Some(id))
        {
            task.category_id = None;
        }

        let pos = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DoItNowError::CategoryNotFound {
                category_id: id.to_string(),
            })?;
        Ok(self.categories.remove(pos))
    }

    pub fn replace_user_stats(&mut self, user_stats: Vec<UserStat>) {
        self.user_stats = user_stats;
    }

    pub fn replace_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }
}
