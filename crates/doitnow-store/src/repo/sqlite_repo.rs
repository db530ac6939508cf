//! SQLite repository implementation
//!
//! Task accessors live here; category, stat and settings accessors extend
//! `SqliteRepo` from their own modules.

use chrono::{DateTime, Utc};
use doitnow_core::model::datetime::{format_date, format_timestamp};
use doitnow_core::{Task, TaskPatch};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, ToSql};

use super::rows::{task_from_row, TASK_COLUMNS};
use crate::errors::{from_rusqlite, Result};

/// SQLite repository for tasks, categories, daily stats and settings
pub struct SqliteRepo;

impl SqliteRepo {
    /// All tasks in list order: `order_index ASC, created_at DESC`
    pub fn list_tasks(conn: &Connection) -> Result<Vec<Task>> {
        let sql = format!(
            "SELECT {} FROM tasks ORDER BY order_index ASC, created_at DESC",
            TASK_COLUMNS
        );
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let tasks = stmt
            .query_map([], task_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(tasks)
    }

    /// Get a task by ID
    pub fn get_task(conn: &Connection, task_id: &str) -> Result<Option<Task>> {
        let sql = format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS);
        conn.query_row(&sql, [task_id], task_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    pub fn count_tasks(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    /// Insert a new task row
    ///
    /// A `category_id` that does not exist fails with `ConstraintViolation`.
    pub fn insert_task(conn: &Connection, task: &Task) -> Result<()> {
        conn.execute(
            "INSERT INTO tasks (id, title, is_completed, completed_at, due_date, reminder_time, category_id, order_index, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                task.id,
                task.title,
                task.is_completed,
                task.completed_at.as_ref().map(format_timestamp),
                task.due_date.as_ref().map(format_date),
                task.reminder_time.as_ref().map(format_timestamp),
                task.category_id,
                task.order_index,
                format_timestamp(&task.created_at),
                format_timestamp(&task.updated_at),
            ],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(task_id = %task.id, "inserted task");
        Ok(())
    }

    /// Set completion state; `completed_at` present means completed
    ///
    /// Returns false when no task has this id.
    pub fn set_task_completion(
        conn: &Connection,
        task_id: &str,
        completed_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE tasks SET is_completed = ?1, completed_at = ?2, updated_at = ?3 WHERE id = ?4",
                params![
                    completed_at.is_some(),
                    completed_at.as_ref().map(format_timestamp),
                    format_timestamp(&updated_at),
                    task_id,
                ],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Apply a partial update, building the SET clause from the patch
    ///
    /// An empty patch touches nothing and returns false. Otherwise returns
    /// whether a row was updated.
    pub fn update_task(
        conn: &Connection,
        task_id: &str,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        if patch.is_empty() {
            return Ok(false);
        }

        let mut columns: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(title) = &patch.title {
            columns.push("title");
            values.push(Box::new(title.clone()));
        }
        if let Some(due_date) = &patch.due_date {
            columns.push("due_date");
            values.push(Box::new(due_date.as_ref().map(format_date)));
        }
        if let Some(reminder_time) = &patch.reminder_time {
            columns.push("reminder_time");
            values.push(Box::new(reminder_time.as_ref().map(format_timestamp)));
        }
        if let Some(category_id) = &patch.category_id {
            columns.push("category_id");
            values.push(Box::new(category_id.clone()));
        }
        if let Some(order_index) = patch.order_index {
            columns.push("order_index");
            values.push(Box::new(order_index));
        }
        columns.push("updated_at");
        values.push(Box::new(format_timestamp(&updated_at)));
        values.push(Box::new(task_id.to_string()));

        let assignments: Vec<String> = columns.iter().map(|c| format!("{} = ?", c)).collect();
        let sql = format!("UPDATE tasks SET {} WHERE id = ?", assignments.join(", "));

        let changed = conn
            .execute(&sql, params_from_iter(values.iter()))
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Delete a task; returns whether a row was removed
    pub fn delete_task(conn: &Connection, task_id: &str) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM tasks WHERE id = ?", [task_id])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }
}
