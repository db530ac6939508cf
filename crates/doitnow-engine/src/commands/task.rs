//! Task command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for task operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

use chrono::{DateTime, Utc};
use doitnow_core::ops::task_ops;
use doitnow_core::rules::validate_task_patch;
use doitnow_core::{log_op_end, log_op_error, log_op_start, Task, TaskPatch};
use doitnow_store::errors::{from_rusqlite, not_found, Result};
use doitnow_store::SqliteRepo;
use rusqlite::Connection;

/// Create a task and count it in today's statistics
///
/// ## Arguments
///
/// - `title`: Task title (trimmed; must not be blank)
/// - `category_id`: Optional category the task is filed under
/// - `conn`: Database connection
/// - `now`: Creation instant; its UTC date picks the stat row
///
/// ## Errors
///
/// - `InvalidTitle`: Blank title
/// - `NotFound`: `category_id` names no category
/// - `Persistence`: Database error
pub fn task_add(
    title: &str,
    category_id: Option<String>,
    conn: &mut Connection,
    now: DateTime<Utc>,
) -> Result<Task> {
    log_op_start!("task_add");
    let start = std::time::Instant::now();

    let task = task_add_impl(title, category_id, conn, now).map_err(|e| {
        log_op_error!(
            "task_add",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "task_add",
        duration_ms = start.elapsed().as_millis() as u64,
        task_id = task.id.as_str()
    );

    Ok(task)
}

fn task_add_impl(
    title: &str,
    category_id: Option<String>,
    conn: &mut Connection,
    now: DateTime<Utc>,
) -> Result<Task> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    if let Some(id) = category_id.as_deref() {
        if SqliteRepo::get_category(&tx, id)?.is_none() {
            return Err(not_found("task_add", "Category", id));
        }
    }

    let order_index = SqliteRepo::count_tasks(&tx)?;
    let task = task_ops::create_task(title, category_id, order_index, now)?;

    SqliteRepo::insert_task(&tx, &task)?;
    SqliteRepo::record_task_created(&tx, now.date_naive(), now)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(task)
}

/// Flip a task between open and completed
///
/// Completing stamps `completed_at` and counts one completion for today.
/// Reopening clears `completed_at` and takes one completion back from today's
/// stat row, never below zero and without creating the row.
///
/// ## Errors
///
/// - `NotFound`: No task with this id
/// - `Persistence`: Database error
pub fn task_toggle(task_id: &str, conn: &mut Connection, now: DateTime<Utc>) -> Result<Task> {
    log_op_start!("task_toggle", task_id = task_id);
    let start = std::time::Instant::now();

    let task = task_toggle_impl(task_id, conn, now).map_err(|e| {
        log_op_error!(
            "task_toggle",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            task_id = task_id
        );
        e
    })?;

    log_op_end!(
        "task_toggle",
        duration_ms = start.elapsed().as_millis() as u64,
        task_id = task_id,
        is_completed = task.is_completed
    );

    Ok(task)
}

fn task_toggle_impl(task_id: &str, conn: &mut Connection, now: DateTime<Utc>) -> Result<Task> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let mut task = SqliteRepo::get_task(&tx, task_id)?
        .ok_or_else(|| not_found("task_toggle", "Task", task_id))?;

    task.toggle(now);
    SqliteRepo::set_task_completion(&tx, task_id, task.completed_at, task.updated_at)?;

    if task.is_completed {
        SqliteRepo::record_task_completed(&tx, now.date_naive(), now)?;
    } else {
        let day = now.date_naive();
        if !SqliteRepo::retract_task_completed(&tx, day, now)? {
            tracing::debug!(task_id = task_id, date = %day, "no stat row to retract from");
        }
    }

    tx.commit().map_err(from_rusqlite)?;
    Ok(task)
}

/// Apply a partial update to a task
///
/// An empty patch changes nothing and returns the stored task as-is.
///
/// ## Errors
///
/// - `InvalidTitle`: Patch carries a blank title
/// - `NotFound`: No task with this id, or the patch names an unknown category
/// - `Persistence`: Database error
pub fn task_update(
    task_id: &str,
    patch: TaskPatch,
    conn: &Connection,
    now: DateTime<Utc>,
) -> Result<Task> {
    log_op_start!("task_update", task_id = task_id);
    let start = std::time::Instant::now();

    let task = task_update_impl(task_id, patch, conn, now).map_err(|e| {
        log_op_error!(
            "task_update",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            task_id = task_id
        );
        e
    })?;

    log_op_end!(
        "task_update",
        duration_ms = start.elapsed().as_millis() as u64,
        task_id = task_id
    );

    Ok(task)
}

fn task_update_impl(
    task_id: &str,
    patch: TaskPatch,
    conn: &Connection,
    now: DateTime<Utc>,
) -> Result<Task> {
    let patch = validate_task_patch(patch)?;

    let mut task = SqliteRepo::get_task(conn, task_id)?
        .ok_or_else(|| not_found("task_update", "Task", task_id))?;
    if patch.is_empty() {
        return Ok(task);
    }

    if let Some(Some(category_id)) = &patch.category_id {
        if SqliteRepo::get_category(conn, category_id)?.is_none() {
            return Err(not_found("task_update", "Category", category_id));
        }
    }

    SqliteRepo::update_task(conn, task_id, &patch, now)?;
    task.apply_patch(&patch, now);
    Ok(task)
}

/// Delete a task; statistics already recorded for it stay as they are
///
/// ## Errors
///
/// - `NotFound`: No task with this id
/// - `Persistence`: Database error
pub fn task_delete(task_id: &str, conn: &Connection) -> Result<()> {
    log_op_start!("task_delete", task_id = task_id);
    let start = std::time::Instant::now();

    task_delete_impl(task_id, conn).map_err(|e| {
        log_op_error!(
            "task_delete",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            task_id = task_id
        );
        e
    })?;

    log_op_end!(
        "task_delete",
        duration_ms = start.elapsed().as_millis() as u64,
        task_id = task_id
    );

    Ok(())
}

fn task_delete_impl(task_id: &str, conn: &Connection) -> Result<()> {
    if !SqliteRepo::delete_task(conn, task_id)? {
        return Err(not_found("task_delete", "Task", task_id));
    }
    Ok(())
}

/// All tasks in list order
pub fn task_list(conn: &Connection) -> Result<Vec<Task>> {
    log_op_start!("task_list");
    let start = std::time::Instant::now();

    let tasks = SqliteRepo::list_tasks(conn).map_err(|e| {
        log_op_error!(
            "task_list",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "task_list",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = tasks.len()
    );

    Ok(tasks)
}
