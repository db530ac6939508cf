//! Row decoding shared by the accessors

use chrono::{DateTime, NaiveDate, Utc};
use doitnow_core::model::datetime::{parse_date, parse_timestamp};
use doitnow_core::{Category, Task, UserStat};
use rusqlite::Row;

use crate::errors::invalid_stored_value;

pub(crate) const TASK_COLUMNS: &str = "id, title, is_completed, completed_at, due_date, reminder_time, category_id, order_index, created_at, updated_at";

pub(crate) const CATEGORY_COLUMNS: &str = "id, name, icon, color, order_index, created_at";

pub(crate) const STAT_COLUMNS: &str =
    "id, date, tasks_completed, tasks_created, created_at, updated_at";

fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    parse_timestamp(&raw).map_err(|e| invalid_stored_value(idx, e))
}

fn opt_timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| parse_timestamp(&s).map_err(|e| invalid_stored_value(idx, e)))
        .transpose()
}

fn date_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    parse_date(&raw).map_err(|e| invalid_stored_value(idx, e))
}

fn opt_date_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| parse_date(&s).map_err(|e| invalid_stored_value(idx, e)))
        .transpose()
}

/// Decode a row selected with `TASK_COLUMNS`
pub(crate) fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let is_completed: i64 = row.get(2)?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        is_completed: is_completed != 0,
        completed_at: opt_timestamp_at(row, 3)?,
        due_date: opt_date_at(row, 4)?,
        reminder_time: opt_timestamp_at(row, 5)?,
        category_id: row.get(6)?,
        order_index: row.get(7)?,
        created_at: timestamp_at(row, 8)?,
        updated_at: timestamp_at(row, 9)?,
    })
}

/// Decode a row selected with `CATEGORY_COLUMNS`
pub(crate) fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        icon: row.get(2)?,
        color: row.get(3)?,
        order_index: row.get(4)?,
        created_at: timestamp_at(row, 5)?,
    })
}

/// Decode a row selected with `STAT_COLUMNS`
pub(crate) fn stat_from_row(row: &Row<'_>) -> rusqlite::Result<UserStat> {
    Ok(UserStat {
        id: row.get(0)?,
        date: date_at(row, 1)?,
        tasks_completed: row.get(2)?,
        tasks_created: row.get(3)?,
        created_at: timestamp_at(row, 4)?,
        updated_at: timestamp_at(row, 5)?,
    })
}
