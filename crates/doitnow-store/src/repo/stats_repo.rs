use chrono::{DateTime, NaiveDate, Utc};
use doitnow_core::model::datetime::{format_date, format_timestamp};
use doitnow_core::UserStat;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::rows::{stat_from_row, STAT_COLUMNS};
use super::sqlite_repo::SqliteRepo;
use crate::errors::{from_rusqlite, Result};

impl SqliteRepo {
    /// Count one created task against `date`, creating the day's row if needed
    pub fn record_task_created(conn: &Connection, date: NaiveDate, now: DateTime<Utc>) -> Result<()> {
        conn.execute(
            "INSERT INTO user_stats (id, date, tasks_completed, tasks_created, created_at, updated_at)
             VALUES (?1, ?2, 0, 1, ?3, ?3)
             ON CONFLICT(date) DO UPDATE SET
                 tasks_created = tasks_created + 1,
                 updated_at = excluded.updated_at",
            params![Uuid::now_v7().to_string(), format_date(&date), format_timestamp(&now)],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Count one completed task against `date`, creating the day's row if needed
    pub fn record_task_completed(
        conn: &Connection,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<()> {
        conn.execute(
            "INSERT INTO user_stats (id, date, tasks_completed, tasks_created, created_at, updated_at)
             VALUES (?1, ?2, 1, 0, ?3, ?3)
             ON CONFLICT(date) DO UPDATE SET
                 tasks_completed = tasks_completed + 1,
                 updated_at = excluded.updated_at",
            params![Uuid::now_v7().to_string(), format_date(&date), format_timestamp(&now)],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Take back one completion from `date`, never going below zero
    ///
    /// Returns false when the day has no row.
    pub fn retract_task_completed(
        conn: &Connection,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let changed = conn
            .execute(
                "UPDATE user_stats
                 SET tasks_completed = MAX(0, tasks_completed - 1), updated_at = ?1
                 WHERE date = ?2",
                params![format_timestamp(&now), format_date(&date)],
            )
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    pub fn get_stat(conn: &Connection, date: NaiveDate) -> Result<Option<UserStat>> {
        let sql = format!("SELECT {} FROM user_stats WHERE date = ?", STAT_COLUMNS);
        conn.query_row(&sql, [format_date(&date)], stat_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// Stat rows dated on or after `since`, newest first
    pub fn list_stats_since(conn: &Connection, since: NaiveDate) -> Result<Vec<UserStat>> {
        let sql = format!(
            "SELECT {} FROM user_stats WHERE date >= ? ORDER BY date DESC",
            STAT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let stats = stmt
            .query_map([format_date(&since)], stat_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(stats)
    }

    /// Every stat row, newest first
    pub fn list_all_stats(conn: &Connection) -> Result<Vec<UserStat>> {
        let sql = format!("SELECT {} FROM user_stats ORDER BY date DESC", STAT_COLUMNS);
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let stats = stmt
            .query_map([], stat_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(stats)
    }
}
