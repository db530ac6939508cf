//! Hydration layer - loads persisted rows into the in-memory `Store`
//!
//! Each loader replaces one collection of the mirror wholesale, so a reload
//! after a write always reflects the database exactly.

use chrono::NaiveDate;
use doitnow_core::Store;
use rusqlite::Connection;

use crate::errors::Result;
use crate::repo::SqliteRepo;

/// Replace the mirrored tasks with the persisted list, in list order
pub fn load_tasks(conn: &Connection, store: &mut Store) -> Result<()> {
    let tasks = SqliteRepo::list_tasks(conn)?;
    tracing::debug!(row_count = tasks.len(), "hydrated tasks");
    store.replace_tasks(tasks);
    Ok(())
}

/// Replace the mirrored categories with the persisted list, in picker order
pub fn load_categories(conn: &Connection, store: &mut Store) -> Result<()> {
    let categories = SqliteRepo::list_categories(conn)?;
    tracing::debug!(row_count = categories.len(), "hydrated categories");
    store.replace_categories(categories);
    Ok(())
}

/// Replace the mirrored stat window with rows dated on or after `since`
pub fn load_stats_since(conn: &Connection, since: NaiveDate, store: &mut Store) -> Result<()> {
    let stats = SqliteRepo::list_stats_since(conn, since)?;
    tracing::debug!(row_count = stats.len(), since = %since, "hydrated user stats");
    store.replace_user_stats(stats);
    Ok(())
}

pub fn load_settings(conn: &Connection, store: &mut Store) -> Result<()> {
    let settings = SqliteRepo::load_settings(conn)?;
    store.replace_settings(settings);
    Ok(())
}

/// Build a fully hydrated `Store`
pub fn load_all(conn: &Connection, stats_since: NaiveDate) -> Result<Store> {
    let mut store = Store::new();
    load_tasks(conn, &mut store)?;
    load_categories(conn, &mut store)?;
    load_stats_since(conn, stats_since, &mut store)?;
    load_settings(conn, &mut store)?;
    Ok(store)
}
