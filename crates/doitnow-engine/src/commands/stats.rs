//! Statistics queries with boundary logging.

use chrono::{Duration, NaiveDate};
use doitnow_core::{log_op_end, log_op_error, log_op_start, UserStat};
use doitnow_store::errors::Result;
use doitnow_store::SqliteRepo;
use rusqlite::Connection;

/// Window used when the caller does not ask for one
pub const DEFAULT_STATS_DAYS: u32 = 30;

/// Stat rows dated on or after `today - days`, newest first
///
/// ## Errors
///
/// - `Persistence`: Database error
/// - `Serialization`: A stored date or timestamp could not be read
pub fn stats_list(days: u32, conn: &Connection, today: NaiveDate) -> Result<Vec<UserStat>> {
    log_op_start!("stats_list", days = days);
    let start = std::time::Instant::now();

    let since = today
        .checked_sub_signed(Duration::days(i64::from(days)))
        .unwrap_or(NaiveDate::MIN);
    let stats = SqliteRepo::list_stats_since(conn, since).map_err(|e| {
        log_op_error!(
            "stats_list",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "stats_list",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = stats.len()
    );

    Ok(stats)
}

/// Every stat row ever recorded, newest first
///
/// All-time figures such as the longest streak read from this rather than
/// from a windowed `stats_list`.
///
/// ## Errors
///
/// - `Persistence`: Database error
/// - `Serialization`: A stored date or timestamp could not be read
pub fn stats_history(conn: &Connection) -> Result<Vec<UserStat>> {
    log_op_start!("stats_history");
    let start = std::time::Instant::now();

    let stats = SqliteRepo::list_all_stats(conn).map_err(|e| {
        log_op_error!(
            "stats_history",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "stats_history",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = stats.len()
    );

    Ok(stats)
}
