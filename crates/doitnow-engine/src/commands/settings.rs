//! Preference commands with boundary logging.

use chrono::{DateTime, Utc};
use doitnow_core::model::SettingKey;
use doitnow_core::{log_op_end, log_op_error, log_op_start, Settings};
use doitnow_store::errors::Result;
use doitnow_store::SqliteRepo;
use rusqlite::Connection;

/// Current preferences, with defaults for anything never saved
pub fn settings_load(conn: &Connection) -> Result<Settings> {
    log_op_start!("settings_load");
    let start = std::time::Instant::now();

    let settings = SqliteRepo::load_settings(conn).map_err(|e| {
        log_op_error!(
            "settings_load",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "settings_load",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(settings)
}

/// Persist one preference and return the full set afterwards
pub fn settings_set(
    key: SettingKey,
    value: bool,
    conn: &Connection,
    now: DateTime<Utc>,
) -> Result<Settings> {
    log_op_start!("settings_set", setting_key = key.as_str(), value = value);
    let start = std::time::Instant::now();

    let settings = settings_set_impl(key, value, conn, now).map_err(|e| {
        log_op_error!(
            "settings_set",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            setting_key = key.as_str()
        );
        e
    })?;

    log_op_end!(
        "settings_set",
        duration_ms = start.elapsed().as_millis() as u64,
        setting_key = key.as_str()
    );

    Ok(settings)
}

fn settings_set_impl(
    key: SettingKey,
    value: bool,
    conn: &Connection,
    now: DateTime<Utc>,
) -> Result<Settings> {
    SqliteRepo::save_setting(conn, key, value, now)?;
    SqliteRepo::load_settings(conn)
}
