use chrono::{DateTime, Utc};
use doitnow_core::model::datetime::format_timestamp;
use doitnow_core::model::SettingKey;
use doitnow_core::{DoItNowError, ExError, ExErrorKind, Settings};
use rusqlite::{params, Connection};

use super::sqlite_repo::SqliteRepo;
use crate::errors::{from_rusqlite, Result};

impl SqliteRepo {
    /// Read preferences; keys with no row keep their default
    ///
    /// Unknown keys are ignored. A known key whose value is not a JSON
    /// boolean fails with `Serialization`.
    pub fn load_settings(conn: &Connection) -> Result<Settings> {
        let mut stmt = conn
            .prepare("SELECT key, value FROM settings")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        let mut settings = Settings::default();
        for (key, raw) in rows {
            let Ok(setting) = key.parse::<SettingKey>() else {
                tracing::debug!(key = %key, "ignoring unknown setting");
                continue;
            };
            let value: bool = serde_json::from_str(&raw).map_err(|e| {
                ExError::new(ExErrorKind::Serialization)
                    .with_op("load_settings")
                    .with_entity_id(key.clone())
                    .with_message(format!("stored value {:?} is not a boolean: {}", raw, e))
            })?;
            settings.set(setting, value);
        }
        Ok(settings)
    }

    /// Persist one preference, replacing any previous value
    pub fn save_setting(
        conn: &Connection,
        key: SettingKey,
        value: bool,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let encoded = serde_json::to_string(&value)
            .map_err(|e| ExError::from(DoItNowError::from(e)).with_op("save_setting"))?;
        conn.execute(
            "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key.as_str(), encoded, format_timestamp(&now)],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }
}
