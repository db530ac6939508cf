use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::DoItNowError;

/// User preferences
///
/// Every preference defaults to enabled until the user turns it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub haptics_enabled: bool,
    pub notifications_enabled: bool,
    pub dark_mode_auto: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
            notifications_enabled: true,
            dark_mode_auto: true,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Haptics => self.haptics_enabled,
            SettingKey::Notifications => self.notifications_enabled,
            SettingKey::DarkModeAuto => self.dark_mode_auto,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::Haptics => self.haptics_enabled = value,
            SettingKey::Notifications => self.notifications_enabled = value,
            SettingKey::DarkModeAuto => self.dark_mode_auto = value,
        }
    }

    /// Pairs of persisted key and value, in a stable order
    pub fn entries(&self) -> [(SettingKey, bool); 3] {
        SettingKey::ALL.map(|key| (key, self.get(key)))
    }
}

/// Name of a persisted preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Haptics,
    Notifications,
    DarkModeAuto,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::Haptics,
        SettingKey::Notifications,
        SettingKey::DarkModeAuto,
    ];

    /// Key as stored in the `settings` table
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Haptics => "haptics_enabled",
            SettingKey::Notifications => "notifications_enabled",
            SettingKey::DarkModeAuto => "dark_mode_auto",
        }
    }

    /// Parse a stored or user-typed boolean
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettingValue` for anything but `true` or `false`.
    pub fn parse_value(&self, value: &str) -> Result<bool, DoItNowError> {
        match value.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(DoItNowError::InvalidSettingValue {
                key: self.as_str().to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = DoItNowError;

    /// Accepts the stored key or the short CLI spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "haptics" | "haptics_enabled" => Ok(SettingKey::Haptics),
            "notifications" | "notifications_enabled" => Ok(SettingKey::Notifications),
            "dark-mode-auto" | "dark_mode_auto" => Ok(SettingKey::DarkModeAuto),
            other => Err(DoItNowError::UnknownSetting {
                key: other.to_string(),
            }),
        }
    }
}
