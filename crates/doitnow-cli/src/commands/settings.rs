//! Preference commands

use clap::{Args, Subcommand};
use doitnow_core::model::SettingKey;
use doitnow_core::ExError;
use doitnow_engine::AppState;

use crate::output::Output;

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show every preference
    Show,
    /// Change one preference
    Set(SetArgs),
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// haptics, notifications or dark-mode-auto
    pub key: String,

    /// true or false
    pub value: String,
}

pub fn execute(
    args: SettingsArgs,
    state: &mut AppState,
    out: &Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match args.command {
        SettingsCommand::Show => *state.settings(),
        SettingsCommand::Set(set) => {
            let key: SettingKey = set.key.parse().map_err(ExError::from)?;
            let value = key.parse_value(&set.value).map_err(ExError::from)?;
            state.set_setting(key, value)?
        }
    };

    out.emit(&settings, || {
        settings
            .entries()
            .iter()
            .map(|(key, enabled)| format!("{}: {}", key, if *enabled { "on" } else { "off" }))
            .collect::<Vec<_>>()
            .join("\n")
    })
}
