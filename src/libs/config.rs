//! Configuration management for the deskbreak application.
//!
//! The configuration is intentionally tiny: the path to the reminder music
//! (if the user picked one) and the work cycle duration in minutes. It is
//! stored as pretty-printed JSON in the platform application data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\deskbreak\config.json`
//! - **macOS**: `~/Library/Application Support/deskbreak/config.json`
//! - **Linux**: `~/.local/share/deskbreak/config.json`
//!
//! A missing or unreadable file is never an error here. The tray process must
//! come up no matter what is on disk, so both cases silently fall back to the
//! defaults `{ music_path: null, work_duration: 25 }` (the corrupt case is
//! logged once).

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_warning};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default work cycle duration in minutes.
pub const DEFAULT_WORK_DURATION: u64 = 25;

/// Inclusive bounds accepted for the work cycle duration.
pub const WORK_DURATION_MIN: u64 = 1;
pub const WORK_DURATION_MAX: u64 = 120;

fn default_work_duration() -> u64 {
    DEFAULT_WORK_DURATION
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Absolute path to the user-chosen reminder track. `None` means the
    /// generated default chime is used.
    pub music_path: Option<PathBuf>,

    /// Work cycle duration in minutes.
    #[serde(default = "default_work_duration")]
    pub work_duration: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            music_path: None,
            work_duration: DEFAULT_WORK_DURATION,
        }
    }
}

impl Config {
    /// Reads the configuration, falling back to defaults when the file is
    /// missing or cannot be parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        match serde_json::from_str(&config_str) {
            Ok(config) => Ok(config),
            Err(e) => {
                // A corrupt file is treated as absent per the recovery rules.
                msg_warning!(Message::ConfigCorrupt(e.to_string()));
                Ok(Config::default())
            }
        }
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }
}

/// Parses and validates user input for the work duration.
///
/// Rejects non-numeric input and values outside [`WORK_DURATION_MIN`],
/// [`WORK_DURATION_MAX`]. Dialogs surface the returned message and keep the
/// previous value.
pub fn parse_work_duration(input: &str) -> Result<u64> {
    let minutes: u64 = match input.trim().parse() {
        Ok(value) => value,
        Err(_) => msg_bail_anyhow!(Message::InvalidDurationFormat),
    };
    if !(WORK_DURATION_MIN..=WORK_DURATION_MAX).contains(&minutes) {
        msg_bail_anyhow!(Message::InvalidDurationRange);
    }
    Ok(minutes)
}
