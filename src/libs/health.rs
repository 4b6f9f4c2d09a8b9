//! Daily health journal: weight and blood pressure keyed by ISO date.
//!
//! Entries are kept as strings exactly as the user typed them; the journal is
//! a memo pad, not a medical record. Storage follows the same last-write-wins
//! JSON pattern as [`crate::libs::config`]: a missing or unreadable file
//! yields an empty journal.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};

pub const HEALTH_FILE_NAME: &str = "health_data.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthEntry {
    pub weight: String,
    pub bp_high: String,
    pub bp_low: String,
    /// Time of day the entry was recorded, `HH:MM:SS`.
    pub time: String,
}

impl HealthEntry {
    /// Builds an entry stamped with the current local time.
    pub fn now(weight: String, bp_high: String, bp_low: String) -> Self {
        HealthEntry {
            weight,
            bp_high,
            bp_low,
            time: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HealthLog {
    #[serde(flatten)]
    entries: BTreeMap<String, HealthEntry>,
}

impl HealthLog {
    /// Today's journal key, ISO `YYYY-MM-DD`.
    pub fn today_key() -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }

    /// Loads the journal, falling back to an empty one when the file is
    /// missing or cannot be parsed.
    pub fn load() -> Result<HealthLog> {
        let path = DataStorage::new().get_path(HEALTH_FILE_NAME)?;
        if !path.exists() {
            return Ok(HealthLog::default());
        }

        let raw = fs::read_to_string(&path)?;
        match serde_json::from_str(&raw) {
            Ok(log) => Ok(log),
            Err(e) => {
                msg_warning!(Message::HealthDataCorrupt(e.to_string()));
                Ok(HealthLog::default())
            }
        }
    }

    /// Saves the journal as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(HEALTH_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, &self)?;
        Ok(())
    }

    pub fn get(&self, date: &str) -> Option<&HealthEntry> {
        self.entries.get(date)
    }

    pub fn record(&mut self, date: String, entry: HealthEntry) {
        self.entries.insert(date, entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &HealthEntry)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn today_recorded(&self) -> bool {
        self.entries.contains_key(&Self::today_key())
    }

    /// Suffix for the tray menu item showing whether today's metrics exist.
    pub fn today_marker(&self) -> &'static str {
        if self.today_recorded() {
            " (已填)"
        } else {
            " (未填!)"
        }
    }
}
