//! Console access to the daily health journal.
//!
//! `deskbreak health` records today's metrics through interactive prompts
//! (the console twin of the tray dialog); `deskbreak health --list` prints
//! every recorded entry as a table.

use crate::libs::health::{HealthEntry, HealthLog};
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use prettytable::{row, Table};

#[derive(Debug, Args)]
pub struct HealthArgs {
    /// List recorded entries instead of recording new ones
    #[arg(short, long)]
    list: bool,
}

pub fn cmd(args: HealthArgs) -> Result<()> {
    if args.list {
        return list();
    }
    record()
}

fn record() -> Result<()> {
    let mut log = HealthLog::load()?;
    let today = HealthLog::today_key();
    let existing = log.get(&today).cloned();

    let weight: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWeight.to_string())
        .default(existing.as_ref().map(|e| e.weight.clone()).unwrap_or_default())
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err(Message::WeightRequired.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let bp_high: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptBpHigh.to_string())
        .default(existing.as_ref().map(|e| e.bp_high.clone()).unwrap_or_else(|| "120".to_string()))
        .interact_text()?;

    let bp_low: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptBpLow.to_string())
        .default(existing.as_ref().map(|e| e.bp_low.clone()).unwrap_or_else(|| "80".to_string()))
        .interact_text()?;

    let entry = HealthEntry::now(weight.trim().to_string(), bp_high.trim().to_string(), bp_low.trim().to_string());
    log.record(today.clone(), entry);
    log.save()?;

    msg_success!(Message::HealthRecorded(today));
    Ok(())
}

fn list() -> Result<()> {
    let log = HealthLog::load()?;
    if log.is_empty() {
        msg_print!(Message::HealthNoEntries);
        return Ok(());
    }

    msg_print!(Message::HealthEntriesTitle);
    let mut table = Table::new();
    table.add_row(row!["DATE", "WEIGHT", "BP HIGH", "BP LOW", "TIME"]);
    for (date, entry) in log.iter() {
        table.add_row(row![date, entry.weight, entry.bp_high, entry.bp_low, entry.time]);
    }
    table.printstd();
    Ok(())
}
