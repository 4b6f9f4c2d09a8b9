//! Interactive configuration setup.
//!
//! A small wizard for the two persisted settings: work duration and the
//! reminder music path. Existing values are offered as defaults so re-running
//! the wizard only changes what the user touches.

use crate::libs::config::{parse_work_duration, Config};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Reset the configuration to defaults instead of running the wizard
    #[arg(short, long)]
    reset: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    if args.reset {
        Config::default().save()?;
        msg_success!(Message::ConfigSaved);
        return Ok(());
    }

    let current = Config::read()?;

    let work_duration: u64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWorkDuration.to_string())
        .default(current.work_duration)
        .validate_with(|input: &u64| parse_work_duration(&input.to_string()).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    let music_default = current.music_path.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
    let music_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptMusicPath.to_string())
        .allow_empty(true)
        .default(music_default)
        .validate_with(|input: &String| {
            let trimmed = input.trim();
            if trimmed.is_empty() || PathBuf::from(trimmed).exists() {
                Ok(())
            } else {
                Err(Message::AudioTrackMissing(trimmed.to_string()).to_string())
            }
        })
        .interact_text()?;

    let music_path = {
        let trimmed = music_input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    };

    let config = Config { music_path, work_duration };
    config.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
