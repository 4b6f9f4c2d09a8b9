//! Tray application launch command.
//!
//! By default `run` re-spawns the executable as a detached, windowless
//! process and returns, so the console the user typed into is released
//! immediately. The detached child runs with `--foreground` and owns
//! everything: the single-instance guard, the log file, the audio thread,
//! the monitor loop and the tray icon.

use crate::libs::audio::AudioPlayer;
use crate::libs::config::Config;
use crate::libs::instance::InstanceLock;
use crate::libs::messages::Message;
use crate::libs::monitor::Monitor;
use crate::libs::{assets, daemon, logger};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Run attached to the current console instead of detaching
    #[arg(long)]
    foreground: bool,
}

pub async fn cmd(args: RunArgs) -> Result<()> {
    if !args.foreground {
        return daemon::spawn();
    }

    // First to bind the port wins; every later instance exits silently with
    // success and without any dialog.
    let Some(_guard) = InstanceLock::acquire() else {
        msg_print!(Message::AppAlreadyRunning);
        return Ok(());
    };

    logger::init()?;
    logger::install_panic_hook();
    msg_info!(Message::AppStarted);

    let config = Config::read()?;

    // Fall back to the generated chime when no usable track is configured.
    let chime = assets::ensure_default_chime()?;
    let audio = AudioPlayer::spawn();
    let track = config.music_path.clone().filter(|path| path.exists()).unwrap_or(chime);
    audio.set_track(&track);

    let monitor = Monitor::new(config.work_duration, audio.clone());

    #[cfg(windows)]
    {
        let tray_monitor = monitor.clone();
        let tray_audio = audio.clone();
        std::thread::Builder::new()
            .name("tray".into())
            .spawn(move || crate::libs::tray::run(tray_monitor, tray_audio))?;
    }

    #[cfg(not(windows))]
    {
        use crate::msg_warning;
        msg_warning!(Message::TrayUnavailable);
    }

    daemon::run_with_signal_handling(monitor).await
}
