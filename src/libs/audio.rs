//! Looping reminder audio.
//!
//! Playback runs on a dedicated thread that owns the output device; the rest
//! of the application holds a cheap cloneable [`AudioPlayer`] handle and
//! talks to it over an unbounded command channel. That keeps the non-`Send`
//! stream types on one thread and makes every audio operation safe to call
//! from the monitor loop, tray thread and prompt callbacks alike.
//!
//! Audio is strictly best-effort: device init, decode and playback failures
//! are logged and swallowed. The monitor must keep working on a machine with
//! no sound device at all.

use crate::libs::messages::Message;
use crate::{msg_info, msg_warning};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};

#[derive(Debug)]
enum AudioCommand {
    SetTrack(PathBuf),
    Play { looping: bool },
    Stop,
    SetVolume(f32),
}

/// Cloneable handle to the audio thread.
#[derive(Clone)]
pub struct AudioPlayer {
    tx: UnboundedSender<AudioCommand>,
    track: Arc<Mutex<Option<PathBuf>>>,
}

impl AudioPlayer {
    /// Spawns the audio thread and returns a handle to it.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::Builder::new()
            .name("audio".into())
            .spawn(move || backend::run(rx))
            .ok();
        AudioPlayer {
            tx,
            track: Arc::new(Mutex::new(None)),
        }
    }

    /// Sets the current track. Returns `false` without touching state when
    /// the file does not exist.
    pub fn set_track(&self, path: &Path) -> bool {
        if !path.exists() {
            msg_warning!(Message::AudioTrackMissing(path.display().to_string()));
            return false;
        }
        *self.track.lock() = Some(path.to_path_buf());
        let _ = self.tx.send(AudioCommand::SetTrack(path.to_path_buf()));
        msg_info!(Message::AudioTrackSet(path.display().to_string()));
        true
    }

    /// Currently configured track, if any.
    pub fn current_track(&self) -> Option<PathBuf> {
        self.track.lock().clone()
    }

    /// Starts playback of the current track. No-op without a track.
    pub fn play(&self, looping: bool) {
        let _ = self.tx.send(AudioCommand::Play { looping });
    }

    /// Stops playback. Idempotent.
    pub fn stop(&self) {
        let _ = self.tx.send(AudioCommand::Stop);
    }

    /// Sets playback volume; the level is clamped to 0.0–1.0.
    pub fn set_volume(&self, level: f32) {
        let _ = self.tx.send(AudioCommand::SetVolume(level.clamp(0.0, 1.0)));
    }
}

#[cfg(windows)]
mod backend {
    use super::*;
    use crate::msg_error;
    use rodio::{Decoder, OutputStream, Sink, Source};
    use std::fs::File;
    use std::io::BufReader;
    use tokio::sync::mpsc::UnboundedReceiver;

    pub(super) fn run(mut rx: UnboundedReceiver<AudioCommand>) {
        // The stream must outlive every sink; both stay on this thread.
        let stream = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(e) => {
                msg_error!(Message::AudioInitFailed(e.to_string()));
                None
            }
        };

        let mut track: Option<PathBuf> = None;
        let mut sink: Option<Sink> = None;
        let mut volume: f32 = 1.0;

        while let Some(cmd) = rx.blocking_recv() {
            match cmd {
                AudioCommand::SetTrack(path) => track = Some(path),
                AudioCommand::Play { looping } => {
                    let Some((_, handle)) = stream.as_ref() else { continue };
                    let Some(path) = track.as_ref() else { continue };

                    // Restart from the top on every play request.
                    if let Some(old) = sink.take() {
                        old.stop();
                    }
                    match load_sink(handle, path, looping, volume) {
                        Ok(new_sink) => sink = Some(new_sink),
                        Err(e) => msg_error!(Message::AudioPlaybackFailed(e.to_string())),
                    }
                }
                AudioCommand::Stop => {
                    if let Some(old) = sink.take() {
                        old.stop();
                    }
                }
                AudioCommand::SetVolume(level) => {
                    volume = level;
                    if let Some(ref active) = sink {
                        active.set_volume(level);
                    }
                }
            }
        }
    }

    fn load_sink(handle: &rodio::OutputStreamHandle, path: &Path, looping: bool, volume: f32) -> anyhow::Result<Sink> {
        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file))?;
        let sink = Sink::try_new(handle)?;
        sink.set_volume(volume);
        if looping {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }
        Ok(sink)
    }
}

#[cfg(not(windows))]
mod backend {
    use super::*;
    use crate::msg_debug;
    use tokio::sync::mpsc::UnboundedReceiver;

    pub(super) fn run(mut rx: UnboundedReceiver<AudioCommand>) {
        while let Some(cmd) = rx.blocking_recv() {
            if matches!(cmd, AudioCommand::Play { .. }) {
                msg_debug!(format!("{}", Message::AudioBackendUnavailable));
            }
        }
    }
}
