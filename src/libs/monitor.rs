//! Work/break cycle monitor.
//!
//! The monitor owns the WORK/PROMPT/BREAK/SNOOZE state machine and the
//! activity-aware countdown behind it. A background task ticks once a second:
//! while the session is active and the state is `Work` the remaining time is
//! decremented by the measured wall-clock delta (robust to scheduler jitter
//! and sleep, deliberately not corrected for system clock changes); when it
//! hits zero the task pauses external media, starts the reminder audio and
//! blocks inside the full-screen [`ReminderPrompt`] until the user decides.
//! Only one reminder can ever be open because the loop itself is the thread
//! that shows it.
//!
//! The timer freezes whenever the session looks locked or no input has been
//! seen for [`IDLE_PAUSE_THRESHOLD_SECS`]; paused spans are never charged
//! against the countdown.
//!
//! All mutable fields live behind a single mutex so the tray poller and the
//! dialog threads can read and command the monitor at any time. The mutex is
//! never held across a blocking GUI call.

use super::audio::AudioPlayer;
use super::idle;
use super::media;
use super::prompt::{PromptCallback, ReminderPrompt};
use crate::libs::config::{WORK_DURATION_MAX, WORK_DURATION_MIN};
use crate::libs::formatter::format_mm_ss;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug, msg_error, msg_info};
use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Break length counted down by the reminder window, seconds.
pub const BREAK_DURATION_SECS: u32 = 300;
/// Remaining work time applied when the user snoozes, seconds.
pub const SNOOZE_DURATION_SECS: f64 = 300.0;
/// Seconds without input before the timer pauses.
pub const IDLE_PAUSE_THRESHOLD_SECS: f64 = 1200.0;

const TICK: Duration = Duration::from_secs(1);
const REMINDER_MESSAGE: &str = "阅读结束，请起身活动 5 分钟！";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Work,
    Prompt,
    Break,
    Snooze,
}

impl MonitorState {
    /// Tray status label.
    pub fn label(&self) -> &'static str {
        match self {
            MonitorState::Work => "工作中",
            MonitorState::Prompt => "提醒中",
            MonitorState::Break => "休息中",
            MonitorState::Snooze => "已推迟",
        }
    }
}

struct Shared {
    state: MonitorState,
    work_duration_minutes: u64,
    work_time_remaining: f64,
    paused: bool,
    completed_rounds: u64,
    running: bool,
    last_sync: Instant,
}

/// Point-in-time copy of the monitor state for display.
#[derive(Debug, Clone)]
pub struct MonitorSnapshot {
    pub state: MonitorState,
    pub work_time_remaining: f64,
    pub work_duration_minutes: u64,
    pub completed_rounds: u64,
    pub paused: bool,
}

impl MonitorSnapshot {
    /// Status line shown in the tray tooltip and menu.
    pub fn status_line(&self) -> String {
        format!(
            "状态: {} | 剩余: {} | 已完成: {} 轮",
            self.state.label(),
            format_mm_ss(self.work_time_remaining as u64),
            self.completed_rounds
        )
    }
}

/// Handle to the monitor; clones share the same state.
#[derive(Clone)]
pub struct Monitor {
    shared: Arc<Mutex<Shared>>,
    audio: AudioPlayer,
}

impl Monitor {
    pub fn new(work_duration_minutes: u64, audio: AudioPlayer) -> Self {
        Monitor {
            shared: Arc::new(Mutex::new(Shared {
                state: MonitorState::Work,
                work_duration_minutes,
                work_time_remaining: (work_duration_minutes * 60) as f64,
                paused: false,
                completed_rounds: 0,
                running: true,
                last_sync: Instant::now(),
            })),
            audio,
        }
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        let shared = self.shared.lock();
        MonitorSnapshot {
            state: shared.state,
            work_time_remaining: shared.work_time_remaining,
            work_duration_minutes: shared.work_duration_minutes,
            completed_rounds: shared.completed_rounds,
            paused: shared.paused,
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.lock().running
    }

    /// Updates the paused flag from the lock/idle signals, logging only the
    /// transitions. Returns the evaluated pause condition.
    pub fn evaluate_pause(&self, locked: bool, idle_secs: f64) -> bool {
        let should_pause = locked || idle_secs >= IDLE_PAUSE_THRESHOLD_SECS;
        let mut shared = self.shared.lock();
        if should_pause && !shared.paused {
            shared.paused = true;
            if locked {
                msg_info!(Message::MonitorPausedLocked);
            } else {
                msg_info!(Message::MonitorPausedIdle(idle_secs as u64));
            }
        } else if !should_pause && shared.paused {
            shared.paused = false;
            msg_info!(Message::MonitorResumed);
        }
        should_pause
    }

    /// Applies an elapsed wall-clock delta to the countdown. Time is charged
    /// only in `Work` state while not paused; the remainder is clamped at
    /// zero. Returns `true` when the work time is used up.
    pub fn advance(&self, elapsed_secs: f64) -> bool {
        let mut shared = self.shared.lock();
        if shared.paused || shared.state != MonitorState::Work {
            return false;
        }
        if shared.work_time_remaining > 0.0 {
            shared.work_time_remaining = (shared.work_time_remaining - elapsed_secs).max(0.0);
        }
        shared.work_time_remaining <= 0.0
    }

    /// Measures the delta since the last tick and advances the countdown.
    fn tick(&self) -> bool {
        let now = Instant::now();
        let elapsed = {
            let mut shared = self.shared.lock();
            let elapsed = now.duration_since(shared.last_sync);
            shared.last_sync = now;
            elapsed
        };
        self.advance(elapsed.as_secs_f64())
    }

    fn resync(&self) {
        self.shared.lock().last_sync = Instant::now();
    }

    /// Main loop. Ticks at 1 Hz until [`Monitor::stop`] is called; blocks
    /// for the whole lifetime of every reminder window it opens.
    pub async fn run(&self) {
        let work_duration = self.snapshot().work_duration_minutes;
        msg_info!(Message::MonitorStarted {
            work_duration,
            idle_threshold: IDLE_PAUSE_THRESHOLD_SECS as u64,
        });

        loop {
            if !self.is_running() {
                break;
            }

            let locked = idle::is_session_locked();
            let idle_secs = idle::idle_seconds();
            if self.evaluate_pause(locked, idle_secs) {
                tokio::time::sleep(TICK).await;
                // No time is charged for the span spent paused.
                self.resync();
                continue;
            }

            if self.tick() {
                self.trigger_break().await;
                self.resync();
            } else {
                tokio::time::sleep(TICK).await;
            }
        }

        msg_info!(Message::MonitorStopped);
    }

    /// WORK → PROMPT: pauses external media, marks the prompt state and
    /// starts the reminder loop. Showing the window is the caller's job.
    pub fn enter_prompt(&self) {
        media::pause_all();
        self.shared.lock().state = MonitorState::Prompt;
        self.audio.play(true);
    }

    /// Settles state after the reminder window went away. A window that
    /// closed in `Prompt` (no choice was made) or `Break` (countdown ran
    /// out) resets to a fresh work cycle; a snoozed window has already
    /// re-entered `Work` with reduced time.
    pub fn finish_prompt(&self) {
        let state = self.shared.lock().state;
        if matches!(state, MonitorState::Prompt | MonitorState::Break) {
            msg_info!(Message::PromptClosed(format!("{:?}", state)));
            self.reset_work();
        }
    }

    async fn trigger_break(&self) {
        msg_info!(Message::BreakTriggered);
        self.enter_prompt();

        let on_rest: PromptCallback = {
            let monitor = self.clone();
            Box::new(move || monitor.start_rest())
        };
        let on_snooze: PromptCallback = {
            let monitor = self.clone();
            Box::new(move || monitor.snooze())
        };
        let prompt = ReminderPrompt::new(REMINDER_MESSAGE, BREAK_DURATION_SECS, on_rest, on_snooze);

        let shown = tokio::task::spawn_blocking(move || prompt.show()).await;
        match shown {
            Ok(Ok(outcome)) => msg_debug!(format!("reminder window returned {:?}", outcome)),
            Ok(Err(e)) => {
                // A broken dialog must not leave the user stuck: treat it as
                // a finished break without the round credit.
                msg_error!(Message::PromptFailed(e.to_string()));
                self.audio.stop();
                self.reset_work();
                return;
            }
            Err(e) => {
                msg_error!(Message::PromptFailed(e.to_string()));
                self.audio.stop();
                self.reset_work();
                return;
            }
        }

        self.finish_prompt();
    }

    /// PROMPT → BREAK: the reminder window owns the countdown from here, the
    /// monitor only records the state. Audio keeps looping through the rest.
    pub fn start_rest(&self) {
        self.shared.lock().state = MonitorState::Break;
        msg_info!(Message::RestStarted);
    }

    /// PROMPT → WORK via the transient SNOOZE marker: stops the reminder
    /// audio, shortens the cycle to [`SNOOZE_DURATION_SECS`] and resumes
    /// external media.
    pub fn snooze(&self) {
        self.audio.stop();
        {
            let mut shared = self.shared.lock();
            shared.state = MonitorState::Snooze;
            shared.work_time_remaining = SNOOZE_DURATION_SECS;
            shared.last_sync = Instant::now();
            // The snoozed marker is transient: the shortened cycle counts as
            // regular work right away.
            shared.state = MonitorState::Work;
        }
        media::resume_all();
        msg_info!(Message::Snoozed);
    }

    /// Resets to a fresh work cycle. Counts the round when a break actually
    /// completed and resumes external media when a reminder was interrupting
    /// playback.
    pub fn reset_work(&self) {
        self.audio.stop();
        let resume_media = {
            let mut shared = self.shared.lock();
            let interrupting = matches!(shared.state, MonitorState::Prompt | MonitorState::Break | MonitorState::Snooze);
            if shared.state == MonitorState::Break {
                shared.completed_rounds += 1;
                msg_info!(Message::BreakCompleted(shared.completed_rounds));
            }
            shared.state = MonitorState::Work;
            shared.work_time_remaining = (shared.work_duration_minutes * 60) as f64;
            shared.last_sync = Instant::now();
            interrupting
        };
        if resume_media {
            media::resume_all();
        }
    }

    /// Sets a new work duration and restarts the cycle with it.
    pub fn update_work_duration(&self, minutes: u64) -> Result<()> {
        if !(WORK_DURATION_MIN..=WORK_DURATION_MAX).contains(&minutes) {
            msg_bail_anyhow!(Message::InvalidDurationRange);
        }
        self.shared.lock().work_duration_minutes = minutes;
        self.reset_work();
        msg_info!(Message::WorkDurationUpdated(minutes));
        Ok(())
    }

    /// Cooperative shutdown: the loop exits on its next tick. An open
    /// reminder window is not torn down; process exit takes it along.
    /// Idempotent.
    pub fn stop(&self) {
        self.shared.lock().running = false;
        self.audio.stop();
    }
}
