//! Display implementation for deskbreak application messages.
//!
//! All user-facing and log text lives here, keyed by the `Message` enum.
//! Diagnostic text is English; the GUI surfaces carry their own localized
//! strings and are not routed through this catalog.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === APPLICATION LIFECYCLE ===
            Message::AppStarted => "--- Application started ---".to_string(),
            Message::AppAlreadyRunning => "Another instance is already running. Exiting.".to_string(),

            // === MONITOR MESSAGES ===
            Message::MonitorStarted { work_duration, idle_threshold } => {
                format!("Monitor started: work duration {} min, idle pause threshold {} s", work_duration, idle_threshold)
            }
            Message::MonitorStopped => "Monitor stopped".to_string(),
            Message::MonitorPausedLocked => "Session locked. Pausing timer.".to_string(),
            Message::MonitorPausedIdle(secs) => format!("User idle ({} s). Pausing timer.", secs),
            Message::MonitorResumed => "User active. Resuming timer.".to_string(),
            Message::BreakTriggered => "Work time elapsed. Triggering break reminder.".to_string(),
            Message::BreakCompleted(rounds) => format!("Break completed. {} rounds finished today.", rounds),
            Message::RestStarted => "User started rest".to_string(),
            Message::Snoozed => "User snoozed the reminder for 5 minutes".to_string(),
            Message::PromptClosed(state) => format!("Reminder window closed in state {}. Resetting to work.", state),
            Message::PromptFailed(e) => format!("Reminder window failed: {}", e),
            Message::WorkDurationUpdated(minutes) => format!("Work duration updated to {} minutes", minutes),
            Message::InvalidDurationRange => "Work duration must be between 1 and 120 minutes".to_string(),
            Message::InvalidDurationFormat => "Work duration must be a whole number of minutes".to_string(),

            // === AUDIO MESSAGES ===
            Message::AudioInitFailed(e) => format!("Audio device initialization failed: {}", e),
            Message::AudioPlaybackFailed(e) => format!("Audio playback failed: {}", e),
            Message::AudioTrackMissing(path) => format!("Music file not found: {}", path),
            Message::AudioTrackSet(path) => format!("Reminder track set to: {}", path),
            Message::AudioBackendUnavailable => "Audio backend is unavailable on this platform".to_string(),

            // === MEDIA CONTROL MESSAGES ===
            Message::MediaPauseAll => "Executing pause-all-media sequence".to_string(),
            Message::MediaResumeAll => "Executing resume-all-media sequence".to_string(),
            Message::MediaPlayerFound(class) => format!("Media player window found ({})", class),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigCorrupt(e) => format!("Configuration file unreadable, falling back to defaults: {}", e),
            Message::ConfigSaveFailed(e) => format!("Failed to save configuration: {}", e),
            Message::MusicUpdated(path) => format!("Reminder music updated to: {}", path),
            Message::PromptWorkDuration => "Work duration in minutes (1-120)".to_string(),
            Message::PromptMusicPath => "Path to reminder music (leave empty for the built-in chime)".to_string(),

            // === HEALTH JOURNAL MESSAGES ===
            Message::HealthRecorded(date) => format!("Health metrics recorded for {}", date),
            Message::HealthDataCorrupt(e) => format!("Health data file unreadable, starting empty: {}", e),
            Message::HealthNoEntries => "No health entries recorded yet".to_string(),
            Message::WeightRequired => "Weight is required".to_string(),
            Message::HealthEntriesTitle => "Recorded health metrics".to_string(),
            Message::PromptWeight => "Weight (kg)".to_string(),
            Message::PromptBpHigh => "Blood pressure, systolic".to_string(),
            Message::PromptBpLow => "Blood pressure, diastolic".to_string(),

            // === AUTOSTART MESSAGES ===
            Message::AutostartEnabled => "Autostart enabled".to_string(),
            Message::AutostartDisabled => "Autostart disabled".to_string(),
            Message::AutostartAlreadyDisabled => "Autostart was not enabled".to_string(),
            Message::AutostartEnableFailed(e) => format!("Failed to enable autostart: {}", e),
            Message::AutostartDisableFailed(e) => format!("Failed to disable autostart: {}", e),
            Message::AutostartStatus(status) => format!("Autostart is {}", status),
            Message::AutostartNotImplemented => "Autostart is not implemented for this platform".to_string(),

            // === WATCHER PROCESS MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher stopped (PID: {})", pid),
            Message::WatcherNotRunning => "Watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::InvalidPidFileContent => "Invalid PID file content".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (error {})", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process (error {})", code),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher process {}", pid),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down gracefully...".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down gracefully...".to_string(),
            Message::MonitorTaskPanicked(e) => format!("Monitor task panicked: {}", e),
            Message::MonitorExitedNormally => "Monitor exited normally".to_string(),
            Message::MonitorShuttingDown => "Shutting down monitor...".to_string(),
            Message::DaemonModeNotSupported => "Detached mode is not supported on this platform".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),

            // === TRAY AND DIALOG MESSAGES ===
            Message::TrayUnavailable => "System tray requires Windows; running headless".to_string(),
            Message::TrayInitFailed(e) => format!("Failed to create tray icon: {}", e),
            Message::DialogOpenFailed(e) => format!("Failed to open dialog window: {}", e),

            // === LOGGING MESSAGES ===
            Message::LogFileOpened(path) => format!("Logging to {}", path),
            Message::PanicCaptured(info) => format!("Uncaught panic: {}", info),
        };
        write!(f, "{}", message)
    }
}
