#[derive(Debug, Clone)]
pub enum Message {
    // === APPLICATION LIFECYCLE ===
    AppStarted,
    AppAlreadyRunning,

    // === MONITOR MESSAGES ===
    MonitorStarted {
        work_duration: u64,
        idle_threshold: u64,
    },
    MonitorStopped,
    MonitorPausedLocked,
    MonitorPausedIdle(u64),
    MonitorResumed,
    BreakTriggered,
    BreakCompleted(u64),
    RestStarted,
    Snoozed,
    PromptClosed(String),
    PromptFailed(String),
    WorkDurationUpdated(u64),
    InvalidDurationRange,
    InvalidDurationFormat,

    // === AUDIO MESSAGES ===
    AudioInitFailed(String),
    AudioPlaybackFailed(String),
    AudioTrackMissing(String),
    AudioTrackSet(String),
    AudioBackendUnavailable,

    // === MEDIA CONTROL MESSAGES ===
    MediaPauseAll,
    MediaResumeAll,
    MediaPlayerFound(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigCorrupt(String),
    ConfigSaveFailed(String),
    MusicUpdated(String),
    PromptWorkDuration,
    PromptMusicPath,

    // === HEALTH JOURNAL MESSAGES ===
    HealthRecorded(String),
    HealthDataCorrupt(String),
    HealthNoEntries,
    WeightRequired,
    HealthEntriesTitle,
    PromptWeight,
    PromptBpHigh,
    PromptBpLow,

    // === AUTOSTART MESSAGES ===
    AutostartEnabled,
    AutostartDisabled,
    AutostartAlreadyDisabled,
    AutostartEnableFailed(String),
    AutostartDisableFailed(String),
    AutostartStatus(String),
    AutostartNotImplemented,

    // === WATCHER PROCESS MESSAGES ===
    WatcherStarted(u32),
    WatcherStopped(u32),
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    InvalidPidFileContent,
    FailedToOpenProcess(u32),
    FailedToTerminateProcess(u32),
    WatcherFailedToStop(u32),
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherReceivedSigterm,
    MonitorTaskPanicked(String),
    MonitorExitedNormally,
    MonitorShuttingDown,
    DaemonModeNotSupported,
    FailedToGetCurrentExecutable,

    // === TRAY AND DIALOG MESSAGES ===
    TrayUnavailable,
    TrayInitFailed(String),
    DialogOpenFailed(String),

    // === LOGGING MESSAGES ===
    LogFileOpened(String),
    PanicCaptured(String),
}
