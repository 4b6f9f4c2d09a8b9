//! User presence signals: idle time and a weak session-lock heuristic.
//!
//! Both queries are cheap, non-blocking reads used once per monitor tick.
//! On any platform failure they return the safe defaults (not idle, not
//! locked) so the timer keeps running rather than stalling.

/// Seconds since the last global keyboard or mouse input.
#[cfg(windows)]
pub fn idle_seconds() -> f64 {
    use std::mem;
    use winapi::um::sysinfoapi::GetTickCount;
    use winapi::um::winuser::{GetLastInputInfo, LASTINPUTINFO};

    unsafe {
        let mut info = LASTINPUTINFO {
            cbSize: mem::size_of::<LASTINPUTINFO>() as u32,
            dwTime: 0,
        };
        if GetLastInputInfo(&mut info) == 0 {
            return 0.0;
        }
        // Tick counts are milliseconds and wrap after ~49 days; wrapping_sub
        // keeps the delta correct across the wrap.
        let millis = GetTickCount().wrapping_sub(info.dwTime);
        millis as f64 / 1000.0
    }
}

#[cfg(not(windows))]
pub fn idle_seconds() -> f64 {
    0.0
}

/// Best-effort check whether the workstation is locked.
///
/// A missing foreground window is used as a proxy for the lock screen. This
/// is a weak signal: it is usually true while locked, but false negatives
/// (and the occasional false positive during focus changes) are expected and
/// accepted. The idle threshold covers the cases this misses.
#[cfg(windows)]
pub fn is_session_locked() -> bool {
    use winapi::um::winuser::GetForegroundWindow;

    unsafe { GetForegroundWindow().is_null() }
}

#[cfg(not(windows))]
pub fn is_session_locked() -> bool {
    false
}
