//! Best-effort pause/resume of external media players.
//!
//! Two independent strategies are fired in sequence:
//!
//! 1. A deterministic `WM_COMMAND` to a PotPlayer window found by class name,
//!    which pauses or plays regardless of current state.
//! 2. A global media play/pause key event for everything else (browsers,
//!    other players).
//!
//! The global toggle cannot know the current playback state, so it can invert
//! the desired effect (e.g. start a player that was already paused). That
//! imprecision is inherent to the approach and accepted; callers treat both
//! operations as fire-and-forget. Absent target windows are not errors.

use crate::libs::messages::Message;
use crate::msg_info;

#[cfg(windows)]
mod windows {
    use super::*;
    use crate::libs::win32::to_wide;
    use crate::msg_debug;
    use std::ptr;
    use winapi::um::winuser::{keybd_event, FindWindowW, PostMessageW, KEYEVENTF_KEYUP, VK_MEDIA_PLAY_PAUSE, WM_COMMAND};

    /// PotPlayer window classes, 64-bit build first.
    const POTPLAYER_CLASSES: [&str; 2] = ["PotPlayer64", "PotPlayer"];

    /// PotPlayer WM_COMMAND control codes.
    pub(super) const CMD_PAUSE: usize = 20000;
    pub(super) const CMD_PLAY: usize = 20001;

    /// Posts a command code to every PotPlayer window found by class lookup.
    pub(super) fn send_potplayer_command(cmd_code: usize) {
        for class_name in POTPLAYER_CLASSES {
            let class = to_wide(class_name);
            unsafe {
                let hwnd = FindWindowW(class.as_ptr(), ptr::null());
                if !hwnd.is_null() {
                    msg_info!(Message::MediaPlayerFound(class_name.to_string()));
                    PostMessageW(hwnd, WM_COMMAND, cmd_code, 0);
                }
            }
        }
    }

    /// Injects a global play/pause media key press.
    pub(super) fn send_global_media_key() {
        msg_debug!("sending global media play/pause signal");
        unsafe {
            keybd_event(VK_MEDIA_PLAY_PAUSE as u8, 0, 0, 0);
            keybd_event(VK_MEDIA_PLAY_PAUSE as u8, 0, KEYEVENTF_KEYUP, 0);
        }
    }
}

/// Attempts to pause all known media playback.
pub fn pause_all() {
    msg_info!(Message::MediaPauseAll);
    #[cfg(windows)]
    {
        windows::send_potplayer_command(windows::CMD_PAUSE);
        windows::send_global_media_key();
    }
}

/// Attempts to resume all known media playback.
pub fn resume_all() {
    msg_info!(Message::MediaResumeAll);
    #[cfg(windows)]
    {
        windows::send_potplayer_command(windows::CMD_PLAY);
        windows::send_global_media_key();
    }
}
