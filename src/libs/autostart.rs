//! Run-at-login registration.
//!
//! Registers the application under the current user's
//! `Software\Microsoft\Windows\CurrentVersion\Run` key with the fixed value
//! name `DeskBreak`, pointing at `"<exe>" run` (the run command detaches into
//! a windowless process on its own). Both operations are idempotent: enabling
//! overwrites any existing entry, disabling tolerates a missing one.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;

/// Registry value name identifying this application.
#[cfg(windows)]
const RUN_VALUE_NAME: &str = "DeskBreak";

#[cfg(windows)]
mod windows {
    use super::*;
    use crate::{msg_debug, msg_info};
    use std::env;
    use std::os::windows::process::CommandExt;
    use std::process::Command;

    const RUN_KEY: &str = r"HKCU\Software\Microsoft\Windows\CurrentVersion\Run";

    /// Windows process creation flag to hide console windows.
    const CREATE_NO_WINDOW: u32 = 0x08000000;

    /// Converts Windows command output from the OEM codepage to UTF-8.
    pub(super) fn decode_windows_output(bytes: &[u8]) -> String {
        if let Ok(utf8) = String::from_utf8(bytes.to_vec()) {
            return utf8;
        }
        encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
    }

    pub(super) fn enable() -> Result<()> {
        let exe_path = env::current_exe()?;
        let command = format!("\"{}\" run", exe_path.to_string_lossy());

        msg_debug!(format!("registering autostart entry: {}", command));

        let output = Command::new("reg")
            .args(["add", RUN_KEY, "/v", RUN_VALUE_NAME, "/t", "REG_SZ", "/d", &command, "/f"])
            .creation_flags(CREATE_NO_WINDOW)
            .output()?;

        if output.status.success() {
            msg_info!(Message::AutostartEnabled);
            Ok(())
        } else {
            let error = decode_windows_output(&output.stderr);
            Err(msg_error_anyhow!(Message::AutostartEnableFailed(error)))
        }
    }

    pub(super) fn disable() -> Result<()> {
        let output = Command::new("reg")
            .args(["delete", RUN_KEY, "/v", RUN_VALUE_NAME, "/f"])
            .creation_flags(CREATE_NO_WINDOW)
            .output()?;

        if output.status.success() {
            msg_info!(Message::AutostartDisabled);
            Ok(())
        } else {
            let error = decode_windows_output(&output.stderr);
            if error.contains("cannot find") || error.contains("The system was unable to find") {
                // Entry doesn't exist - already disabled.
                msg_info!(Message::AutostartAlreadyDisabled);
                Ok(())
            } else {
                Err(msg_error_anyhow!(Message::AutostartDisableFailed(error)))
            }
        }
    }

    pub(super) fn is_enabled() -> Result<bool> {
        let output = Command::new("reg")
            .args(["query", RUN_KEY, "/v", RUN_VALUE_NAME])
            .creation_flags(CREATE_NO_WINDOW)
            .output()?;

        Ok(output.status.success())
    }
}

#[cfg(not(windows))]
mod unix {
    use super::*;

    pub(super) fn enable() -> Result<()> {
        Err(msg_error_anyhow!(Message::AutostartNotImplemented))
    }

    pub(super) fn disable() -> Result<()> {
        Err(msg_error_anyhow!(Message::AutostartNotImplemented))
    }

    pub(super) fn is_enabled() -> Result<bool> {
        Ok(false)
    }
}

/// Enables run-at-login for the current user.
pub fn enable() -> Result<()> {
    #[cfg(windows)]
    return windows::enable();

    #[cfg(not(windows))]
    return unix::enable();
}

/// Disables run-at-login; succeeds when no entry exists.
pub fn disable() -> Result<()> {
    #[cfg(windows)]
    return windows::disable();

    #[cfg(not(windows))]
    return unix::disable();
}

/// Checks whether run-at-login is currently registered.
pub fn is_enabled() -> Result<bool> {
    #[cfg(windows)]
    return windows::is_enabled();

    #[cfg(not(windows))]
    return unix::is_enabled();
}

/// Toggles the autostart entry, returning the new state.
pub fn toggle() -> Result<bool> {
    if is_enabled()? {
        disable()?;
        Ok(false)
    } else {
        enable()?;
        Ok(true)
    }
}

/// Current status as a human-readable string.
pub fn status() -> Result<String> {
    match is_enabled()? {
        true => Ok("enabled".to_string()),
        false => Ok("disabled".to_string()),
    }
}
