//! Convenience macros for application messaging and logging.
//!
//! The application runs in two very different surfaces: console commands
//! (`init`, `autostart`, `health`) where plain stdout/stderr output is
//! expected, and the windowless tray process where the only useful sink is
//! the log file managed by `libs::logger`. The macros below route every
//! message to the right place automatically: once the file logger has been
//! installed they emit through `tracing`, before that (or without it) they
//! print to the console.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set once `logger::init` has installed the file subscriber.
static FILE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Marks the tracing file sink as active. Called by `logger::init`.
#[doc(hidden)]
pub fn set_file_logging(enabled: bool) {
    FILE_LOGGING.store(enabled, Ordering::Relaxed);
}

/// Returns `true` when messages should be routed through `tracing`.
#[doc(hidden)]
pub fn is_file_logging() -> bool {
    FILE_LOGGING.load(Ordering::Relaxed)
}

/// Prints a general message with automatic sink routing.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_file_logging() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_file_logging() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_file_logging() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_file_logging() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix. Uses stderr in console mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_file_logging() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Debug-only message; filtered by the `RUST_LOG` directive like any other
/// `tracing::debug!` event.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        tracing::debug!("🔍 {}", $msg)
    };
}

/// Creates an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
