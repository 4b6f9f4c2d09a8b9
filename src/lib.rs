//! # Deskbreak - sedentary break reminder
//!
//! A Windows system tray assistant that counts down work cycles, shows a
//! full-screen break reminder with looping music, pauses external media
//! while the reminder is up and keeps a small daily health journal.
//!
//! ## Features
//!
//! - **Work/break cycles**: configurable work duration with break, snooze
//!   and temporary-hide actions on the reminder
//! - **Activity awareness**: the timer pauses while the session is locked
//!   or the user has been idle
//! - **Media control**: best-effort pause/resume of external players around
//!   each break
//! - **Health journal**: daily weight and blood pressure entries from the
//!   tray or the console
//! - **Autostart**: per-user run-at-login registration
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deskbreak::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
