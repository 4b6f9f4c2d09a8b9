//! Stops a previously detached tray process via its PID file.

use crate::libs::daemon;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    daemon::stop()
}
