//! Single-instance guard.
//!
//! Two monitor processes fighting over the same timer and tray icon would be
//! worse than none, so the process claims an exclusive bind on a fixed local
//! port before doing anything else. First to bind wins; any later process
//! sees the bind fail and exits silently.

use std::net::TcpListener;

/// Fixed loopback port used as the process-wide lock.
pub const INSTANCE_PORT: u16 = 45678;

/// Holds the exclusive port bind for the lifetime of the process.
pub struct InstanceLock {
    _listener: TcpListener,
}

impl InstanceLock {
    /// Attempts to acquire the lock. Returns `None` when another instance
    /// already holds the port.
    pub fn acquire() -> Option<InstanceLock> {
        TcpListener::bind(("127.0.0.1", INSTANCE_PORT))
            .ok()
            .map(|listener| InstanceLock { _listener: listener })
    }
}
