//! File logging for the tray process.
//!
//! The tray process is windowless, so the append-only log file in the
//! application data directory is its only diagnostic surface. `init` installs
//! a `tracing` subscriber writing there and flips the message macros over to
//! the tracing sink; `install_panic_hook` makes sure even a fatal panic
//! leaves a trace in the file before the process dies.

use super::data_storage::DataStorage;
use super::messages::{macros, Message};
use crate::msg_error;
use anyhow::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "deskbreak.log";

/// `MakeWriter` target sharing one append-mode file handle.
#[derive(Clone)]
struct LogWriter(Arc<File>);

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self.0).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self.0).flush()
    }
}

/// Opens the log file and installs the global tracing subscriber.
///
/// Returns the log file path. Calling this twice is an error from
/// `tracing_subscriber`; the run command calls it exactly once.
pub fn init() -> Result<PathBuf> {
    let path = DataStorage::new().get_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let writer = LogWriter(Arc::new(file));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .init();

    macros::set_file_logging(true);
    tracing::info!("{}", Message::LogFileOpened(path.display().to_string()));
    Ok(path)
}

/// Routes panics from any thread into the log before the default abort path.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        msg_error!(Message::PanicCaptured(info.to_string()));
        default_hook(info);
    }));
}
