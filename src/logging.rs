//! Tracing setup for the binary
//!
//! The library only emits events; installing a subscriber is left to the
//! binary so embedding applications keep control over their own output.
//! Warnings go to stderr, and with a log file every debug event of the crate
//! is appended to it as well.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default stderr filter directive when `RUST_LOG` is not set
pub const DEFAULT_DIRECTIVE: &str = "tally=warn";

/// Filter directive of the log file
pub const FILE_DIRECTIVE: &str = "tally=debug";

/// Size above which the log file is rotated on startup
pub const MAX_LOG_BYTES: u64 = 1024 * 1024;

/// Install the global subscriber
///
/// Calling this more than once is harmless. A log file that cannot be opened
/// is skipped; stderr logging still works.
pub fn init_tracing(log_file: Option<&Path>) {
    TRACING_INIT.call_once(|| {
        let stderr_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let stderr_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_filter(stderr_filter);

        let file_layer = log_file
            .and_then(|path| open_log_file(path).ok())
            .map(|file| {
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(EnvFilter::new(FILE_DIRECTIVE))
            });

        // try_init: a subscriber may already be installed by a test harness
        let _ = tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .try_init();
    });
}

/// Open the log file for appending, moving a full one aside to `<name>.1`
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let full = fs::metadata(path)
        .map(|meta| meta.len() > MAX_LOG_BYTES)
        .unwrap_or(false);
    if full {
        let mut rotated = path.as_os_str().to_owned();
        rotated.push(".1");
        fs::rename(path, rotated)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}
