//! Tracing subscriber setup for the binary.
//!
//! Library code only emits `tracing` events; this is the one place that
//! decides where they go. `RUST_LOG` always wins over the defaults below.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    /// Used while the terminal UI owns the screen.
    File(PathBuf),
}

impl LogSink {
    /// File sink next to other temp files, e.g. `/tmp/stocker.log`.
    pub fn default_file() -> Self {
        LogSink::File(std::env::temp_dir().join("stocker.log"))
    }
}

fn default_directives(debug: bool) -> &'static str {
    if debug { "warn,stocker=debug" } else { "warn" }
}

fn filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(debug)))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(debug: bool, sink: LogSink) {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(debug));

    match sink {
        LogSink::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogSink::File(path) => {
            // Without a writable log file we stay silent rather than draw over the UI.
            if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
                let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
            }
        }
    }
}
