//! Tracing subscriber setup.

use std::{
    fs::{File, OpenOptions},
    io,
    path::PathBuf,
    sync::Mutex,
};

use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug)]
pub enum LogTarget {
    /// Append to an open file. Used while the terminal shows the window.
    File(File),
    /// Write to stderr. Used by the headless commands.
    Stderr,
}

/// Opens the first candidate that can be appended to.
///
/// Never creates directories, so a missing database folder stays missing.
pub fn open_log_file(candidates: &[PathBuf]) -> Option<(PathBuf, File)> {
    candidates.iter().find_map(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
            .map(|file| (path.clone(), file))
    })
}

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(target: LogTarget) {
    let builder = tracing_subscriber::fmt().compact();

    match target {
        LogTarget::File(file) => {
            builder
                .with_env_filter(env_filter("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
        LogTarget::Stderr => {
            builder
                .with_env_filter(env_filter("warn"))
                .with_writer(io::stderr)
                .try_init()
                .ok();
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
