//! Resolved application configuration.

use std::path::{Path, PathBuf};

use crate::{
    cli::Cli,
    persist::{StoreError, StoreResult},
};

/// Database file name used when no path is configured.
pub const DEFAULT_DB_FILE: &str = "contacts.db";
/// Log file name used by the interactive window when no path is configured.
pub const DEFAULT_LOG_FILE: &str = "contact-book.log";

/// What to do when the store cannot acquire a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FailurePolicy {
    /// Log the failure and continue as if the store were empty.
    #[default]
    Degrade,
    /// Return the connection error to the caller.
    Propagate,
}

impl FailurePolicy {
    /// Applies the policy to a store result.
    ///
    /// Only connection failures are affected; statement errors always propagate.
    pub fn settle<T: Default>(self, result: StoreResult<T>) -> StoreResult<T> {
        match result {
            Err(err @ StoreError::Connect { .. }) if self == Self::Degrade => {
                tracing::error!(error = %err, "contact store unavailable, continuing with empty result");
                Ok(T::default())
            }
            other => other,
        }
    }
}

/// Settings shared by the interactive window and the headless commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Connection-failure handling.
    pub failure_policy: FailurePolicy,
    /// Preferred log file for the interactive window.
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Resolves flags and environment, falling back to files next to the executable.
    ///
    /// The log file never depends on the database path, so an unreachable
    /// database still reaches the connection-failure policy.
    pub fn from_cli(cli: &Cli) -> Self {
        let db_path = cli
            .db
            .clone()
            .unwrap_or_else(|| program_dir().join(DEFAULT_DB_FILE));
        let log_file = cli
            .log_file
            .clone()
            .unwrap_or_else(default_log_file);

        Self {
            db_path,
            failure_policy: cli.on_connect_failure,
            log_file,
        }
    }

    /// Log files to try for the window, preferred first.
    pub fn log_candidates(&self) -> Vec<PathBuf> {
        let fallback = default_log_file();
        if fallback == self.log_file {
            vec![fallback]
        } else {
            vec![self.log_file.clone(), fallback]
        }
    }
}

/// `contact-book.log` next to the executable.
pub fn default_log_file() -> PathBuf {
    program_dir().join(DEFAULT_LOG_FILE)
}

/// Directory of the running executable, or `.` when it cannot be resolved.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
