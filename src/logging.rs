//! Tracing setup
//!
//! The terminal UI owns stdout and the alternate screen, so log lines go to a
//! file in the local data directory instead of stderr.

use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "applicant-intake.log";

/// Get the log file path
fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("io", "applicant-intake", "applicant-intake")
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Open the log file for appending, creating its directory if needed
fn open_log_file() -> Option<File> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the global subscriber. Without a writable log file events are dropped.
pub fn init() {
    let file_layer = open_log_file().map(|file| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "applicant_intake=info".into()),
        )
        .with(file_layer)
        .init();
}
