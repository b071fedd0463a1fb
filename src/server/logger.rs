//! Activity log shared with the dashboard.
//!
//! The activity log is the operator-facing record of what the bot did: one
//! `[timestamp] message` line per entry, appended to a file the dashboard tails. Every entry
//! is mirrored to `tracing` so it also shows up on the console. Diagnostic output that is not
//! meant for operators goes straight to `tracing` instead.

use chrono::{DateTime, SecondsFormat, Utc};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::server::error::AppError;

/// Sink for activity log entries.
///
/// Recording never fails from the caller's point of view.
pub trait ActivityLog: Send + Sync {
    fn record(&self, entry: &str);
}

/// Formats an entry as `[2024-01-01T12:00:00.000Z] entry`.
pub fn format_entry(now: DateTime<Utc>, entry: &str) -> String {
    format!(
        "[{}] {}",
        now.to_rfc3339_opts(SecondsFormat::Millis, true),
        entry
    )
}

/// Activity log appending to a file on disk.
pub struct FileActivityLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileActivityLog {
    /// Opens `path` for appending, creating it and its parent directory if needed.
    ///
    /// # Returns
    /// - `Ok(FileActivityLog)` - Log file ready for writing
    /// - `Err(AppError::IoErr)` - Directory or file could not be created
    pub fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }
}

impl ActivityLog for FileActivityLog {
    fn record(&self, entry: &str) {
        let line = format_entry(Utc::now(), entry);
        tracing::info!("{}", line);

        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Err(e) = writeln!(file, "{}", line) {
            tracing::warn!(
                "Failed to write activity log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
