//! Append-only `error.log` writer

use super::ErrorReport;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File name of the log written next to generated projects
pub const LOG_FILE_NAME: &str = "error.log";

/// Best-effort log of classified failures.
///
/// The file is opened and closed for every entry. Write failures never
/// reach the caller.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    /// `<desktop>/error.log`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(LOG_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the report's entry, swallowing any failure
    pub fn append(&self, report: &ErrorReport) {
        if let Err(err) = self.try_append(&report.log_entry()) {
            tracing::debug!(path = %self.path.display(), error = %err, "could not write error log");
        }
    }

    fn try_append(&self, entry: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.as_bytes())?;
        file.flush()
    }
}
