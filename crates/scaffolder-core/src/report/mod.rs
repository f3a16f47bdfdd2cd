//! Failure reporting: classification into remediation messages and the
//! append-only `error.log`

pub mod classifier;
pub mod logger;

pub use classifier::{Category, ErrorClassifier};
pub use logger::ErrorLog;

use chrono::{DateTime, Local};
use std::fmt::Write as _;

/// Timestamp format used in `error.log`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A classified failure, ready to be shown and logged
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub category: Category,
    pub tip: String,
    pub message: String,
    pub solution: String,
    pub timestamp: DateTime<Local>,
    /// Rendered cause chain, empty when there is nothing beyond `message`
    pub context: String,
}

impl ErrorReport {
    /// The block appended to `error.log`
    pub fn log_entry(&self) -> String {
        let mut entry = format!(
            "{}\n\n{}\n\n{}\n\n[{}]\n\n",
            self.tip,
            self.message,
            self.solution,
            self.timestamp.format(TIMESTAMP_FORMAT)
        );
        if !self.context.is_empty() {
            let _ = write!(entry, "StackTrace:\n{}\n\n", self.context);
        }
        entry
    }
}
