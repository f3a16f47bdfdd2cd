//! Maps any pipeline failure to a tip / error / solution triple

use super::ErrorReport;
use crate::error::ScaffoldError;
use crate::project::name::forbidden_list;
use crate::runtime::ToolConfig;
use chrono::Local;
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Failure categories, in the order they are tested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    InvalidName,
    ToolNotFound,
    FileSystem,
    Permission,
    InvalidArgument,
    ToolExit,
    Unknown,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::InvalidName => "invalid project name",
            Category::ToolNotFound => "SDK not found",
            Category::FileSystem => "file system error",
            Category::Permission => "permission error",
            Category::InvalidArgument => "invalid argument",
            Category::ToolExit => "command failed",
            Category::Unknown => "unexpected error",
        }
    }

    /// First matching category for the cause chain of `err`
    pub fn of(err: &anyhow::Error) -> Category {
        let causes: Vec<&(dyn StdError + 'static)> = err.chain().collect();
        let typed = || {
            causes
                .iter()
                .filter_map(|cause| cause.downcast_ref::<ScaffoldError>())
        };
        let io_kinds = || {
            causes
                .iter()
                .filter_map(|cause| cause.downcast_ref::<io::Error>())
                .map(io::Error::kind)
        };

        if typed().any(|e| matches!(e, ScaffoldError::InvalidName { .. })) {
            return Category::InvalidName;
        }
        if typed().any(|e| matches!(e, ScaffoldError::ToolNotFound { .. })) {
            return Category::ToolNotFound;
        }
        if typed().any(|e| matches!(e, ScaffoldError::FileSystem { .. }))
            || io_kinds().any(|kind| {
                !matches!(
                    kind,
                    io::ErrorKind::PermissionDenied | io::ErrorKind::InvalidInput
                )
            })
        {
            return Category::FileSystem;
        }
        if typed().any(|e| matches!(e, ScaffoldError::PermissionDenied { .. }))
            || io_kinds().any(|kind| kind == io::ErrorKind::PermissionDenied)
        {
            return Category::Permission;
        }
        if typed().any(|e| matches!(e, ScaffoldError::InvalidArgument(_)))
            || io_kinds().any(|kind| kind == io::ErrorKind::InvalidInput)
        {
            return Category::InvalidArgument;
        }
        if typed().any(|e| matches!(e, ScaffoldError::ToolExit { .. })) {
            return Category::ToolExit;
        }
        Category::Unknown
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Produces user-facing remediation for failures, worded for one SDK
pub struct ErrorClassifier {
    sdk: ToolConfig,
}

impl ErrorClassifier {
    pub fn new(sdk: ToolConfig) -> Self {
        Self { sdk }
    }

    pub fn classify(&self, err: &anyhow::Error) -> ErrorReport {
        let category = Category::of(err);
        let sdk = self.sdk.display_name;

        let (tip, message, solution) = match category {
            Category::InvalidName => (
                format!(
                    "Tip: Avoid using invalid characters in project names (e.g., {} ).",
                    forbidden_list()
                ),
                "Error: The project name is empty or contains invalid characters.".to_string(),
                "Solution: Use only letters, numbers, underscores, or dashes in your project name."
                    .to_string(),
            ),
            Category::ToolNotFound => (
                format!(
                    "Tip: Install {} {} from {}",
                    sdk, self.sdk.min_version, self.sdk.download_url
                ),
                format!("Error: The {} was not found on your system.", sdk),
                format!(
                    "Solution: Download and install {} {} from the official website.",
                    sdk, self.sdk.min_version
                ),
            ),
            Category::FileSystem => (
                "Tip: Close any open files or folders and make sure the disk is not full."
                    .to_string(),
                "Error: A file or directory operation failed.".to_string(),
                "Solution: Ensure the project files and folders are not locked by another program and that there is enough disk space, then try again."
                    .to_string(),
            ),
            Category::Permission => (
                "Tip: Run the app with elevated privileges if you get permission errors."
                    .to_string(),
                "Error: Permission denied while creating the project.".to_string(),
                "Solution: Re-run the app as administrator (or with sudo) or choose a location you can write to."
                    .to_string(),
            ),
            Category::InvalidArgument => (
                "Tip: Check your input for invalid characters or values.".to_string(),
                "Error: An invalid argument was supplied.".to_string(),
                "Solution: Use only valid input values.".to_string(),
            ),
            Category::ToolExit => (
                format!(
                    "Tip: Make sure the {} is installed and your project files are not corrupted.",
                    sdk
                ),
                "Error: A system command failed to execute properly.".to_string(),
                format!("Solution: Reinstall the {} and check your project files.", sdk),
            ),
            Category::Unknown => (
                "Tip: See the error details below and check your environment or input."
                    .to_string(),
                format!("Error: {}", err),
                "Solution: Review the error details and check your environment or input."
                    .to_string(),
            ),
        };

        let context = match category {
            Category::InvalidName => String::new(),
            _ => render_chain(err),
        };

        ErrorReport {
            category,
            tip,
            message,
            solution,
            timestamp: Local::now(),
            context,
        }
    }
}

/// Top-level message followed by one `caused by:` line per source
fn render_chain(err: &anyhow::Error) -> String {
    let mut chain = err.chain();
    let mut rendered = chain.next().map(|e| e.to_string()).unwrap_or_default();
    for cause in chain {
        rendered.push_str("\n  caused by: ");
        rendered.push_str(&cause.to_string());
    }
    rendered
}
