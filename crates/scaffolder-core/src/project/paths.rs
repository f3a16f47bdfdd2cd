//! Desktop and project directory resolution

use super::name::ProjectName;
use std::path::{Path, PathBuf};

/// The user's desktop folder.
///
/// Falls back to `<home>/Desktop`, then to the current directory.
pub fn desktop_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `<desktop>/<name>`
pub fn project_dir(desktop: &Path, name: &ProjectName) -> PathBuf {
    desktop.join(name.as_str())
}
