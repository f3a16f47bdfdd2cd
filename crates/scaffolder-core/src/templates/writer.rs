//! Template overlay onto a generated project

use crate::error::ScaffoldError;
use crate::templates::catalog::TemplateFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Create each subdirectory under `project_dir`. Existing directories are fine.
pub fn create_directories(project_dir: &Path, dirs: &[&str]) -> Result<(), ScaffoldError> {
    for dir in dirs {
        let path = project_dir.join(dir);
        fs::create_dir_all(&path).map_err(|e| ScaffoldError::from_io(&path, e))?;
        tracing::debug!(path = %path.display(), "ensured directory");
    }
    Ok(())
}

/// Write every catalog entry under `project_dir`, replacing files that already exist
pub fn write_catalog(
    project_dir: &Path,
    catalog: &[TemplateFile],
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let mut written = Vec::with_capacity(catalog.len());

    for file in catalog {
        let target_path = file
            .segments()
            .fold(project_dir.to_path_buf(), |path, segment| path.join(segment));

        // Ensure parent directories exist
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::from_io(parent, e))?;
        }

        fs::write(&target_path, file.content)
            .map_err(|e| ScaffoldError::from_io(&target_path, e))?;
        tracing::debug!(path = %target_path.display(), bytes = file.content.len(), "wrote template");

        written.push(target_path);
    }

    Ok(written)
}
