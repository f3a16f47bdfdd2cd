//! Typed failures raised by the scaffolding pipeline
//!
//! Every step converts low-level errors into a [`ScaffoldError`] at the point
//! where the offending path or command is known. The classifier in
//! [`crate::report`] relies on these variants to pick a remediation message.

use crate::project::NameRejection;
use crate::runtime::ExitStatus;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid project name {name:?}: {reason}")]
    InvalidName { name: String, reason: NameRejection },

    #[error("'{program}' could not be started. Is it installed and on PATH?")]
    ToolNotFound {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("File system error at {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied at {}: {source}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("'{command}' exited with {status}")]
    ToolExit { command: String, status: ExitStatus },
}

impl ScaffoldError {
    /// Convert an I/O error raised while touching `path` into the matching variant
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => ScaffoldError::PermissionDenied { path, source },
            io::ErrorKind::InvalidInput => {
                ScaffoldError::InvalidArgument(format!("{}: {}", path.display(), source))
            }
            _ => ScaffoldError::FileSystem { path, source },
        }
    }
}
