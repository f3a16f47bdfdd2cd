//! Blocking execution of external command steps

use crate::error::ScaffoldError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Which stage of the pipeline a command belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Generate,
    InstallPackage,
    MigrationAdd,
    MigrationApply,
    LaunchEditor,
}

/// One external command invocation plus the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStep {
    pub kind: StepKind,
    pub program: String,
    pub args: Vec<String>,
    /// `None` inherits the working directory of the current process
    pub workdir: Option<PathBuf>,
}

impl CommandStep {
    pub fn new<I, S>(kind: StepKind, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            workdir: None,
        }
    }

    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.workdir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The command line as shown to the user
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// A process that ended without an exit code (killed by a signal)
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "no exit code (terminated by signal)"),
        }
    }
}

/// Runs one command to completion.
///
/// `Err` means the command could not be launched at all; a launched command
/// that fails is reported through its [`ExitStatus`].
pub trait ProcessRunner {
    fn run(&mut self, step: &CommandStep) -> io::Result<ExitStatus>;
}

/// Runs commands with inherited stdio so the SDK output reaches the user
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, step: &CommandStep) -> io::Result<ExitStatus> {
        let mut command = Command::new(&step.program);
        command.args(&step.args);
        if let Some(dir) = &step.workdir {
            command.current_dir(dir);
        }

        tracing::debug!(command = %step, workdir = ?step.workdir, "running command step");
        let status = command.status()?;
        tracing::debug!(command = %step, %status, "command step finished");

        Ok(status.into())
    }
}

/// Run `step` and turn launch failures and unsuccessful exits into typed errors.
///
/// Success is judged by the exit status alone; the command's output is not
/// inspected.
pub fn execute<R: ProcessRunner + ?Sized>(
    runner: &mut R,
    step: &CommandStep,
) -> Result<(), ScaffoldError> {
    let status = runner.run(step).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ScaffoldError::ToolNotFound {
            program: step.program.clone(),
            source: err,
        },
        _ => ScaffoldError::from_io(
            step.workdir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&step.program)),
            err,
        ),
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ScaffoldError::ToolExit {
            command: step.command_line(),
            status,
        })
    }
}
