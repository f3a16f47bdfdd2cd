//! External process execution and SDK detection
//!
//! This module provides:
//! - Blocking command execution behind the `ProcessRunner` trait
//! - SDK version probing for the preflight check

pub mod runner;
pub mod tool;
pub mod version;

pub use runner::{execute, CommandStep, ExitStatus, ProcessRunner, StepKind, SystemRunner};
pub use tool::{SdkStatus, ToolConfig, ToolManager};
