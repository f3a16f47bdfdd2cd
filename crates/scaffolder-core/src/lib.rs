//! Scaffolder Core - Shared library for SDK-driven project scaffolding CLIs
//!
//! This library drives an external SDK to generate a base project, overlays a
//! fixed set of template files, installs packages and applies the initial
//! database migration. Product binaries (e.g. `webapi-create`) supply the
//! concrete SDK, templates and command lines through [`ProductConfig`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name validation, template overlay, blocking command execution
//! - **Layer 2: Workflow Orchestration** - `ScaffoldPipeline`, failure classification and `error.log`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based console (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based terminal console and [`run`]
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{ScaffoldPipeline, SystemRunner};
//!
//! let mut pipeline = ScaffoldPipeline::new(&MyConfig, SystemRunner, MyConsole, desktop);
//! let outcome = pipeline.run();
//! ```

pub mod error;
pub mod pipeline;
pub mod product;
pub mod project;
pub mod report;
pub mod runtime;
pub mod templates;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use pipeline::{Outcome, PipelineOptions, PipelineState, ScaffoldPipeline};
pub use product::ProductConfig;
pub use project::ProjectName;
pub use report::{Category, ErrorClassifier, ErrorLog, ErrorReport};
pub use runtime::{CommandStep, ExitStatus, ProcessRunner, StepKind, SystemRunner, ToolConfig};
pub use templates::TemplateFile;
pub use ui::Console;

#[cfg(feature = "tui")]
pub use tui::run;
