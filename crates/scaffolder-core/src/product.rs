//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface each product binary implements to
//! configure which SDK is driven, what gets overlaid, and which commands run.

use crate::project::ProjectName;
use crate::runtime::{CommandStep, ToolConfig};
use crate::templates::TemplateFile;
use std::path::Path;

/// Configuration trait for different scaffolding products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - The SDK it drives and where to get it
/// - Template overlay (directories and files)
/// - The exact command lines for every pipeline step
pub trait ProductConfig {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name, also used as the console title
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// The SDK tool invoked by every command step
    fn sdk(&self) -> ToolConfig;

    /// Environment variable name for overriding the SDK binary
    fn sdk_program_env(&self) -> &'static str;

    /// SDK binary to invoke, honouring the environment override
    fn sdk_program(&self) -> String {
        std::env::var(self.sdk_program_env())
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| self.sdk().name.to_string())
    }

    /// Subdirectories created under the project before the overlay
    fn directories(&self) -> &'static [&'static str];

    /// Files overlaid onto the generated project
    fn catalog(&self) -> &'static [TemplateFile];

    /// Packages installed one by one, in this order
    fn packages(&self) -> &'static [&'static str];

    /// Command that generates the base project at `project_dir`
    fn generate_step(&self, name: &ProjectName, project_dir: &Path) -> CommandStep;

    /// Command that installs one package into the project
    fn install_step(&self, package: &str, project_dir: &Path) -> CommandStep;

    /// Commands that create and then apply the initial migration
    fn migration_steps(&self, project_dir: &Path) -> [CommandStep; 2];

    /// Command that opens the project in an editor
    fn editor_step(&self, project_dir: &Path) -> CommandStep;
}
