//! SDK tool detection
//!
//! Probes the external SDK the pipeline drives (e.g. `dotnet`) for its
//! version so the user gets an early hint about a missing or outdated install.

use super::version;
use std::process::Command;

/// Configuration for an SDK tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "dotnet")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Where the user can download the SDK
    pub download_url: &'static str,
    /// Oldest supported version
    pub min_version: &'static str,
}

/// What the preflight probe found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkStatus {
    Supported { version: String },
    Outdated { version: String, warning: String },
    Missing,
}

/// Manager for checking an SDK tool
pub struct ToolManager {
    config: ToolConfig,
    program: String,
}

impl ToolManager {
    /// Create a manager that invokes `program` (usually `config.name`)
    pub fn new(config: ToolConfig, program: impl Into<String>) -> Self {
        Self {
            config,
            program: program.into(),
        }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                } else {
                    None
                }
            })
    }

    /// Probe the SDK and compare it against the supported minimum
    pub fn preflight(&self) -> SdkStatus {
        match self.get_version() {
            Some(version) => self.status_for(version),
            None => {
                tracing::debug!(program = %self.program, "SDK version probe failed");
                SdkStatus::Missing
            }
        }
    }

    fn status_for(&self, version: String) -> SdkStatus {
        match version::check_minimum(
            &version,
            self.config.min_version,
            self.config.display_name,
            self.config.download_url,
        ) {
            Some(warning) => SdkStatus::Outdated { version, warning },
            None => SdkStatus::Supported { version },
        }
    }
}
