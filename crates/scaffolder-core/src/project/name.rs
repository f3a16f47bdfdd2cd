//! Project name validation

use crate::error::ScaffoldError;
use std::fmt;

/// Characters that may not appear in a project name.
///
/// Covers what the common host filesystems reject in a path segment.
pub const FORBIDDEN_CHARS: &[char] = &[':', '?', '*', '<', '>', '|', '"', '\\', '/'];

/// Path segments with a special meaning; usable as a name they would escape the desktop
pub const RESERVED_NAMES: &[&str] = &[".", ".."];

/// Why a raw name was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameRejection {
    Empty,
    Reserved,
    ForbiddenChars(Vec<char>),
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRejection::Empty => write!(f, "the name is empty"),
            NameRejection::Reserved => write!(f, "the name is a reserved path segment"),
            NameRejection::ForbiddenChars(found) => {
                let found: String = found.iter().collect();
                write!(f, "the name contains forbidden characters ({})", found)
            }
        }
    }
}

/// A trimmed, non-empty project name free of forbidden characters that
/// names a single child directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate raw user input
    pub fn parse(raw: &str) -> Result<Self, ScaffoldError> {
        let trimmed = raw.trim();
        let reject = |reason| ScaffoldError::InvalidName {
            name: raw.to_string(),
            reason,
        };

        if trimmed.is_empty() {
            return Err(reject(NameRejection::Empty));
        }
        if RESERVED_NAMES.contains(&trimmed) {
            return Err(reject(NameRejection::Reserved));
        }

        let mut found: Vec<char> = trimmed
            .chars()
            .filter(|c| FORBIDDEN_CHARS.contains(c) || c.is_control())
            .collect();
        if !found.is_empty() {
            found.sort_unstable();
            found.dedup();
            return Err(reject(NameRejection::ForbiddenChars(found)));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Space-separated list of the forbidden characters, for user-facing messages
pub fn forbidden_list() -> String {
    FORBIDDEN_CHARS
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
