//! Project identity: validated names and the paths derived from them

pub mod name;
pub mod paths;

pub use name::{NameRejection, ProjectName, FORBIDDEN_CHARS, RESERVED_NAMES};
pub use paths::{desktop_dir, project_dir};
