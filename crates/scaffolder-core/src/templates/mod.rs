//! Template catalogs and their overlay onto generated projects
//!
//! This module provides:
//! - Static template catalogs (relative path + literal content)
//! - Directory creation and unconditional file overlay

pub mod catalog;
pub mod writer;

pub use catalog::{TemplateFile, WEBAPI_DIRECTORIES, WEBAPI_SAMPLE};
pub use writer::{create_directories, write_catalog};
