//! Built-in template catalogs
//!
//! A catalog is a static table of files overlaid onto a freshly generated
//! project. Content is emitted verbatim; nothing is substituted.

/// A file written into the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the project directory, `/`-separated
    pub path: &'static str,
    pub content: &'static str,
}

impl TemplateFile {
    pub const fn new(path: &'static str, content: &'static str) -> Self {
        Self { path, content }
    }

    /// Path components, for joining onto a platform path
    pub fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}

/// ASP.NET Web API sample: model, EF Core context, CRUD controller, settings, entry point
pub static WEBAPI_SAMPLE: &[TemplateFile] = &[
    TemplateFile::new(
        "Models/SampleItem.cs",
        include_str!("../../templates/webapi/Models/SampleItem.cs"),
    ),
    TemplateFile::new(
        "Data/SampleDbContext.cs",
        include_str!("../../templates/webapi/Data/SampleDbContext.cs"),
    ),
    TemplateFile::new(
        "Controllers/SampleController.cs",
        include_str!("../../templates/webapi/Controllers/SampleController.cs"),
    ),
    TemplateFile::new(
        "appsettings.json",
        include_str!("../../templates/webapi/appsettings.json"),
    ),
    TemplateFile::new(
        "Program.cs",
        include_str!("../../templates/webapi/Program.cs"),
    ),
];

/// Subdirectories the Web API sample expects before its templates are written
pub const WEBAPI_DIRECTORIES: &[&str] = &["Models", "Data", "Controllers"];
