//! webapi-create - Scaffolds an ASP.NET Web API sample project on the Desktop

use clap::Parser;
use scaffolder_core::project::ProjectName;
use scaffolder_core::runtime::{CommandStep, StepKind, ToolConfig};
use scaffolder_core::templates::{TemplateFile, WEBAPI_DIRECTORIES, WEBAPI_SAMPLE};
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{Outcome, ProductConfig};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// NuGet packages installed into every generated project, in install order
const PACKAGES: &[&str] = &[
    "Microsoft.EntityFrameworkCore.Sqlite",
    "Microsoft.EntityFrameworkCore.Tools",
    "Microsoft.EntityFrameworkCore.Design",
    "Swashbuckle.AspNetCore",
];

const MIGRATION_NAME: &str = "InitialCreate";

/// ASP.NET Web API product configuration
#[derive(Clone)]
pub struct WebApiConfig;

impl ProductConfig for WebApiConfig {
    fn name(&self) -> &'static str {
        "webapi-create"
    }

    fn display_name(&self) -> &'static str {
        "WEBAPI Sample"
    }

    fn cli_description(&self) -> &'static str {
        "Create an ASP.NET Web API project with EF Core, SQLite and Swagger on your Desktop"
    }

    fn sdk(&self) -> ToolConfig {
        ToolConfig {
            name: "dotnet",
            display_name: ".NET SDK",
            download_url: "https://dotnet.microsoft.com/en-us/download/dotnet/9.0",
            min_version: "9.0.0",
        }
    }

    fn sdk_program_env(&self) -> &'static str {
        "WEBAPI_DOTNET"
    }

    fn directories(&self) -> &'static [&'static str] {
        WEBAPI_DIRECTORIES
    }

    fn catalog(&self) -> &'static [TemplateFile] {
        WEBAPI_SAMPLE
    }

    fn packages(&self) -> &'static [&'static str] {
        PACKAGES
    }

    fn generate_step(&self, name: &ProjectName, project_dir: &Path) -> CommandStep {
        CommandStep::new(
            StepKind::Generate,
            self.sdk_program(),
            [
                "new".to_string(),
                "webapi".to_string(),
                "-n".to_string(),
                name.to_string(),
                "-o".to_string(),
                project_dir.display().to_string(),
            ],
        )
    }

    fn install_step(&self, package: &str, project_dir: &Path) -> CommandStep {
        CommandStep::new(
            StepKind::InstallPackage,
            self.sdk_program(),
            ["add", "package", package],
        )
        .in_dir(project_dir)
    }

    fn migration_steps(&self, project_dir: &Path) -> [CommandStep; 2] {
        [
            CommandStep::new(
                StepKind::MigrationAdd,
                self.sdk_program(),
                ["ef", "migrations", "add", MIGRATION_NAME],
            )
            .in_dir(project_dir),
            CommandStep::new(
                StepKind::MigrationApply,
                self.sdk_program(),
                ["ef", "database", "update"],
            )
            .in_dir(project_dir),
        ]
    }

    fn editor_step(&self, project_dir: &Path) -> CommandStep {
        // The Windows launcher is code.cmd, which only the shell resolves
        #[cfg(windows)]
        let step = CommandStep::new(StepKind::LaunchEditor, "cmd", ["/C", "code", "."]);
        #[cfg(not(windows))]
        let step = CommandStep::new(StepKind::LaunchEditor, "code", ["."]);
        step.in_dir(project_dir)
    }
}

#[derive(Parser, Debug)]
#[command(name = "webapi-create")]
#[command(about = "Create an ASP.NET Web API project with EF Core, SQLite and Swagger on your Desktop")]
#[command(version)]
pub struct Args {
    /// Project name (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Open the project in the editor without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Skip the .NET SDK version check
    #[arg(long = "skip-sdk-check")]
    pub skip_sdk_check: bool,

    /// Exit without waiting for a keypress
    #[arg(long = "no-pause")]
    pub no_pause: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            yes: args.yes,
            skip_sdk_check: args.skip_sdk_check,
            no_pause: args.no_pause,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_tracing();

    let args = Args::parse();
    let outcome = scaffolder_core::run(&WebApiConfig, args.into());

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match outcome {
        Outcome::Done { project_dir } => {
            tracing::debug!(project = %project_dir.display(), "scaffolding finished");
            ExitCode::SUCCESS
        }
        Outcome::Failed(report) => {
            tracing::debug!(category = %report.category, "scaffolding failed");
            ExitCode::FAILURE
        }
    }
}
