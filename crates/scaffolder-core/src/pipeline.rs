//! The scaffolding pipeline
//!
//! Runs strictly forward through [`PipelineState`]: validate the name,
//! generate the base project with the SDK, create directories, overlay the
//! template catalog, install packages one at a time, create and apply the
//! initial migration, then offer to open an editor.
//!
//! Any failure stops the run on the spot. Nothing already created is rolled
//! back; the failure is classified, appended to `error.log` and shown.

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::project::{project_dir, ProjectName};
use crate::report::{ErrorClassifier, ErrorLog, ErrorReport};
use crate::runtime::{execute, CommandStep, ProcessRunner, SdkStatus, ToolManager};
use crate::templates::{create_directories, write_catalog};
use crate::ui::Console;
use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    NameCollected,
    ProjectGenerated,
    DirectoriesCreated,
    TemplatesWritten,
    PackagesInstalled,
    MigrationsApplied,
    Done,
    Failed,
}

/// Opens a folder with the platform handler
pub type FolderOpener = fn(&Path) -> io::Result<()>;

fn open_folder(path: &Path) -> io::Result<()> {
    open::that(path)
}

#[derive(Clone)]
pub struct PipelineOptions {
    /// Use this instead of prompting for the name. It is validated all the same.
    pub project_name: Option<String>,
    /// Open the editor without asking
    pub assume_yes: bool,
    /// Probe the SDK version once the name is accepted
    pub check_sdk: bool,
    /// Fallback when the editor command cannot be run
    pub folder_opener: FolderOpener,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            project_name: None,
            assume_yes: false,
            check_sdk: true,
            folder_opener: open_folder,
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Done { project_dir: PathBuf },
    Failed(ErrorReport),
}

impl Outcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done { .. })
    }
}

pub struct ScaffoldPipeline<'a, C, R, U> {
    config: &'a C,
    runner: R,
    console: U,
    desktop: PathBuf,
    log: ErrorLog,
    classifier: ErrorClassifier,
    options: PipelineOptions,
    states: Vec<PipelineState>,
}

impl<'a, C, R, U> ScaffoldPipeline<'a, C, R, U>
where
    C: ProductConfig,
    R: ProcessRunner,
    U: Console,
{
    /// Projects and `error.log` both go under `desktop`
    pub fn new(config: &'a C, runner: R, console: U, desktop: PathBuf) -> Self {
        Self {
            config,
            runner,
            console,
            log: ErrorLog::in_dir(&desktop),
            classifier: ErrorClassifier::new(config.sdk()),
            desktop,
            options: PipelineOptions::default(),
            states: vec![PipelineState::Idle],
        }
    }

    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Every state entered so far, starting with `Idle`
    pub fn states(&self) -> &[PipelineState] {
        &self.states
    }

    pub fn state(&self) -> PipelineState {
        self.states
            .last()
            .copied()
            .unwrap_or(PipelineState::Idle)
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn console(&mut self) -> &mut U {
        &mut self.console
    }

    pub fn log(&self) -> &ErrorLog {
        &self.log
    }

    pub fn run(&mut self) -> Outcome {
        self.console.set_title(self.config.display_name());
        self.console.intro(&format!(
            "Creating new {} project",
            self.config.display_name()
        ));

        match self.scaffold() {
            Ok(project_dir) => Outcome::Done { project_dir },
            Err(err) => self.fail(err),
        }
    }

    fn scaffold(&mut self) -> Result<PathBuf> {
        let raw = match self.options.project_name.take() {
            Some(name) => name,
            None => match self.console.read_line("Please enter the name of the Project") {
                Ok(line) => line,
                // Closed or interrupted input carries no name; the name gate reports it
                Err(err) if no_input(&err) => String::new(),
                Err(err) => return Err(err).context("Failed to read the project name"),
            },
        };
        let name = ProjectName::parse(&raw)?;
        self.advance(PipelineState::NameCollected);

        if self.options.check_sdk {
            self.preflight();
        }

        let project_dir = project_dir(&self.desktop, &name);
        self.console.step(&format!("Creating project: {}", name));
        let generate = self.config.generate_step(&name, &project_dir);
        self.run_step(&generate)
            .context("Failed to generate the base project")?;
        self.advance(PipelineState::ProjectGenerated);

        create_directories(&project_dir, self.config.directories())
            .context("Failed to create project directories")?;
        self.advance(PipelineState::DirectoriesCreated);

        let written = write_catalog(&project_dir, self.config.catalog())
            .context("Failed to write template files")?;
        self.console
            .success(&format!("Wrote {} template files", written.len()));
        self.advance(PipelineState::TemplatesWritten);

        self.console.step("Installing packages...");
        for package in self.config.packages() {
            let install = self.config.install_step(package, &project_dir);
            self.run_step(&install)
                .with_context(|| format!("Failed to install package {}", package))?;
        }
        self.advance(PipelineState::PackagesInstalled);

        self.console.step("Running database migrations...");
        for migration in self.config.migration_steps(&project_dir) {
            self.run_step(&migration)
                .context("Failed to run database migrations")?;
        }
        self.advance(PipelineState::MigrationsApplied);

        self.console.success(&format!(
            "Project created! You can find it in {}",
            project_dir.display()
        ));
        self.offer_editor(&project_dir);
        self.advance(PipelineState::Done);

        Ok(project_dir)
    }

    fn run_step(&mut self, step: &CommandStep) -> Result<(), ScaffoldError> {
        self.console.info(&format!("Running: {}", step));
        execute(&mut self.runner, step)
    }

    fn preflight(&mut self) {
        let tool = ToolManager::new(self.config.sdk(), self.config.sdk_program());
        let display_name = tool.config().display_name;

        match tool.preflight() {
            SdkStatus::Supported { version } => {
                self.console
                    .success(&format!("{} installed ({})", display_name, version));
            }
            SdkStatus::Outdated { warning, .. } => self.console.warning(&warning),
            SdkStatus::Missing => self.console.warning(&format!(
                "{} was not detected. Download it from {}",
                display_name,
                tool.config().download_url
            )),
        }
    }

    /// Editor problems are reported but never fail a finished project
    fn offer_editor(&mut self, project_dir: &Path) {
        let wanted = if self.options.assume_yes {
            true
        } else {
            match self.console.read_key("Open the project folder now? (Y/N)") {
                Ok(key) => key.is_some_and(|c| c.eq_ignore_ascii_case(&'y')),
                Err(err) => {
                    tracing::warn!(error = %err, "could not read confirmation key");
                    false
                }
            }
        };
        if !wanted {
            return;
        }

        let editor = self.config.editor_step(project_dir);
        self.console.info(&format!("Running: {}", editor));
        if let Err(err) = execute(&mut self.runner, &editor) {
            tracing::debug!(error = %err, "editor launch failed, opening folder instead");
            if let Err(open_err) = (self.options.folder_opener)(project_dir) {
                self.console.warning(&format!(
                    "Could not open {}: {}",
                    project_dir.display(),
                    open_err
                ));
            }
        }
    }

    fn fail(&mut self, err: anyhow::Error) -> Outcome {
        self.advance(PipelineState::Failed);

        let report = self.classifier.classify(&err);
        let detail = format!("{:#}", err);
        tracing::debug!(category = %report.category, error = %detail, "pipeline failed");

        self.log.append(&report);
        self.console.failure(&report, self.log.path());

        Outcome::Failed(report)
    }

    fn advance(&mut self, next: PipelineState) {
        tracing::debug!(from = ?self.state(), to = ?next, "pipeline state");
        self.states.push(next);
    }
}

fn no_input(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Category;
    use crate::runtime::{ExitStatus, StepKind, ToolConfig};
    use crate::templates::{TemplateFile, WEBAPI_DIRECTORIES, WEBAPI_SAMPLE};
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "webapi-test"
        }

        fn display_name(&self) -> &'static str {
            "WEBAPI Sample"
        }

        fn cli_description(&self) -> &'static str {
            "test product"
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
            "SCAFFOLDER_CORE_TEST_SDK"
        }

        fn directories(&self) -> &'static [&'static str] {
            WEBAPI_DIRECTORIES
        }

        fn catalog(&self) -> &'static [TemplateFile] {
            WEBAPI_SAMPLE
        }

        fn packages(&self) -> &'static [&'static str] {
            &["Pkg.One", "Pkg.Two", "Pkg.Three", "Pkg.Four"]
        }

        fn generate_step(&self, name: &ProjectName, project_dir: &Path) -> CommandStep {
            CommandStep::new(
                StepKind::Generate,
                "dotnet",
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
            CommandStep::new(StepKind::InstallPackage, "dotnet", ["add", "package", package])
                .in_dir(project_dir)
        }

        fn migration_steps(&self, project_dir: &Path) -> [CommandStep; 2] {
            [
                CommandStep::new(
                    StepKind::MigrationAdd,
                    "dotnet",
                    ["ef", "migrations", "add", "InitialCreate"],
                )
                .in_dir(project_dir),
                CommandStep::new(StepKind::MigrationApply, "dotnet", ["ef", "database", "update"])
                    .in_dir(project_dir),
            ]
        }

        fn editor_step(&self, project_dir: &Path) -> CommandStep {
            CommandStep::new(StepKind::LaunchEditor, "code", ["."]).in_dir(project_dir)
        }
    }

    enum Failure {
        Exit(i32),
        Spawn(io::ErrorKind),
    }

    /// Records every step and fails the first one of `fail_kind`
    #[derive(Default)]
    struct RecordingRunner {
        calls: Vec<CommandStep>,
        fail_at: Option<(StepKind, Failure)>,
    }

    impl RecordingRunner {
        fn failing(kind: StepKind, failure: Failure) -> Self {
            Self {
                calls: Vec::new(),
                fail_at: Some((kind, failure)),
            }
        }

        fn kinds(&self) -> Vec<StepKind> {
            self.calls.iter().map(|c| c.kind).collect()
        }
    }

    impl ProcessRunner for RecordingRunner {
        fn run(&mut self, step: &CommandStep) -> io::Result<ExitStatus> {
            self.calls.push(step.clone());
            match &self.fail_at {
                Some((kind, Failure::Exit(code))) if *kind == step.kind => {
                    Ok(ExitStatus::from_code(*code))
                }
                Some((kind, Failure::Spawn(err))) if *kind == step.kind => {
                    Err(io::Error::new(*err, "injected"))
                }
                _ => Ok(ExitStatus::from_code(0)),
            }
        }
    }

    #[derive(Default)]
    struct ScriptedConsole {
        lines: VecDeque<String>,
        keys: VecDeque<char>,
        output: Vec<String>,
        failures: Vec<ErrorReport>,
        title: Option<String>,
        exhausted: Option<io::ErrorKind>,
    }

    impl ScriptedConsole {
        fn answering(name: &str, key: char) -> Self {
            Self {
                lines: VecDeque::from([name.to_string()]),
                keys: VecDeque::from([key]),
                ..Self::default()
            }
        }
    }

    impl Console for ScriptedConsole {
        fn set_title(&mut self, title: &str) {
            self.title = Some(title.to_string());
        }
        fn intro(&mut self, text: &str) {
            self.output.push(text.to_string());
        }
        fn info(&mut self, text: &str) {
            self.output.push(text.to_string());
        }
        fn step(&mut self, text: &str) {
            self.output.push(text.to_string());
        }
        fn success(&mut self, text: &str) {
            self.output.push(text.to_string());
        }
        fn warning(&mut self, text: &str) {
            self.output.push(text.to_string());
        }
        fn failure(&mut self, report: &ErrorReport, _log_path: &Path) {
            self.output.push(report.tip.clone());
            self.failures.push(report.clone());
        }
        fn outro(&mut self, text: &str) {
            self.output.push(text.to_string());
        }
        fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
            let kind = self.exhausted.unwrap_or(io::ErrorKind::UnexpectedEof);
            self.lines
                .pop_front()
                .ok_or_else(|| io::Error::new(kind, "no input"))
        }
        fn read_key(&mut self, _prompt: &str) -> io::Result<Option<char>> {
            Ok(self.keys.pop_front())
        }
        fn pause(&mut self, _prompt: &str) {}
    }

    /// Discards output and answers nothing
    struct NullConsole;

    impl Console for NullConsole {
        fn set_title(&mut self, _title: &str) {}
        fn intro(&mut self, _text: &str) {}
        fn info(&mut self, _text: &str) {}
        fn step(&mut self, _text: &str) {}
        fn success(&mut self, _text: &str) {}
        fn warning(&mut self, _text: &str) {}
        fn failure(&mut self, _report: &ErrorReport, _log_path: &Path) {}
        fn outro(&mut self, _text: &str) {}
        fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
            Ok(String::new())
        }
        fn read_key(&mut self, _prompt: &str) -> io::Result<Option<char>> {
            Ok(None)
        }
        fn pause(&mut self, _prompt: &str) {}
    }

    fn no_sdk_check() -> PipelineOptions {
        PipelineOptions {
            check_sdk: false,
            folder_opener: |_| Err(io::Error::other("no opener in tests")),
            ..PipelineOptions::default()
        }
    }

    fn pipeline<R: ProcessRunner, U: Console>(
        desktop: &TempDir,
        runner: R,
        console: U,
    ) -> ScaffoldPipeline<'static, TestProduct, R, U> {
        ScaffoldPipeline::new(&TestProduct, runner, console, desktop.path().to_path_buf())
            .with_options(no_sdk_check())
    }

    fn desktop_entries(desktop: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(desktop.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_invalid_name_is_rejected_before_any_side_effect() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(
            &desktop,
            RecordingRunner::default(),
            ScriptedConsole::answering("bad:name", 'n'),
        );

        let outcome = p.run();

        match outcome {
            Outcome::Failed(report) => {
                assert_eq!(report.category, Category::InvalidName);
                assert!(report.tip.contains(": ? * < > | \" \\ /"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(p.states(), &[PipelineState::Idle, PipelineState::Failed]);
        assert!(p.runner().calls.is_empty());
        assert_eq!(desktop_entries(&desktop), vec!["error.log".to_string()]);

        let log = fs::read_to_string(p.log().path()).unwrap();
        assert!(log.contains("Tip: Avoid using invalid characters"));
        assert!(log.contains("Solution: Use only letters"));
        assert_eq!(p.console().failures.len(), 1);
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(
            &desktop,
            RecordingRunner::default(),
            ScriptedConsole::answering("   ", 'n'),
        );

        assert!(!p.run().is_done());
        assert!(p.runner().calls.is_empty());
        assert_eq!(p.state(), PipelineState::Failed);
    }

    #[test]
    fn test_demo_runs_every_state_and_writes_templates() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(
            &desktop,
            RecordingRunner::default(),
            ScriptedConsole::answering("  Demo ", 'n'),
        );

        let outcome = p.run();

        let project = desktop.path().join("Demo");
        match outcome {
            Outcome::Done { project_dir } => assert_eq!(project_dir, project),
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(
            p.states(),
            &[
                PipelineState::Idle,
                PipelineState::NameCollected,
                PipelineState::ProjectGenerated,
                PipelineState::DirectoriesCreated,
                PipelineState::TemplatesWritten,
                PipelineState::PackagesInstalled,
                PipelineState::MigrationsApplied,
                PipelineState::Done,
            ]
        );

        for file in WEBAPI_SAMPLE {
            let written = fs::read_to_string(project.join(file.path)).unwrap();
            assert_eq!(written, file.content, "{}", file.path);
        }
        assert!(!desktop.path().join("error.log").exists());
        assert_eq!(p.console().title.as_deref(), Some("WEBAPI Sample"));
    }

    #[test]
    fn test_command_steps_run_in_fixed_order() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(
            &desktop,
            RecordingRunner::default(),
            ScriptedConsole::answering("Demo", 'N'),
        );

        assert!(p.run().is_done());

        use StepKind::*;
        assert_eq!(
            p.runner().kinds(),
            vec![
                Generate,
                InstallPackage,
                InstallPackage,
                InstallPackage,
                InstallPackage,
                MigrationAdd,
                MigrationApply,
            ]
        );

        let calls = &p.runner().calls;
        let project = desktop.path().join("Demo");
        assert_eq!(calls[0].workdir, None);
        assert!(calls[0].args.contains(&project.display().to_string()));
        let packages: Vec<&str> = calls[1..5].iter().map(|c| c.args[2].as_str()).collect();
        assert_eq!(packages, vec!["Pkg.One", "Pkg.Two", "Pkg.Three", "Pkg.Four"]);
        for call in &calls[1..] {
            assert_eq!(call.workdir.as_deref(), Some(project.as_path()));
        }
    }

    #[test]
    fn test_failed_migration_add_skips_migration_apply() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(
            &desktop,
            RecordingRunner::failing(StepKind::MigrationAdd, Failure::Exit(1)),
            ScriptedConsole::answering("Demo", 'y'),
        );

        let outcome = p.run();

        match outcome {
            Outcome::Failed(report) => assert_eq!(report.category, Category::ToolExit),
            other => panic!("expected failure, got {other:?}"),
        }
        let kinds = p.runner().kinds();
        assert_eq!(kinds.last(), Some(&StepKind::MigrationAdd));
        assert!(!kinds.contains(&StepKind::MigrationApply));
        assert!(!kinds.contains(&StepKind::LaunchEditor));
        assert_eq!(
            &p.states()[p.states().len() - 2..],
            &[PipelineState::PackagesInstalled, PipelineState::Failed]
        );

        // No rollback: the overlay stays on disk
        assert!(desktop.path().join("Demo").join("Program.cs").exists());
        let log = fs::read_to_string(p.log().path()).unwrap();
        assert!(log.contains("StackTrace:"));
        assert!(log.contains("dotnet ef migrations add InitialCreate"));
    }

    #[test]
    fn test_failed_install_stops_remaining_installs() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(
            &desktop,
            RecordingRunner::failing(StepKind::InstallPackage, Failure::Exit(2)),
            ScriptedConsole::answering("Demo", 'n'),
        );

        assert!(!p.run().is_done());
        assert_eq!(
            p.runner().kinds(),
            vec![StepKind::Generate, StepKind::InstallPackage]
        );
    }

    #[test]
    fn test_missing_sdk_fails_generation_as_tool_not_found() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(
            &desktop,
            RecordingRunner::failing(StepKind::Generate, Failure::Spawn(io::ErrorKind::NotFound)),
            ScriptedConsole::answering("Demo", 'n'),
        );

        match p.run() {
            Outcome::Failed(report) => {
                assert_eq!(report.category, Category::ToolNotFound);
                assert!(report.tip.contains("dotnet.microsoft.com"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(
            p.states(),
            &[
                PipelineState::Idle,
                PipelineState::NameCollected,
                PipelineState::Failed
            ]
        );
        assert!(!desktop.path().join("Demo").exists());
    }

    #[test]
    fn test_unwritable_log_does_not_escape_the_pipeline() {
        let tmp = TempDir::new().unwrap();
        let desktop = tmp.path().join("no-such-desktop");
        let mut p = ScaffoldPipeline::new(
            &TestProduct,
            RecordingRunner::failing(StepKind::Generate, Failure::Exit(1)),
            NullConsole,
            desktop.clone(),
        )
        .with_options(PipelineOptions {
            project_name: Some("Demo".to_string()),
            ..no_sdk_check()
        });

        let outcome = p.run();

        assert!(matches!(outcome, Outcome::Failed(_)));
        assert!(!p.log().path().exists());
    }

    #[test]
    fn test_preset_name_skips_prompt_and_is_validated() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(&desktop, RecordingRunner::default(), NullConsole).with_options(
            PipelineOptions {
                project_name: Some("a/b".to_string()),
                ..no_sdk_check()
            },
        );

        match p.run() {
            Outcome::Failed(report) => assert_eq!(report.category, Category::InvalidName),
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(p.runner().calls.is_empty());
    }

    #[test]
    fn test_confirming_launches_editor_in_project_dir() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(
            &desktop,
            RecordingRunner::default(),
            ScriptedConsole::answering("Demo", 'Y'),
        );

        assert!(p.run().is_done());

        let editor = p.runner().calls.last().unwrap();
        assert_eq!(editor.kind, StepKind::LaunchEditor);
        assert_eq!(editor.command_line(), "code .");
        assert_eq!(editor.workdir, Some(desktop.path().join("Demo")));
    }

    #[test]
    fn test_editor_failure_keeps_done() {
        let desktop = TempDir::new().unwrap();
        let mut p = pipeline(
            &desktop,
            RecordingRunner::failing(StepKind::LaunchEditor, Failure::Spawn(io::ErrorKind::NotFound)),
            ScriptedConsole::default(),
        )
        .with_options(PipelineOptions {
            project_name: Some("Demo".to_string()),
            assume_yes: true,
            ..no_sdk_check()
        });

        assert!(p.run().is_done());
        assert_eq!(p.state(), PipelineState::Done);
        assert!(p
            .console()
            .output
            .iter()
            .any(|line| line.starts_with("Could not open")));
        assert!(!desktop.path().join("error.log").exists());
    }

    #[test]
    fn test_closed_input_is_an_invalid_name() {
        for kind in [io::ErrorKind::UnexpectedEof, io::ErrorKind::Interrupted] {
            let desktop = TempDir::new().unwrap();
            let console = ScriptedConsole {
                exhausted: Some(kind),
                ..ScriptedConsole::default()
            };
            let mut p = pipeline(&desktop, RecordingRunner::default(), console);

            match p.run() {
                Outcome::Failed(report) => {
                    assert_eq!(report.category, Category::InvalidName, "{kind:?}")
                }
                other => panic!("expected failure, got {other:?}"),
            }
            assert_eq!(p.states(), &[PipelineState::Idle, PipelineState::Failed]);
            assert!(p.runner().calls.is_empty());
        }
    }

    #[test]
    fn test_broken_input_is_not_a_name_error() {
        let desktop = TempDir::new().unwrap();
        let console = ScriptedConsole {
            exhausted: Some(io::ErrorKind::BrokenPipe),
            ..ScriptedConsole::default()
        };
        let mut p = pipeline(&desktop, RecordingRunner::default(), console);

        match p.run() {
            Outcome::Failed(report) => {
                assert_ne!(report.category, Category::InvalidName);
                assert!(report.context.contains("Failed to read the project name"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(p.runner().calls.is_empty());
    }

    #[test]
    fn test_dot_names_never_leave_the_desktop() {
        for name in ["..", "."] {
            let root = TempDir::new().unwrap();
            let desktop = root.path().join("Desktop");
            fs::create_dir(&desktop).unwrap();
            let mut p = ScaffoldPipeline::new(
                &TestProduct,
                RecordingRunner::default(),
                ScriptedConsole::answering(name, 'y'),
                desktop.clone(),
            )
            .with_options(no_sdk_check());

            match p.run() {
                Outcome::Failed(report) => assert_eq!(report.category, Category::InvalidName),
                other => panic!("expected failure for {name:?}, got {other:?}"),
            }
            assert!(p.runner().calls.is_empty());

            let mut outside: Vec<String> = fs::read_dir(root.path())
                .unwrap()
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect();
            outside.sort();
            assert_eq!(outside, vec!["Desktop".to_string()]);
            let inside: Vec<String> = fs::read_dir(&desktop)
                .unwrap()
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect();
            assert_eq!(inside, vec!["error.log".to_string()]);
        }
    }
}
