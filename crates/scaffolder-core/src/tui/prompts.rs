//! Charm-style CLI prompts using cliclack

use crate::pipeline::{Outcome, PipelineOptions, ScaffoldPipeline};
use crate::product::ProductConfig;
use crate::project::desktop_dir;
use crate::report::ErrorReport;
use crate::runtime::SystemRunner;
use crate::ui::Console;
use colored::Colorize;
use console::{Key, Term};
use std::io;
use std::path::Path;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name to use instead of prompting
    pub name: Option<String>,

    /// Open the editor without asking
    pub yes: bool,

    /// Skip the SDK version check
    pub skip_sdk_check: bool,

    /// Exit without waiting for a keypress
    pub no_pause: bool,
}

/// Terminal console backed by cliclack and console
pub struct TermConsole {
    term: Term,
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn set_title(&mut self, title: &str) {
        self.term.set_title(title);
    }

    fn intro(&mut self, text: &str) {
        let _ = cliclack::intro(text);
    }

    fn info(&mut self, text: &str) {
        let _ = cliclack::log::info(text);
    }

    fn step(&mut self, text: &str) {
        let _ = cliclack::log::step(text);
    }

    fn success(&mut self, text: &str) {
        let _ = cliclack::log::success(text);
    }

    fn warning(&mut self, text: &str) {
        let _ = cliclack::log::warning(text);
    }

    fn failure(&mut self, report: &ErrorReport, log_path: &Path) {
        let _ = cliclack::log::error(report.category.label());
        println!();
        println!("{}", report.message.red());
        println!("{}", report.solution.red());
        println!("{}", report.tip.yellow());
        println!();
        println!(
            "{}",
            "Something went wrong. Details have been saved to 'error.log' on your Desktop."
                .dimmed()
        );
        println!(
            "{} {}",
            "You can find the error log at:".dimmed(),
            log_path.display()
        );
        println!(
            "{}",
            "Review the tip, error, and solution in the log file to see what went wrong."
                .dimmed()
        );
    }

    fn outro(&mut self, text: &str) {
        let _ = cliclack::outro(text);
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        // Empty input must reach the validator, so the prompt does not require a value
        cliclack::input(prompt).required(false).interact()
    }

    fn read_key(&mut self, prompt: &str) -> io::Result<Option<char>> {
        self.term.write_str(&format!("{} ", prompt.cyan()))?;
        let key = self.term.read_key()?;
        let answer = match key {
            Key::Char(c) => Some(c),
            _ => None,
        };
        self.term
            .write_line(&answer.map(String::from).unwrap_or_default())?;
        Ok(answer)
    }

    fn pause(&mut self, prompt: &str) {
        let _ = self.term.write_line(&prompt.dimmed().to_string());
        let _ = self.term.read_key();
    }
}

/// Run the scaffolder with interactive prompts.
///
/// Always waits for a keypress before returning unless `no_pause` is set.
pub fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Outcome {
    let options = PipelineOptions {
        project_name: args.name,
        assume_yes: args.yes,
        check_sdk: !args.skip_sdk_check,
        ..PipelineOptions::default()
    };

    let mut pipeline = ScaffoldPipeline::new(config, SystemRunner, TermConsole::new(), desktop_dir())
        .with_options(options);
    let outcome = pipeline.run();

    let console = pipeline.console();
    if outcome.is_done() {
        console.outro("Happy coding!");
    }
    if !args.no_pause {
        console.pause("Press any key to close the app.");
    }

    outcome
}
