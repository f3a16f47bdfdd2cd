//! Presentation seam between the pipeline and the terminal
//!
//! Output methods are best effort and never fail the run. Input methods
//! return I/O errors so an aborted prompt stops the pipeline.

use crate::report::ErrorReport;
use std::io;
use std::path::Path;

pub trait Console {
    /// Set the terminal window title
    fn set_title(&mut self, title: &str);

    fn intro(&mut self, text: &str);

    fn info(&mut self, text: &str);

    /// A new pipeline stage is starting
    fn step(&mut self, text: &str);

    fn success(&mut self, text: &str);

    fn warning(&mut self, text: &str);

    /// Show a classified failure and where it was logged
    fn failure(&mut self, report: &ErrorReport, log_path: &Path);

    fn outro(&mut self, text: &str);

    /// Read one line of text
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Read a single keypress without waiting for Enter.
    /// Non-character keys yield `None`.
    fn read_key(&mut self, prompt: &str) -> io::Result<Option<char>>;

    /// Block until any key is pressed
    fn pause(&mut self, prompt: &str);
}
