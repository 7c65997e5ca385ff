//! Terminal and in-memory renderings of workflow output.

use std::sync::Mutex;

use console::{style, Term};

use super::OutputSink;

/// Styled output on the terminal: progress to stdout, errors to stderr.
#[derive(Debug)]
pub struct ConsoleOutput {
    out: Term,
    err: Term,
}

impl ConsoleOutput {
    pub fn new() -> Self {
        ConsoleOutput {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleOutput {
    fn status(&self, message: &str) {
        let _ = self
            .out
            .write_line(&format!("{} {}", style("→").yellow(), message));
    }

    fn success(&self, message: &str) {
        let _ = self
            .out
            .write_line(&format!("{} {}", style("✓").green(), message));
    }

    fn error(&self, message: &str) {
        let _ = self
            .err
            .write_line(&format!("{} {}", style("ERROR:").red().bold(), message));
    }
}

/// Kind of a captured line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Status,
    Success,
    Error,
}

/// Captures output lines instead of printing them.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    /// True if any captured line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|(_, m)| m.contains(needle))
    }

    fn push(&self, level: Level, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((level, message.to_string()));
    }
}

impl OutputSink for MemoryOutput {
    fn status(&self, message: &str) {
        self.push(Level::Status, message);
    }

    fn success(&self, message: &str) {
        self.push(Level::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}
