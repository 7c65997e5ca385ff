//! User interface module - output sinks and the message prompt.
//!
//! Separates concerns:
//! - `formatter` - Terminal and in-memory sinks
//! - This module - The sink trait and interactive input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

pub use formatter::{ConsoleOutput, Level, MemoryOutput};

/// Where the release workflow reports progress.
///
/// One line per call; implementations add their own decoration.
pub trait OutputSink: Send + Sync {
    /// Progress and informational lines
    fn status(&self, message: &str);

    /// Completion of a step
    fn success(&self, message: &str);

    /// Clearly marked failures
    fn error(&self, message: &str);
}

/// Prompts for the commit and tag message.
///
/// Reads one line from `input` after printing the prompt to `output`. An
/// empty answer is returned as an empty string; git rejects it later.
///
/// # Arguments
/// * `input` - Where the answer is read from (stdin in the binary)
/// * `output` - Where the prompt is written (stdout in the binary)
pub fn prompt_message<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Git commit and tag message: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// [`prompt_message`] on the process's stdin and stdout
pub fn prompt_message_stdin() -> Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    prompt_message(&mut input, &mut io::stdout())
}
