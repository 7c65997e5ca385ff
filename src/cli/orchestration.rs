//! Release command orchestration
//!
//! Glue between parsed command-line arguments and [ReleaseWorkflow]: validates
//! the segment, loads configuration, obtains the message, runs the workflow
//! and turns the outcome into a process exit code.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config;
use crate::domain::ReleaseSegment;
use crate::git::CommandRunner;
use crate::ui::OutputSink;
use crate::workflow::ReleaseWorkflow;

/// Arguments for the release command
///
/// Mirrors the CLI arguments but in a format suitable for orchestration logic.
/// This decoupling allows the command to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseArgs {
    /// Requested segment, validated before anything else happens
    pub segment: String,

    /// Commit and tag message; prompted for when absent
    pub message: Option<String>,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,
}

/// Run the release command and return the process exit code.
///
/// 0 means a fully clean release; every failure maps to 1 after being
/// reported through `output`. `prompt` is only called when no message was given.
pub fn run_release_command<P>(
    args: &ReleaseArgs,
    runner: &dyn CommandRunner,
    start_dir: &Path,
    output: &dyn OutputSink,
    prompt: P,
) -> i32
where
    P: FnOnce() -> Result<String>,
{
    match execute(args, runner, start_dir, output, prompt) {
        Ok(0) => 0,
        Ok(code) => {
            tracing::debug!(code, "release finished with failures");
            1
        }
        Err(e) => {
            output.error(&format!("⚠️  {:#}", e));
            1
        }
    }
}

fn execute<P>(
    args: &ReleaseArgs,
    runner: &dyn CommandRunner,
    start_dir: &Path,
    output: &dyn OutputSink,
    prompt: P,
) -> Result<i32>
where
    P: FnOnce() -> Result<String>,
{
    let segment: ReleaseSegment = args.segment.parse()?;
    let config = config::load_config(args.config_path.as_deref())?;

    let message = match args.message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => prompt()?,
    };

    let workflow = ReleaseWorkflow::new(runner, &config);
    let report = workflow.run(segment, &message, start_dir, output)?;
    Ok(report.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRunner;
    use crate::ui::{Level, MemoryOutput};

    #[test]
    fn test_invalid_segment_exits_one_without_commands() {
        let runner = MockRunner::new();
        let output = MemoryOutput::new();
        let args = ReleaseArgs {
            segment: "huge".to_string(),
            message: Some("msg".to_string()),
            config_path: None,
        };

        let code = run_release_command(&args, &runner, Path::new("/repo"), &output, || {
            panic!("must not prompt")
        });

        assert_eq!(code, 1);
        assert!(runner.commands().is_empty());
        assert_eq!(
            output.messages(Level::Error),
            vec!["⚠️  huge is not one of major|minor|patch."]
        );
    }

    #[test]
    fn test_dirty_tree_exits_one() {
        let runner = MockRunner::new();
        runner.on("git status --porcelain", " M style.css");
        let output = MemoryOutput::new();
        let args = ReleaseArgs {
            segment: "patch".to_string(),
            message: Some("msg".to_string()),
            config_path: None,
        };

        let code = run_release_command(&args, &runner, Path::new("/repo"), &output, || {
            Ok(String::new())
        });

        assert_eq!(code, 1);
        assert!(output.contains("Git isn't clean."));
    }
}
