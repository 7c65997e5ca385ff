//! Git operations abstraction layer
//!
//! Every version-control interaction goes through the [CommandRunner] trait,
//! which executes an external program and hands back its trimmed stdout.
//! The concrete implementations are:
//!
//! - [runner::SystemRunner]: spawns real processes with `std::process::Command`
//! - [mock::MockRunner]: scripted responses and a call log, for tests
//!
//! [Git] layers the handful of git commands the release workflow needs on top
//! of a runner and a working directory.
//!
//! ```rust
//! # use wp_version_control::git::{Git, MockRunner};
//! # use std::path::Path;
//! let runner = MockRunner::new();
//! runner.on("git tag --list", "1.0.0\n1.1.0");
//! let git = Git::new(&runner, Path::new("."));
//! assert!(git.has_tags().unwrap());
//! ```

pub mod mock;
pub mod runner;

pub use mock::MockRunner;
pub use runner::SystemRunner;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Executes external commands on behalf of the release workflow.
///
/// ## Error Handling
///
/// A non-zero exit status must be reported as
/// [crate::error::ReleaseError::CommandFailed] carrying the rendered command
/// line and the exit code. A process that cannot be spawned at all maps to
/// [crate::error::ReleaseError::Io].
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `cwd` and return its stdout, trimmed.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String>;
}

/// Render a command line the way it shows up in logs and errors
pub fn render_command(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// The git commands used by a release, bound to one working directory
pub struct Git<'r> {
    runner: &'r dyn CommandRunner,
    cwd: PathBuf,
}

impl<'r> Git<'r> {
    pub fn new(runner: &'r dyn CommandRunner, cwd: impl Into<PathBuf>) -> Self {
        Git {
            runner,
            cwd: cwd.into(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        self.runner.run("git", args, &self.cwd)
    }

    /// Top-level directory of the working tree containing `cwd`
    pub fn toplevel(&self) -> Result<PathBuf> {
        self.git(&["rev-parse", "--show-toplevel"]).map(PathBuf::from)
    }

    /// True when `git status --porcelain` reports nothing
    pub fn is_clean(&self) -> Result<bool> {
        Ok(self.git(&["status", "--porcelain"])?.is_empty())
    }

    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.git(&["checkout", branch]).map(drop)
    }

    pub fn remotes(&self) -> Result<Vec<String>> {
        Ok(self
            .git(&["remote"])?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    pub fn has_remote(&self) -> Result<bool> {
        Ok(!self.remotes()?.is_empty())
    }

    pub fn pull(&self) -> Result<()> {
        self.git(&["pull"]).map(drop)
    }

    pub fn has_tags(&self) -> Result<bool> {
        Ok(!self.git(&["tag", "--list"])?.is_empty())
    }

    /// Nearest tag reachable from HEAD
    pub fn describe_latest_tag(&self) -> Result<String> {
        self.git(&["describe", "--abbrev=0", "--tags"])
    }

    pub fn add(&self, path: &Path) -> Result<()> {
        let path = path.to_string_lossy();
        self.git(&["add", &*path]).map(drop)
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        self.git(&["commit", "--message", message]).map(drop)
    }

    /// Create an annotated tag on HEAD
    pub fn tag_annotated(&self, name: &str, message: &str) -> Result<()> {
        self.git(&["tag", "--annotate", "--message", message, name]).map(drop)
    }

    pub fn push_tags(&self) -> Result<()> {
        self.git(&["push", "--tags"]).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command() {
        assert_eq!(
            render_command("git", &["describe", "--abbrev=0", "--tags"]),
            "git describe --abbrev=0 --tags"
        );
        assert_eq!(render_command("git", &[]), "git");
    }

    #[test]
    fn test_is_clean_reads_porcelain_output() {
        let runner = MockRunner::new();
        let git = Git::new(&runner, "/repo");
        assert!(git.is_clean().unwrap());

        runner.on("git status --porcelain", "?? notes.txt");
        assert!(!git.is_clean().unwrap());
    }

    #[test]
    fn test_remotes_skips_blank_lines() {
        let runner = MockRunner::new();
        runner.on("git remote", "origin\n\nupstream");
        let git = Git::new(&runner, "/repo");
        assert_eq!(git.remotes().unwrap(), vec!["origin", "upstream"]);
        assert!(git.has_remote().unwrap());
    }

    #[test]
    fn test_commit_and_tag_pass_message_as_single_argument() {
        let runner = MockRunner::new();
        let git = Git::new(&runner, "/repo");
        git.commit("fix: quoted \"message\"").unwrap();
        git.tag_annotated("1.0.1", "fix: quoted \"message\"").unwrap();

        let calls = runner.invocations();
        assert_eq!(calls[0].args[2], "fix: quoted \"message\"");
        assert_eq!(
            calls[1].args,
            ["tag", "--annotate", "--message", "fix: quoted \"message\"", "1.0.1"]
        );
    }
}
