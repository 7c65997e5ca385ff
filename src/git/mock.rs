use crate::error::{ReleaseError, Result};
use crate::git::{render_command, CommandRunner};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A single recorded command execution
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    /// The command line as `program arg1 arg2 ...`
    pub fn command(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        render_command(&self.program, &args)
    }
}

#[derive(Debug, Clone)]
enum Response {
    Stdout(String),
    Failure { exit_code: i32, stderr: String },
}

#[derive(Debug, Default)]
struct State {
    responses: HashMap<String, VecDeque<Response>>,
    invocations: Vec<Invocation>,
}

/// Mock runner for testing without spawning processes
///
/// Responses are scripted per rendered command line. Several responses for the
/// same command are returned in order, and the last one keeps being returned
/// once the queue is down to it. Unscripted commands succeed with empty stdout.
#[derive(Debug, Default)]
pub struct MockRunner {
    state: Mutex<State>,
}

impl MockRunner {
    /// Create a mock where every command succeeds silently
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response for `command`
    pub fn on(&self, command: &str, stdout: &str) -> &Self {
        self.push(command, Response::Stdout(stdout.to_string()))
    }

    /// Queue a failing response for `command`
    pub fn fail(&self, command: &str, exit_code: i32, stderr: &str) -> &Self {
        self.push(
            command,
            Response::Failure {
                exit_code,
                stderr: stderr.to_string(),
            },
        )
    }

    fn push(&self, command: &str, response: Response) -> &Self {
        self.lock()
            .responses
            .entry(command.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Everything executed so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.lock().invocations.clone()
    }

    /// Rendered command lines executed so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.lock()
            .invocations
            .iter()
            .map(Invocation::command)
            .collect()
    }

    /// Number of times `command` was executed
    pub fn count(&self, command: &str) -> usize {
        self.commands().iter().filter(|c| *c == command).count()
    }

    pub fn was_called(&self, command: &str) -> bool {
        self.count(command) > 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A panicking test thread must not hide the call log from the others.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        let command = render_command(program, args);
        let mut state = self.lock();
        state.invocations.push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });

        let response = match state.responses.get_mut(&command) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        match response {
            None => Ok(String::new()),
            Some(Response::Stdout(stdout)) => Ok(stdout.trim().to_string()),
            Some(Response::Failure { exit_code, stderr }) => {
                Err(ReleaseError::command_failed(command, exit_code, stderr))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscripted_commands_succeed() {
        let runner = MockRunner::new();
        let out = runner.run("git", &["pull"], Path::new("/repo")).unwrap();
        assert_eq!(out, "");
        assert_eq!(runner.commands(), vec!["git pull"]);
    }

    #[test]
    fn test_responses_are_returned_in_order_and_last_one_sticks() {
        let runner = MockRunner::new();
        runner
            .on("git status --porcelain", "")
            .on("git status --porcelain", " M style.css");

        let cwd = Path::new("/repo");
        let status = |r: &MockRunner| r.run("git", &["status", "--porcelain"], cwd).unwrap();
        assert_eq!(status(&runner), "");
        assert_eq!(status(&runner), "M style.css");
        assert_eq!(status(&runner), "M style.css");
        assert_eq!(runner.count("git status --porcelain"), 3);
    }

    #[test]
    fn test_failure_response() {
        let runner = MockRunner::new();
        runner.fail("git pull", 1, "conflict");

        let err = runner.run("git", &["pull"], Path::new("/repo")).unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::CommandFailed { ref command, exit_code: 1, .. } if command == "git pull"
        ));
    }

    #[test]
    fn test_records_working_directory() {
        let runner = MockRunner::default();
        runner.run("git", &["remote"], Path::new("/a/b")).unwrap();
        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].cwd, PathBuf::from("/a/b"));
        assert!(runner.was_called("git remote"));
        assert!(!runner.was_called("git push --tags"));
    }
}
