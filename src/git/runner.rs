use crate::error::{ReleaseError, Result};
use crate::git::{render_command, CommandRunner};
use std::path::Path;
use std::process::Command;

/// Runs commands as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<String> {
        let command = render_command(program, args);
        tracing::debug!(%command, cwd = %cwd.display(), "running");

        let output = Command::new(program).args(args).current_dir(cwd).output()?;

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(%command, exit_code, %stderr, "command failed");
            return Err(ReleaseError::command_failed(command, exit_code, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
