use thiserror::Error;

/// Unified error type for release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Git isn't clean.")]
    NotClean,

    #[error("Git pull resulted in a non-clean status.")]
    PullLeftTreeDirty,

    #[error("{0} is not one of major|minor|patch.")]
    InvalidSegment(String),

    #[error("Cannot bump {segment} of {version}")]
    VersionOverflow { version: String, segment: String },

    #[error("`{}` returned non-zero exit code {}{}", .command, .exit_code, format_stderr(.stderr))]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Convenience type alias for Results in wp-version-control
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create an invalid segment error naming the rejected input
    pub fn invalid_segment(segment: impl Into<String>) -> Self {
        ReleaseError::InvalidSegment(segment.into())
    }

    /// Create a command failure from the rendered command line and its exit status
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        ReleaseError::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}
