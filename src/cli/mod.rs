//! Command-line glue for the `release` command

pub mod orchestration;

pub use orchestration::{run_release_command, ReleaseArgs};
