use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use wp_version_control::cli::{run_release_command, ReleaseArgs};
use wp_version_control::git::SystemRunner;
use wp_version_control::logging;
use wp_version_control::ui::{self, ConsoleOutput, OutputSink};

#[derive(clap::Parser)]
#[command(
    name = "wp-version-control",
    about = "Version control helpers for WordPress themes and plugins",
    version
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Log every git command")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Update version number of the project, create a new git tag, and deploy.
    Release {
        #[arg(help = "Release level: major|minor|patch")]
        segment: String,

        #[arg(short, long, help = "Git commit and tag message")]
        message: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::setup(args.verbose)?;

    let output = ConsoleOutput::new();
    let start_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            output.error(&format!("Cannot determine current directory: {}", e));
            std::process::exit(1);
        }
    };

    let code = match args.command {
        Command::Release { segment, message } => {
            let release_args = ReleaseArgs {
                segment,
                message,
                config_path: args.config,
            };
            run_release_command(
                &release_args,
                &SystemRunner::new(),
                &start_dir,
                &output,
                ui::prompt_message_stdin,
            )
        }
    };

    std::process::exit(code);
}
