pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod files;
pub mod git;
pub mod logging;
pub mod ui;
pub mod workflow;

pub use domain::{ReleaseSegment, TargetFile, UpdateStrategy, Version};
pub use error::{ReleaseError, Result};
pub use workflow::{ReleaseReport, ReleaseWorkflow};
