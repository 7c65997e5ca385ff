//! Domain logic - pure release rules independent of git operations

pub mod target;
pub mod version;

pub use target::{TargetFile, UpdateStrategy};
pub use version::{ReleaseSegment, Version};
