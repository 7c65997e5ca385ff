//! The release workflow
//!
//! Runs strictly in order: clean check, checkout and pull, current version
//! from tags, version bump, target file rewrites, commit, tag, push.
//! Git failures abort the run. A target file that cannot be rewritten or staged
//! only raises the exit code; the remaining files are still processed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::{ReleaseSegment, TargetFile, UpdateStrategy, Version};
use crate::error::{ReleaseError, Result};
use crate::files;
use crate::git::{CommandRunner, Git};
use crate::ui::OutputSink;

/// Everything a single release run needs, fixed once the root is known.
#[derive(Clone, Copy)]
pub struct ReleaseContext<'a> {
    pub root: &'a Path,
    pub segment: ReleaseSegment,
    pub message: &'a str,
    pub output: &'a dyn OutputSink,
}

/// Outcome of a completed release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    /// Repository root the release ran in
    pub root: PathBuf,
    /// Version read from the latest tag (or `0.0.0`)
    pub previous: Version,
    /// Version that was written and tagged
    pub version: Version,
    /// Number of target files that could not be rewritten or staged
    pub file_failures: i32,
    /// Result of the commit/tag/push step
    pub tag_result: i32,
}

impl ReleaseReport {
    /// 0 for a fully clean release
    pub fn exit_code(&self) -> i32 {
        self.file_failures + self.tag_result
    }
}

pub struct ReleaseWorkflow<'a> {
    runner: &'a dyn CommandRunner,
    config: &'a Config,
}

impl<'a> ReleaseWorkflow<'a> {
    pub fn new(runner: &'a dyn CommandRunner, config: &'a Config) -> Self {
        ReleaseWorkflow { runner, config }
    }

    pub fn run(
        &self,
        segment: ReleaseSegment,
        message: &str,
        start_dir: &Path,
        output: &dyn OutputSink,
    ) -> Result<ReleaseReport> {
        let _span = tracing::info_span!("release", %segment).entered();

        let root = self.resolve_root(start_dir);
        let git = Git::new(self.runner, &root);
        let ctx = ReleaseContext {
            root: &root,
            segment,
            message,
            output,
        };

        if !git.is_clean()? {
            return Err(ReleaseError::NotClean);
        }

        self.synchronize(&git)?;

        let previous = current_version(&git)?;
        let version = previous.bump(ctx.segment)?;
        ctx.output
            .status(&format!("📣 Updating version from {} to {}", previous, version));

        let file_failures: i32 = self
            .config
            .files
            .iter()
            .map(|target| update_target(&ctx, &git, target, &version))
            .sum();

        let tag_result = create_tag(&ctx, &git, &version)?;

        Ok(ReleaseReport {
            root,
            previous,
            version,
            file_failures,
            tag_result,
        })
    }

    fn resolve_root(&self, start_dir: &Path) -> PathBuf {
        match Git::new(self.runner, start_dir).toplevel() {
            Ok(root) if !root.as_os_str().is_empty() => root,
            Ok(_) => start_dir.to_path_buf(),
            Err(e) => {
                tracing::debug!(error = %e, "cannot resolve repository root");
                start_dir.to_path_buf()
            }
        }
    }

    /// Check out the primary branch and pull, leaving the tree clean.
    fn synchronize(&self, git: &Git<'_>) -> Result<()> {
        git.checkout(&self.config.branch)?;

        if git.has_remote()? {
            git.pull()?;
        }

        if !git.is_clean()? {
            return Err(ReleaseError::PullLeftTreeDirty);
        }
        Ok(())
    }
}

/// Version of the nearest reachable tag, or `0.0.0` in an untagged repository.
pub fn current_version(git: &Git<'_>) -> Result<Version> {
    if !git.has_tags()? {
        return Ok(Version::default());
    }
    let tag = git.describe_latest_tag()?;
    tracing::debug!(%tag, "latest tag");
    Ok(Version::parse_lossy(&tag))
}

/// Rewrite and stage one target file. Returns 0 on success or skip, 1 on failure.
fn update_target(
    ctx: &ReleaseContext<'_>,
    git: &Git<'_>,
    target: &TargetFile,
    version: &Version,
) -> i32 {
    let relative = target.relative_path(ctx.root);
    let path = target.resolve(ctx.root);

    if !path.is_file() {
        ctx.output.status(&format!("{} not found", relative));
        return 0;
    }

    let contents = match fs::read(&path) {
        Ok(contents) => contents,
        Err(e) => {
            ctx.output.error(&format!("Cannot read {}: {}", relative, e));
            return 1;
        }
    };

    let Some(updated) = files::render(target.strategy, &contents, version) else {
        tracing::debug!(file = %relative, "nothing to update");
        return 0;
    };

    if target.strategy == UpdateStrategy::Text && !files::text::has_version_header(&contents) {
        tracing::debug!(file = %relative, "no version header, content left as is");
    }

    ctx.output.status(&format!("Processing {}", relative));

    if let Err(e) = fs::write(&path, updated) {
        ctx.output.error(&format!("Cannot write {}: {}", relative, e));
        return 1;
    }

    if let Err(e) = git.add(Path::new(&relative)) {
        ctx.output.error(&format!("Cannot stage {}: {}", relative, e));
        return 1;
    }

    0
}

/// Commit the staged files, tag the commit, and push tags when a remote exists.
fn create_tag(ctx: &ReleaseContext<'_>, git: &Git<'_>, version: &Version) -> Result<i32> {
    ctx.output.status("🎁 Releasing new git tag");

    let tag = version.to_string();
    git.commit(ctx.message)?;
    git.tag_annotated(&tag, ctx.message)?;

    if git.has_remote()? {
        git.push_tags()?;
    }

    ctx.output.success(&format!("Released {}", tag));
    Ok(0)
}
