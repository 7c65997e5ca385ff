use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder replaced by the repository directory name, e.g. `{repo}.php`
pub const REPO_PLACEHOLDER: &str = "{repo}";

/// How the version is written into a target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStrategy {
    /// Set the top-level `version` field of a JSON object
    Json,
    /// Replace the number on a `Version: x.y.z` header line
    Text,
}

/// A file the release rewrites, relative to the repository root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TargetFile {
    pub path: String,
    pub strategy: UpdateStrategy,
}

impl TargetFile {
    pub fn new(path: impl Into<String>, strategy: UpdateStrategy) -> Self {
        TargetFile {
            path: path.into(),
            strategy,
        }
    }

    pub fn json(path: impl Into<String>) -> Self {
        Self::new(path, UpdateStrategy::Json)
    }

    pub fn text(path: impl Into<String>) -> Self {
        Self::new(path, UpdateStrategy::Text)
    }

    /// Path relative to `root` with `{repo}` expanded to the root's directory name
    pub fn relative_path(&self, root: &Path) -> String {
        if !self.path.contains(REPO_PLACEHOLDER) {
            return self.path.clone();
        }
        let repo_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.replace(REPO_PLACEHOLDER, &repo_name)
    }

    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_is_unchanged() {
        let target = TargetFile::json("composer.json");
        assert_eq!(
            target.resolve(Path::new("/srv/my-plugin")),
            PathBuf::from("/srv/my-plugin/composer.json")
        );
    }

    #[test]
    fn test_repo_placeholder_expands_to_directory_name() {
        let target = TargetFile::text("{repo}.php");
        let root = Path::new("/srv/my-plugin");
        assert_eq!(target.relative_path(root), "my-plugin.php");
        assert_eq!(target.resolve(root), PathBuf::from("/srv/my-plugin/my-plugin.php"));
    }

    #[test]
    fn test_strategy_deserializes_lowercase() {
        let target: TargetFile =
            toml::from_str("path = \"style.css\"\nstrategy = \"text\"\n").unwrap();
        assert_eq!(target, TargetFile::text("style.css"));
    }
}
