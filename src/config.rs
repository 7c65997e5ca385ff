use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::TargetFile;
use crate::error::{ReleaseError, Result};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "release.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE: &str = ".release.toml";

/// Represents the complete configuration for a release.
///
/// Names the branch releases are cut from and the files whose version is rewritten.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_files")]
    pub files: Vec<TargetFile>,
}

/// Returns the default primary branch.
fn default_branch() -> String {
    "master".to_string()
}

/// Returns the default list of target files, in update order.
///
/// Composer and npm manifests, the theme stylesheet and its SCSS source, and
/// the plugin entry file named after the repository directory.
fn default_files() -> Vec<TargetFile> {
    vec![
        TargetFile::json("composer.json"),
        TargetFile::json("package.json"),
        TargetFile::text("style.css"),
        TargetFile::text("src/sass/style.scss"),
        TargetFile::text("{repo}.php"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branch: default_branch(),
            files: default_files(),
        }
    }
}

impl Config {
    /// Parses a configuration document.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ReleaseError::config(e.to_string()))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in the current directory
/// 3. `.release.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or the custom path is missing
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let source = fs::read_to_string(&path).map_err(|e| {
                ReleaseError::config(format!("cannot read {}: {}", path.display(), e))
            })?;
            Config::from_toml(&source)
        }
        None => Ok(Config::default()),
    }
}

fn locate_config(config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}
