// tests/config_test.rs
use std::io::Write;
use std::path::Path;

use serial_test::serial;
use tempfile::{NamedTempFile, TempDir};
use wp_version_control::config::{load_config, Config, LOCAL_CONFIG_FILE};
use wp_version_control::{ReleaseError, TargetFile};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
branch = "trunk"

[[files]]
path = "theme.json"
strategy = "json"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.branch, "trunk");
    assert_eq!(config.files, vec![TargetFile::json("theme.json")]);
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some(Path::new("tests/fixtures/release_custom.toml")))
        .expect("Failed to load test config");
    assert_eq!(config.branch, "main");
    assert_eq!(
        config.files,
        vec![TargetFile::json("block.json"), TargetFile::text("{repo}.php")]
    );
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"branch = [unterminated").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path())).unwrap_err();
    assert!(matches!(err, ReleaseError::Config(_)));
}

#[test]
#[serial]
fn test_local_release_toml_is_picked_up() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(LOCAL_CONFIG_FILE), "branch = \"develop\"\n").unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    let config = result.unwrap();
    assert_eq!(config.branch, "develop");
    assert_eq!(config.files, Config::default().files);
}

#[test]
#[serial]
fn test_explicit_path_wins_over_local_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(LOCAL_CONFIG_FILE), "branch = \"develop\"\n").unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "branch = \"release\"\n").unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(Some(&explicit));
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().branch, "release");
}
