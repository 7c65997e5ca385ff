//! Version rewriting for target files
//!
//! - `json` - set the `version` field of a JSON manifest
//! - `text` - replace the number on a `Version:` header line

pub mod json;
pub mod text;

use crate::domain::{UpdateStrategy, Version};

/// Render the new content of a target file.
///
/// `None` means the file should be left alone (no write, no staging).
/// JSON manifests must be UTF-8; text files are rewritten as raw bytes.
pub fn render(strategy: UpdateStrategy, contents: &[u8], version: &Version) -> Option<Vec<u8>> {
    let version = version.to_string();
    match strategy {
        UpdateStrategy::Json => {
            let contents = std::str::from_utf8(contents).ok()?;
            json::set_version_field(contents, &version).map(String::into_bytes)
        }
        UpdateStrategy::Text => Some(text::replace_version_header(contents, &version)),
    }
}
