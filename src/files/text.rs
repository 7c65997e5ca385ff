use regex::bytes::{Captures, Regex};
use std::sync::OnceLock;

fn version_header() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?m-u)^(?P<prefix>[ \t/*]*Version:[ \t]*)[0-9]+\.[0-9]+\.[0-9]+(?P<suffix>[ \t]*\r?)$",
        )
        .expect("version header pattern is valid")
    })
}

/// Replace the version number on every `Version: x.y.z` header line.
///
/// Works on raw bytes, so headers in files that are not valid UTF-8 (Latin-1
/// theme stylesheets, for instance) are still rewritten. Leading whitespace and
/// comment markers (`/`, `*`) are allowed before `Version:`, and only ASCII
/// digits form the version. Every other byte is kept; content without a
/// matching line comes back unchanged.
pub fn replace_version_header(contents: &[u8], version: &str) -> Vec<u8> {
    version_header()
        .replace_all(contents, |caps: &Captures<'_>| {
            let mut line = caps["prefix"].to_vec();
            line.extend_from_slice(version.as_bytes());
            line.extend_from_slice(&caps["suffix"]);
            line
        })
        .into_owned()
}

/// Does the content carry at least one version header line?
pub fn has_version_header(contents: &[u8]) -> bool {
    version_header().is_match(contents)
}
