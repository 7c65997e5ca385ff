use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

const INDENT: &[u8] = b"    ";

/// Set the top-level `version` field of a JSON manifest.
///
/// Returns `None` when there is nothing to update: the content does not parse,
/// is not an object, or is an empty object. Key order is preserved and a
/// missing `version` key is appended at the end.
pub fn set_version_field(contents: &str, version: &str) -> Option<String> {
    let mut document: Map<String, Value> = match serde_json::from_str(contents) {
        Ok(Value::Object(map)) if !map.is_empty() => map,
        Ok(_) => return None,
        Err(e) => {
            tracing::debug!(error = %e, "skipping unparsable JSON document");
            return None;
        }
    };

    document.insert("version".to_string(), Value::String(version.to_string()));

    let mut out = Vec::with_capacity(contents.len() + 16);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer).ok()?;

    let mut rendered = String::from_utf8(out).ok()?;
    rendered.push('\n');
    Some(rendered)
}
