//! File reference extraction from raw slot values.
//!
//! A file column holds JSON such as
//! `{"files": [{"name": "calm.mp3", "assetId": 123, ...}]}`. Only the first
//! entry is used; any further files in the same slot are ignored.

use pracsync_core::FileDescriptor;
use serde_json::Value;

/// Literal the API uses for an empty column value.
const NULL_MARKER: &str = "null";

/// Parse a raw slot value into a file descriptor.
///
/// Never fails: empty input, the null marker, malformed JSON, a missing or
/// empty `files` collection, or a first entry with neither a usable `url`
/// nor `assetId` all yield `None`. A `url` wins over an `assetId` when both
/// are present.
pub fn extract_file(raw: &str) -> Option<FileDescriptor> {
    let raw = raw.trim();
    if raw.is_empty() || raw == NULL_MARKER {
        return None;
    }

    let value: Value = serde_json::from_str(raw).ok()?;
    // TODO: surface ignored extra files in the report instead of dropping them silently.
    let first = value.get("files")?.as_array()?.first()?;

    let declared_name = first
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .map(String::from);

    if let Some(url) = first.get("url").and_then(Value::as_str).filter(|u| !u.is_empty()) {
        return Some(FileDescriptor::url(url, declared_name));
    }

    parse_asset_id(first.get("assetId")?).map(|id| FileDescriptor::asset(id, declared_name))
}

/// Asset ids arrive as numbers or numeric strings depending on API version.
fn parse_asset_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
