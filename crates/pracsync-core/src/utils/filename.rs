//! Deterministic file naming.

/// Characters that are not allowed in file names on common filesystems.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Convert a display name to a safe file name component.
///
/// Spaces become underscores, characters invalid on common filesystems are
/// removed, runs of underscores are collapsed and leading/trailing
/// underscores are trimmed.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        let ch = if ch == ' ' { '_' } else { ch };
        if INVALID_CHARS.contains(&ch) {
            continue;
        }
        if ch == '_' && out.ends_with('_') {
            continue;
        }
        out.push(ch);
    }
    out.trim_matches('_').to_string()
}

/// Determine the extension (including the dot) for a file.
///
/// Taken from the declared name when it contains a dot, otherwise from the
/// URL path with any query string removed, otherwise empty.
pub fn file_extension(declared_name: Option<&str>, url: Option<&str>) -> String {
    if let Some(name) = declared_name.filter(|n| n.contains('.')) {
        return suffix(name);
    }
    if let Some(url) = url.filter(|u| u.contains('.')) {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        return suffix(path);
    }
    String::new()
}

/// Suffix of the last path component, `Path::extension` style: a leading
/// dot alone does not start an extension.
fn suffix(path: &str) -> String {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file.rfind('.') {
        Some(0) | None => String::new(),
        Some(idx) if idx + 1 == file.len() => String::new(),
        Some(idx) => file[idx..].to_string(),
    }
}

/// Target file name for one slot of one item:
/// `{sequence:03}_{sanitized item name}_{category}{extension}`.
pub fn target_file_name(sequence: usize, item_name: &str, category: &str, extension: &str) -> String {
    format!(
        "{sequence:03}_{}_{category}{extension}",
        sanitize_filename(item_name)
    )
}
