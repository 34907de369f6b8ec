//! Declared-path helpers.
//!
//! Header paths may use `/` or `\` as directory delimiters. These functions
//! rewrite them to the canonical separator and pull out the directory and
//! base-name parts without touching the filesystem.

/// The separator every declared path is normalized to.
pub const CANONICAL_SEPARATOR: char = '\\';

/// Rewrite every `/` in `path` to the canonical separator.
pub fn normalize(path: &str) -> String {
    path.replace('/', &CANONICAL_SEPARATOR.to_string())
}

/// Directory part of `path`, or `""` when it has none.
///
/// A separator at index 0 is ignored, so `/file.txt` has no directory.
pub fn directory_of(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rfind(CANONICAL_SEPARATOR) {
        Some(index) if index > 0 => normalized[..index].to_string(),
        _ => String::new(),
    }
}

/// File-name part of `path`.
///
/// Returns the whole normalized path when there is no separator, or when the
/// path ends with one.
pub fn base_name_of(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rfind(CANONICAL_SEPARATOR) {
        Some(index) if index + CANONICAL_SEPARATOR.len_utf8() < normalized.len() => {
            normalized[index + CANONICAL_SEPARATOR.len_utf8()..].to_string()
        }
        _ => normalized,
    }
}

/// Directory segments to create, in order, for `path`.
///
/// Empty segments (from doubled or leading separators) are dropped.
pub fn directory_segments(path: &str) -> Vec<String> {
    directory_of(path)
        .split(CANONICAL_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
