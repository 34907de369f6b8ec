//! Writing split files to disk.
//!
//! Each declared path is mapped under a destination root using the
//! directory segments and base name from [`crate::path`]. A file that cannot
//! be written is recorded in the report and the remaining files are still
//! processed; nothing already written is removed.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::{matches_any, Config};
use crate::error::{Result, SplitError};
use crate::path::{base_name_of, directory_segments, CANONICAL_SEPARATOR};
use crate::splitter::ParsedFile;

/// Options controlling how files are written.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Replace files that already exist.
    pub overwrite: bool,
    /// Compute targets without touching the filesystem.
    pub dry_run: bool,
    /// Declared-path patterns to skip.
    pub excludes: Vec<String>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            dry_run: false,
            excludes: vec![],
        }
    }
}

impl From<&Config> for WriteOptions {
    fn from(config: &Config) -> Self {
        Self {
            overwrite: config.overwrite,
            dry_run: false,
            excludes: config.excludes.clone(),
        }
    }
}

/// Why a file was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The target exists and overwriting is disabled.
    Exists,
    /// The declared path matches an exclude pattern.
    Excluded,
}

/// A file that was written (or would be, in a dry run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: String,
    pub target: PathBuf,
}

/// A file that was deliberately left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub path: String,
    pub target: Option<PathBuf>,
    pub reason: SkipReason,
}

/// A file that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub path: String,
    pub target: Option<PathBuf>,
    pub message: String,
}

/// Outcome of writing a batch of files.
#[derive(Debug, Clone, Default)]
pub struct WriteReport {
    pub written: Vec<Written>,
    pub skipped: Vec<Skipped>,
    pub failed: Vec<WriteFailure>,
}

impl WriteReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Map a declared path to its location under `root`.
///
/// Returns `None` when any segment or the file name is not a single plain
/// path component (`.`, `..`, a drive like `C:`, a root), since pushing it
/// could leave `root`.
pub fn target_for(root: &Path, declared: &str) -> Option<PathBuf> {
    let segments = directory_segments(declared);
    let name = base_name_of(declared);

    if name.ends_with(CANONICAL_SEPARATOR) {
        return None;
    }
    if !segments.iter().chain(Some(&name)).all(|s| is_plain_component(s)) {
        return None;
    }

    let mut target = root.to_path_buf();
    for segment in &segments {
        target.push(segment);
    }
    target.push(name);
    Some(target)
}

/// True when `segment` parses as exactly one normal component.
///
/// `:` is refused on every platform so a `C:` segment is rejected the same
/// way on Unix as on Windows, where it would be a drive prefix.
fn is_plain_component(segment: &str) -> bool {
    if segment.contains(':') {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Write every file under `root`.
///
/// Fails only when `root` itself cannot be created; per-file problems are
/// collected in the returned report.
pub fn write_files(
    files: &[ParsedFile],
    root: &Path,
    options: &WriteOptions,
) -> Result<WriteReport> {
    if !options.dry_run && !root.exists() {
        fs::create_dir_all(root).map_err(|e| SplitError::Io {
            path: root.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut report = WriteReport::default();

    for file in files {
        let target = target_for(root, &file.path);

        if matches_any(&options.excludes, &file.path) {
            report.skipped.push(Skipped {
                path: file.path.clone(),
                target,
                reason: SkipReason::Excluded,
            });
            continue;
        }

        let Some(target) = target else {
            report.failed.push(WriteFailure {
                path: file.path.clone(),
                target: None,
                message: "path does not name a file inside the output directory".to_string(),
            });
            continue;
        };

        if !options.overwrite && target.exists() {
            report.skipped.push(Skipped {
                path: file.path.clone(),
                target: Some(target),
                reason: SkipReason::Exists,
            });
            continue;
        }

        if !options.dry_run {
            if let Err(message) = write_one(&target, &file.content) {
                report.failed.push(WriteFailure {
                    path: file.path.clone(),
                    target: Some(target),
                    message,
                });
                continue;
            }
        }

        report.written.push(Written {
            path: file.path.clone(),
            target,
        });
    }

    Ok(report)
}

fn write_one(target: &Path, content: &str) -> std::result::Result<(), String> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    fs::write(target, content).map_err(|e| format!("Failed to write file: {}", e))
}
