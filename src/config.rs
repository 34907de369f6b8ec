//! Project configuration (codesplit.yaml) parsing.
//!
//! The config file sets the default destination directory, whether existing
//! files are replaced, and which declared paths to skip.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitError};

/// The name of the config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "codesplit.yaml";

/// Configuration loaded from codesplit.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination root for split files.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Replace files that already exist at the destination.
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,

    /// Declared-path patterns to skip when writing.
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("out")
}

fn default_overwrite() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            overwrite: default_overwrite(),
            excludes: vec![],
        }
    }
}

impl Config {
    /// Load config from a codesplit.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SplitError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SplitError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `codesplit.yaml` from `dir`, or the defaults when it is absent.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check if a declared path matches any exclude pattern.
    ///
    /// Both `/` and `\` in the declared path are treated as `/`.
    pub fn is_excluded(&self, declared: &str) -> bool {
        matches_any(&self.excludes, declared)
    }
}

/// Check a declared path against a list of exclude patterns.
///
/// Patterns, tried against the path with `\` rewritten to `/`:
/// - `*.ext` matches a suffix anywhere;
/// - `**/dir/*` matches `dir/` at the start or `/dir/` anywhere;
/// - `dir/*` matches only paths that start with `dir/`, so `tmp/*` skips
///   `tmp/a.rs` but not `src/tmp/a.rs` (use `**/tmp/*` for that);
/// - anything else is a substring match.
pub fn matches_any(patterns: &[String], declared: &str) -> bool {
    let path = declared.replace('\\', "/");
    patterns.iter().any(|pattern| matches_pattern(&path, pattern))
}

/// Simple glob matching: `*.ext`, `dir/*`, `**/dir/*`, or substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
        }
        return path.contains(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix));
    }

    path.contains(pattern)
}
