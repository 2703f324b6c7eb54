//! Utilities for handling `.outlineignore` patterns
//!
//! Patterns are matched against paths relative to the scan root, so a pattern
//! never accidentally matches a component of the root itself.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the ignore file looked up in the scan root
pub const IGNORE_FILE_NAME: &str = ".outlineignore";

/// Load custom ignore patterns from `.outlineignore` in the scan root
///
/// Returns a vector of patterns to ignore. Empty lines and comments (lines starting with #) are skipped.
///
/// # Examples
///
/// ```text
/// # .outlineignore file content
/// generated/
/// *Test.java
/// legacy
/// ```
pub fn load_ignore_patterns(root: &Path) -> Result<Vec<String>> {
    let ignore_file = root.join(IGNORE_FILE_NAME);

    if !ignore_file.is_file() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read {}", ignore_file.display()))?;

    let patterns: Vec<String> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect();

    if !patterns.is_empty() {
        debug!(
            "Loaded {} custom ignore patterns from {}",
            patterns.len(),
            IGNORE_FILE_NAME
        );
    }

    Ok(patterns)
}

/// Check if a relative Unix-style path matches any of the custom ignore patterns
///
/// Supports three pattern types with proper word boundary handling:
/// - Directory patterns (ending with /): matches directory name as whole word, plus all contents
/// - Wildcard suffix patterns (starting with *): matches the end of the path
/// - Substring patterns: matches anywhere in the path
///
/// Word boundary: "generated/" matches "generated" and "src/generated" but NOT
/// "pregenerated" or "generated-old".
pub fn is_ignored_by_pattern(relative_path: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| matches_pattern(relative_path, pattern))
}

fn matches_pattern(path: &str, pattern: &str) -> bool {
    // Directory pattern (ends with /)
    if let Some(dir_name) = pattern.strip_suffix('/') {
        if dir_name.is_empty() {
            return false;
        }
        return path
            .split('/')
            .any(|component| component == dir_name);
    }

    // Wildcard suffix pattern (e.g., *Test.java, *.gen.java)
    if let Some(suffix) = pattern.strip_prefix('*') {
        return path.ends_with(suffix);
    }

    // Substring match (matches anywhere in path)
    path.contains(pattern)
}
