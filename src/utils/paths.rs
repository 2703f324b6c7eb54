// Path conversion utilities
//
// Relative Unix-style paths (for JSON output) and dotted namespaces derived
// from directory paths (for directory-grouped output).

use anyhow::{Context, Result};
use std::path::{Path, MAIN_SEPARATOR};

/// Namespace used for files that sit directly in the scan root
///
/// Printed instead of a bare `.` (the relative form of the root) so the
/// header reads as Java's unnamed package.
pub const ROOT_NAMESPACE: &str = "<default>";

/// Convert a path under `root` to a relative Unix-style path (with `/` separators)
///
/// Paths produced by the walker always start with `root` as given, so the plain
/// prefix strip is tried first; canonical forms are only compared when that
/// fails (e.g. `/var` vs `/private/var` on macOS).
///
/// # Examples
/// ```
/// use java_outline::utils::paths::to_relative_unix_style;
/// use std::path::Path;
///
/// let relative = to_relative_unix_style(
///     Path::new("/home/dev/project/src/Main.java"),
///     Path::new("/home/dev/project"),
/// )
/// .unwrap();
/// assert_eq!(relative, "src/Main.java");
/// ```
pub fn to_relative_unix_style(path: &Path, root: &Path) -> Result<String> {
    let relative = match path.strip_prefix(root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => {
            let canonical_path = path
                .canonicalize()
                .with_context(|| format!("Failed to resolve '{}'", path.display()))?;
            let canonical_root = root
                .canonicalize()
                .with_context(|| format!("Failed to resolve '{}'", root.display()))?;
            canonical_path
                .strip_prefix(&canonical_root)
                .with_context(|| {
                    format!(
                        "File path '{}' is not within scan root '{}'",
                        path.display(),
                        root.display()
                    )
                })?
                .to_path_buf()
        }
    };

    // Convert to string and normalize separators to Unix-style
    let path_str = relative.to_str().context("Path contains invalid UTF-8")?;

    // On Unix, MAIN_SEPARATOR is already '/', so this is a no-op
    let unix_style = if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.to_string()
    };

    Ok(unix_style)
}

/// Dotted namespace for a relative Unix-style directory path
///
/// `"com/example/util"` → `"com.example.util"`, `""` → [`ROOT_NAMESPACE`]
pub fn namespace_for_directory(relative_dir: &str) -> String {
    let trimmed = relative_dir.trim_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        ROOT_NAMESPACE.to_string()
    } else {
        trimmed
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_linux_absolute_to_relative() {
        let root = PathBuf::from("/home/dev/source/app");
        let absolute = PathBuf::from("/home/dev/source/app/src/main/java/App.java");

        let result = to_relative_unix_style(&absolute, &root).unwrap();

        assert_eq!(result, "src/main/java/App.java");
        assert!(result.contains('/'), "Should use forward slashes");
    }

    #[test]
    fn test_relative_root() {
        let root = PathBuf::from("src");
        let file = root.join("com").join("example").join("App.java");

        assert_eq!(
            to_relative_unix_style(&file, &root).unwrap(),
            "com/example/App.java"
        );
    }

    #[test]
    fn test_unicode_and_spaces_in_paths() {
        let root = PathBuf::from("/home/dev/my projects/プロジェクト");
        let absolute = PathBuf::from("/home/dev/my projects/プロジェクト/src/日本語.java");

        let result = to_relative_unix_style(&absolute, &root).unwrap();

        assert_eq!(result, "src/日本語.java");
    }

    #[test]
    fn test_file_outside_root_rejected() {
        let root = PathBuf::from("/definitely/not/a/real/root");
        let outside_file = PathBuf::from("/also/not/real/Outside.java");

        assert!(to_relative_unix_style(&outside_file, &root).is_err());
    }

    #[test]
    fn test_namespace_for_directory() {
        assert_eq!(namespace_for_directory("com/example/util"), "com.example.util");
        assert_eq!(namespace_for_directory("app"), "app");
        assert_eq!(namespace_for_directory(""), ROOT_NAMESPACE);
        assert_eq!(namespace_for_directory("./"), ROOT_NAMESPACE);
    }
}
