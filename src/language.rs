//! Language Support - tree-sitter grammar and source file recognition
//!
//! All grammar-specific configuration lives here so the extractor and the
//! directory walker agree on what counts as a Java compilation unit.

use std::path::Path;

/// Extension of the files the summarizer understands
pub const SOURCE_EXTENSION: &str = "java";

/// Metadata-only compilation units that never declare classes
pub const MARKER_FILES: &[&str] = &["package-info.java", "module-info.java"];

/// Get the tree-sitter Java grammar
pub fn get_tree_sitter_language() -> tree_sitter::Language {
    tree_sitter_java::LANGUAGE.into()
}

/// Detect language from file extension
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        SOURCE_EXTENSION => Some("java"),
        _ => None,
    }
}

/// True for `package-info.java` / `module-info.java`
pub fn is_marker_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| MARKER_FILES.contains(&name))
}

/// True for files the walker should hand to the extractor
pub fn is_source_file(path: &Path) -> bool {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    detect_language_from_extension(extension).is_some() && !is_marker_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_detection() {
        assert!(is_source_file(Path::new("src/com/example/Foo.java")));
        assert!(!is_source_file(Path::new("src/com/example/package-info.java")));
        assert!(!is_source_file(Path::new("module-info.java")));
        assert!(!is_source_file(Path::new("Foo.kt")));
        assert!(!is_source_file(Path::new("README")));
    }

    #[test]
    fn test_grammar_loads() {
        let mut parser = tree_sitter::Parser::new();
        assert!(parser.set_language(&get_tree_sitter_language()).is_ok());
    }
}
