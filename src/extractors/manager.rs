//! ExtractorManager - Public API for declaration extraction
//!
//! Handles reading and parsing a compilation unit and delegates to the Java
//! extractor. Every failure comes back as a `SummaryError` naming the file.

use crate::error::{Result, SummaryError};
use crate::extractors::base::CompilationUnit;
use crate::extractors::java::{preprocess, JavaExtractor};
use std::fs;
use std::path::Path;
use tree_sitter::Parser;

/// Stateless entry point: path or text in, declaration tree out
#[derive(Debug, Clone, Default)]
pub struct ExtractorManager {
    normalize_method_refs: bool,
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elide `Type::method` references from the text before parsing
    pub fn with_method_reference_elision(mut self, enabled: bool) -> Self {
        self.normalize_method_refs = enabled;
        self
    }

    /// Read and extract one file
    pub fn extract_file(&self, file_path: &Path) -> Result<CompilationUnit> {
        let bytes = fs::read(file_path).map_err(|e| SummaryError::filesystem(file_path, e))?;
        let content = String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
            let column = valid.iter().rev().take_while(|&&b| b != b'\n').count() + 1;
            SummaryError::parse(
                file_path,
                format!("invalid UTF-8: {}", e.utf8_error()),
                Some((line, column)),
            )
        })?;

        self.extract_source(file_path, &content)
    }

    /// Extract declarations from already-loaded source text
    pub fn extract_source(&self, file_path: &Path, content: &str) -> Result<CompilationUnit> {
        let content = if self.normalize_method_refs {
            preprocess::elide_method_references(content).into_owned()
        } else {
            content.to_string()
        };

        // Create parser for the language
        let mut parser = Parser::new();
        parser
            .set_language(&crate::language::get_tree_sitter_language())
            .map_err(|e| {
                SummaryError::invariant(file_path, format!("failed to load Java grammar: {e}"))
            })?;

        // Parse the file
        let tree = parser
            .parse(&content, None)
            .ok_or_else(|| SummaryError::parse(file_path, "parser produced no tree", None))?;

        let unit = JavaExtractor::new(file_path, content).extract_unit(&tree)?;

        tracing::debug!(
            "Extracted {} top-level declarations from {}",
            unit.declarations.len(),
            file_path.display()
        );
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_file_reads_and_parses() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Foo.java");
        fs::write(&file_path, "package p;\npublic class Foo { public void run() {} }\n").unwrap();

        let unit = ExtractorManager::new().extract_file(&file_path).unwrap();
        assert_eq!(unit.package.as_deref(), Some("p"));
        assert_eq!(unit.file_path, file_path);
        assert_eq!(unit.classes().count(), 1);
    }

    #[test]
    fn test_missing_file_is_a_filesystem_failure() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Gone.java");

        let err = ExtractorManager::new().extract_file(&file_path).unwrap_err();
        assert!(matches!(err, SummaryError::Filesystem { .. }));
        assert_eq!(err.path(), file_path);
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_failure() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Bad.java");
        fs::write(&file_path, b"class A {}\n// \xff\xfe\n").unwrap();

        let err = ExtractorManager::new().extract_file(&file_path).unwrap_err();
        match err {
            SummaryError::Parse { line, diagnostic, .. } => {
                assert_eq!(line, Some(2));
                assert!(diagnostic.contains("invalid UTF-8"));
            }
            other => panic!("expected parse failure, got {other:?}"),
        }
    }

    #[test]
    fn test_method_reference_elision_keeps_signatures() {
        let source = "public class A { public java.util.List<String> names(java.util.List<Integer> xs) { return xs.stream().map(String::valueOf).toList(); } }";
        let plain = ExtractorManager::new()
            .extract_source(Path::new("A.java"), source)
            .unwrap();
        let elided = ExtractorManager::new()
            .with_method_reference_elision(true)
            .extract_source(Path::new("A.java"), source)
            .unwrap();
        assert_eq!(plain, elided);
    }
}
