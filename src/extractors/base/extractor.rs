// BaseExtractor implementation
//
// Owns the source text of one compilation unit and hands out node text to the
// language extractor.

use std::path::{Path, PathBuf};
use tree_sitter::Node;

/// Source-text access shared by the Java extraction passes
pub struct BaseExtractor {
    pub file_path: PathBuf,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(file_path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            file_path: file_path.into(),
            content,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Node text with every whitespace run (newlines, comments' indentation)
    /// collapsed to a single space, for types written across several lines
    pub fn get_normalized_text(&self, node: &Node) -> String {
        collapse_whitespace(&self.get_node_text(node))
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
