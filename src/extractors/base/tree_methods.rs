// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

/// Location and description of the first syntax problem in a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxProblem {
    pub diagnostic: String,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
}

const SNIPPET_LIMIT: usize = 40;

impl BaseExtractor {
    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_normalized_text(&field_node))
    }

    /// Describe the first ERROR or MISSING node in document order
    pub fn first_syntax_problem(&self, root: &Node) -> Option<SyntaxProblem> {
        let node = find_first_problem(*root)?;
        let position = node.start_position();
        let diagnostic = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            let snippet = self.get_normalized_text(&node);
            if snippet.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected `{}`", truncate(&snippet, SNIPPET_LIMIT))
            }
        };

        Some(SyntaxProblem {
            diagnostic,
            line: position.row + 1,
            column: position.column + 1,
        })
    }
}

fn find_first_problem(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    for child in node.children(&mut node.walk()) {
        if let Some(problem) = find_first_problem(child) {
            return Some(problem);
        }
    }
    None
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let head: String = text.chars().take(limit).collect();
        format!("{head}...")
    }
}
