/// Package declaration extraction
use crate::error::{Result, SummaryError};
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

/// Extract the dotted package name from a `package_declaration` node
pub(super) fn extract_package(extractor: &JavaExtractor, node: Node) -> Result<String> {
    let name_node = node
        .named_children(&mut node.walk())
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
        .ok_or_else(|| {
            SummaryError::invariant(
                extractor.base().file_path(),
                format!(
                    "package declaration without a name at line {}",
                    node.start_position().row + 1
                ),
            )
        })?;

    // `package com . example ;` is legal; the name itself never contains spaces
    Ok(extractor
        .base()
        .get_node_text(&name_node)
        .split_whitespace()
        .collect())
}
