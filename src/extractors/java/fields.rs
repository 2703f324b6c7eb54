/// Field extraction
use crate::error::{Result, SummaryError};
use crate::extractors::base::FieldDecl;
use crate::extractors::java::JavaExtractor;
use tracing::trace;
use tree_sitter::Node;

use super::{helpers, policy};

/// Extract one field per declarator of a `field_declaration` (`int a, b;` yields two)
pub(super) fn extract_fields(extractor: &JavaExtractor, node: Node) -> Result<Vec<FieldDecl>> {
    let base = extractor.base();
    let modifiers = helpers::extract_modifiers(base, node);

    let type_node = node.child_by_field_name("type").ok_or_else(|| {
        SummaryError::invariant(
            base.file_path(),
            format!(
                "field declaration without a type at line {}",
                node.start_position().row + 1
            ),
        )
    })?;
    let field_type = base.get_normalized_text(&type_node);

    let mut fields = Vec::new();
    let mut cursor = node.walk();
    for declarator in node.children_by_field_name("declarator", &mut cursor) {
        let name = declarator
            .child_by_field_name("name")
            .map(|n| base.get_node_text(&n))
            .ok_or_else(|| {
                SummaryError::invariant(
                    base.file_path(),
                    format!(
                        "variable declarator without a name at line {}",
                        declarator.start_position().row + 1
                    ),
                )
            })?;

        if let Some(reason) = policy::field_exclusion(&name) {
            trace!(field = %name, reason = reason.as_str(), "skipping field");
            continue;
        }

        fields.push(FieldDecl {
            type_name: format!("{}{}", field_type, helpers::extract_dimensions(base, declarator)),
            name,
            modifiers: modifiers.clone(),
        });
    }

    Ok(fields)
}
