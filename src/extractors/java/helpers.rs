/// Helper functions for Java extraction
/// Handles modifiers, inheritance clauses and type parameters
use crate::extractors::base::{BaseExtractor, Modifiers};
use tree_sitter::Node;

fn is_annotation(node: &Node) -> bool {
    matches!(node.kind(), "annotation" | "marker_annotation")
}

/// Extract modifier keywords (public, static, final, ...) skipping annotations
pub(super) fn extract_modifiers(base: &BaseExtractor, node: Node) -> Modifiers {
    node.children(&mut node.walk())
        .find(|c| c.kind() == "modifiers")
        .map(|modifiers_node| {
            Modifiers::new(
                modifiers_node
                    .children(&mut modifiers_node.walk())
                    .filter(|c| !c.is_named())
                    .map(|c| base.get_node_text(&c)),
            )
        })
        .unwrap_or_default()
}

/// Extract superclass from a class declaration node, as written
pub(super) fn extract_superclass(base: &BaseExtractor, node: Node) -> Option<String> {
    let superclass_node = node.child_by_field_name("superclass")?;

    let type_node = superclass_node
        .named_children(&mut superclass_node.walk())
        .find(|c| !is_annotation(c))?;

    Some(base.get_normalized_text(&type_node))
}

/// Extract implemented interfaces from a class declaration
pub(super) fn extract_implemented_interfaces(base: &BaseExtractor, node: Node) -> Vec<String> {
    let Some(interfaces_node) = node.child_by_field_name("interfaces") else {
        return Vec::new();
    };

    if let Some(type_list_node) = interfaces_node
        .children(&mut interfaces_node.walk())
        .find(|c| c.kind() == "type_list")
    {
        return type_list_node
            .named_children(&mut type_list_node.walk())
            .filter(|c| !is_annotation(c))
            .map(|c| base.get_normalized_text(&c))
            .collect();
    }

    Vec::new()
}

/// Extract type parameter names (`<K extends Comparable<K>, V>` → `["K", "V"]`)
pub(super) fn extract_type_parameter_names(base: &BaseExtractor, node: Node) -> Vec<String> {
    let Some(type_params_node) = node.child_by_field_name("type_parameters") else {
        return Vec::new();
    };

    type_params_node
        .named_children(&mut type_params_node.walk())
        .filter(|c| c.kind() == "type_parameter")
        .filter_map(|param| {
            param
                .named_children(&mut param.walk())
                .find(|c| matches!(c.kind(), "type_identifier" | "identifier"))
                .map(|name| base.get_node_text(&name))
        })
        .collect()
}

/// Array dimensions written after a declarator name (`int x[]`), whitespace removed
pub(super) fn extract_dimensions(base: &BaseExtractor, node: Node) -> String {
    node.child_by_field_name("dimensions")
        .map(|dims| base.get_node_text(&dims).split_whitespace().collect())
        .unwrap_or_default()
}
