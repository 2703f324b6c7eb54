/// Method and constructor extraction
use crate::error::{Result, SummaryError};
use crate::extractors::base::{ConstructorDecl, MethodDecl, Parameter};
use crate::extractors::java::JavaExtractor;
use tracing::trace;
use tree_sitter::Node;

use super::{helpers, policy};

/// Extract a method declaration, or `None` when the inclusion policy drops it
pub(super) fn extract_method(extractor: &JavaExtractor, node: Node) -> Result<Option<MethodDecl>> {
    let base = extractor.base();
    let name = required_text(extractor, node, "name", "method declaration")?;
    let modifiers = helpers::extract_modifiers(base, node);

    if let Some(reason) = policy::method_exclusion(&name, &modifiers) {
        trace!(method = %name, reason = reason.as_str(), "skipping method");
        return Ok(None);
    }

    // `int values()[]` is legal; the trailing dimensions belong to the return type
    let return_type = node
        .child_by_field_name("type")
        .map(|n| base.get_normalized_text(&n))
        .unwrap_or_else(|| "void".to_string());
    let return_type = format!("{}{}", return_type, helpers::extract_dimensions(base, node));

    let parameters = extract_parameters(extractor, node)?;

    Ok(Some(MethodDecl {
        return_type,
        name,
        parameters,
        modifiers,
    }))
}

/// Extract a constructor declaration owned by `class_name`, or `None` when it is not public
pub(super) fn extract_constructor(
    extractor: &JavaExtractor,
    node: Node,
    class_name: &str,
) -> Result<Option<ConstructorDecl>> {
    let modifiers = helpers::extract_modifiers(extractor.base(), node);

    if let Some(reason) = policy::constructor_exclusion(&modifiers) {
        trace!(class = %class_name, reason = reason.as_str(), "skipping constructor");
        return Ok(None);
    }

    Ok(Some(ConstructorDecl {
        class_name: class_name.to_string(),
        parameters: extract_parameters(extractor, node)?,
        modifiers,
    }))
}

/// Formal parameters in declaration order; receiver parameters (`Foo this`) are dropped
fn extract_parameters(extractor: &JavaExtractor, node: Node) -> Result<Vec<Parameter>> {
    let Some(param_list) = node.child_by_field_name("parameters") else {
        return Ok(Vec::new());
    };

    let mut parameters = Vec::new();
    for param in param_list.named_children(&mut param_list.walk()) {
        match param.kind() {
            "formal_parameter" => parameters.push(extract_formal_parameter(extractor, param)?),
            "spread_parameter" => parameters.push(extract_spread_parameter(extractor, param)?),
            _ => {}
        }
    }
    Ok(parameters)
}

fn extract_formal_parameter(extractor: &JavaExtractor, node: Node) -> Result<Parameter> {
    let base = extractor.base();
    let type_name = required_text(extractor, node, "type", "formal parameter")?;
    let name = required_text(extractor, node, "name", "formal parameter")?;

    Ok(Parameter {
        type_name: format!("{}{}", type_name, helpers::extract_dimensions(base, node)),
        name,
        variadic: false,
    })
}

/// `String... names`: the type is the first named child that is not a modifier list
fn extract_spread_parameter(extractor: &JavaExtractor, node: Node) -> Result<Parameter> {
    let base = extractor.base();
    let children: Vec<Node> = node.named_children(&mut node.walk()).collect();

    let type_node = children
        .iter()
        .find(|c| !matches!(c.kind(), "modifiers" | "annotation" | "marker_annotation"));
    let name_node = children
        .iter()
        .find(|c| c.kind() == "variable_declarator")
        .and_then(|declarator| declarator.child_by_field_name("name"))
        .or_else(|| node.child_by_field_name("name"))
        .or_else(|| children.iter().rev().find(|c| c.kind() == "identifier").copied());

    match (type_node, name_node) {
        (Some(type_node), Some(name_node)) if type_node.id() != name_node.id() => Ok(Parameter {
            type_name: base.get_normalized_text(type_node),
            name: base.get_node_text(&name_node),
            variadic: true,
        }),
        _ => Err(SummaryError::invariant(
            base.file_path(),
            format!(
                "variadic parameter `{}` without a type or name at line {}",
                base.get_normalized_text(&node),
                node.start_position().row + 1
            ),
        )),
    }
}

fn required_text(extractor: &JavaExtractor, node: Node, field: &str, what: &str) -> Result<String> {
    let base = extractor.base();
    base.get_field_text(&node, field).ok_or_else(|| {
        SummaryError::invariant(
            base.file_path(),
            format!(
                "{} without a {} at line {}",
                what,
                field,
                node.start_position().row + 1
            ),
        )
    })
}
