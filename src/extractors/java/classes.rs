/// Class extraction
use crate::error::{Result, SummaryError};
use crate::extractors::base::{ClassDecl, Declaration};
use crate::extractors::java::JavaExtractor;
use tracing::{debug, trace};
use tree_sitter::Node;

use super::{fields, helpers, methods, policy};

/// Type declarations that are recognized but not summarized
pub(super) fn is_unsummarized_type(kind: &str) -> bool {
    matches!(
        kind,
        "interface_declaration"
            | "enum_declaration"
            | "record_declaration"
            | "annotation_type_declaration"
    )
}

/// Extract a class declaration and, recursively, its nested classes
pub(super) fn extract_class(extractor: &JavaExtractor, node: Node) -> Result<ClassDecl> {
    let base = extractor.base();
    let line = node.start_position().row + 1;

    let name = node
        .child_by_field_name("name")
        .map(|n| base.get_node_text(&n))
        .ok_or_else(|| {
            SummaryError::invariant(
                base.file_path(),
                format!("class declaration without a name at line {line}"),
            )
        })?;
    let body = node.child_by_field_name("body").ok_or_else(|| {
        SummaryError::invariant(
            base.file_path(),
            format!("class {name} without a body at line {line}"),
        )
    })?;

    let modifiers = helpers::extract_modifiers(base, node);
    let type_parameters = helpers::extract_type_parameter_names(base, node);
    let superclass = helpers::extract_superclass(base, node);
    let interfaces = helpers::extract_implemented_interfaces(base, node);

    // Exclusion hides this class's members only; nested classes are judged on their own
    let excluded = superclass
        .as_deref()
        .is_some_and(policy::is_throwable_superclass);
    if excluded {
        trace!(class = %name, superclass = ?superclass, "collecting header only");
    }

    let mut members = Vec::new();
    for member in body.named_children(&mut body.walk()) {
        match member.kind() {
            "class_declaration" => {
                members.push(Declaration::Class(extract_class(extractor, member)?));
            }
            _ if excluded => {}
            "field_declaration" => {
                members.extend(
                    fields::extract_fields(extractor, member)?
                        .into_iter()
                        .map(Declaration::Field),
                );
            }
            "method_declaration" => {
                if let Some(method) = methods::extract_method(extractor, member)? {
                    members.push(Declaration::Method(method));
                }
            }
            "constructor_declaration" => {
                if let Some(constructor) = methods::extract_constructor(extractor, member, &name)? {
                    members.push(Declaration::Constructor(constructor));
                }
            }
            kind if is_unsummarized_type(kind) => {
                debug!(class = %name, kind, "skipping nested type declaration");
            }
            _ => {}
        }
    }

    Ok(ClassDecl {
        name,
        type_parameters,
        superclass,
        interfaces,
        modifiers,
        members,
        excluded,
    })
}
