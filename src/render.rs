//! Text and JSON rendering of declaration trees.
//!
//! Layout of one class at nesting depth `d` (two spaces per level):
//!
//! ```text
//! Class Name<T> extends Base implements A, B:     <- indent d
//!   Static fields:                                <- indent d + 1
//!     <type> <name>                               <- indent d + 2
//!   Static methods:
//!   Fields:
//!   Methods:
//!   Class Nested:                                 <- nested classes after the buckets
//! ```
//!
//! Empty buckets are omitted; the class header is always emitted.

use crate::config::SummaryOptions;
use crate::extractors::base::{ClassDecl, CompilationUnit, Declaration, Parameter};
use serde::Serialize;
use std::borrow::Cow;

pub const INDENT: &str = "  ";

pub const STATIC_FIELDS_HEADER: &str = "Static fields:";
pub const STATIC_METHODS_HEADER: &str = "Static methods:";
pub const FIELDS_HEADER: &str = "Fields:";
pub const METHODS_HEADER: &str = "Methods:";

/// `# Package com.example` line announcing a declared package
pub fn package_header(package: &str) -> String {
    format!("# Package {package}")
}

/// `# package a.b` line for a directory-derived namespace
pub fn directory_header(namespace: &str) -> String {
    format!("# package {namespace}")
}

/// `Class Name<T> extends Base implements A, B:`
pub fn class_header(class: &ClassDecl) -> String {
    let mut header = format!("Class {}", class.name);
    if !class.type_parameters.is_empty() {
        header.push_str(&format!("<{}>", class.type_parameters.join(", ")));
    }
    if let Some(superclass) = &class.superclass {
        header.push_str(&format!(" extends {superclass}"));
    }
    if !class.interfaces.is_empty() {
        header.push_str(&format!(" implements {}", class.interfaces.join(", ")));
    }
    header.push(':');
    header
}

fn join_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Serialize)]
struct UnitRecord<'a> {
    path: &'a str,
    package: Option<&'a str>,
    announce_package: bool,
    declarations: &'a [Declaration],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    methods_only: bool,
}

impl Renderer {
    pub fn new(methods_only: bool) -> Self {
        Self { methods_only }
    }

    pub fn from_options(options: &SummaryOptions) -> Self {
        Self::new(options.methods_only)
    }

    /// Outline lines for every class of `unit`, without any package header
    pub fn render_unit(&self, unit: &CompilationUnit) -> Vec<String> {
        let mut lines = Vec::new();
        for class in unit.classes() {
            self.render_class(class, 0, &mut lines);
        }
        lines
    }

    pub fn render_class(&self, class: &ClassDecl, depth: usize, out: &mut Vec<String>) {
        out.push(format!("{}{}", INDENT.repeat(depth), class_header(class)));

        if !class.excluded {
            let mut static_fields = Vec::new();
            let mut static_methods = Vec::new();
            let mut fields = Vec::new();
            let mut methods = Vec::new();

            for member in &class.members {
                match member {
                    Declaration::Field(field) if !self.methods_only => {
                        let line = format!("{} {}", field.type_name, field.name);
                        if field.is_static() {
                            static_fields.push(line);
                        } else {
                            fields.push(line);
                        }
                    }
                    Declaration::Method(method) => {
                        let line = format!(
                            "{} {}({})",
                            method.return_type,
                            method.name,
                            join_parameters(&method.parameters)
                        );
                        if method.is_static() {
                            static_methods.push(line);
                        } else {
                            methods.push(line);
                        }
                    }
                    Declaration::Constructor(constructor) => {
                        methods.push(format!(
                            "{}({})",
                            constructor.class_name,
                            join_parameters(&constructor.parameters)
                        ));
                    }
                    Declaration::Field(_) | Declaration::Class(_) => {}
                }
            }

            push_bucket(out, STATIC_FIELDS_HEADER, static_fields, depth + 1);
            push_bucket(out, STATIC_METHODS_HEADER, static_methods, depth + 1);
            push_bucket(out, FIELDS_HEADER, fields, depth + 1);
            push_bucket(out, METHODS_HEADER, methods, depth + 1);
        }

        for nested in class.nested_classes() {
            self.render_class(nested, depth + 1, out);
        }
    }

    /// One-line JSON record for `unit`; fields are stripped in methods-only mode
    pub fn render_json(
        &self,
        unit: &CompilationUnit,
        path: &str,
        announce_package: bool,
    ) -> serde_json::Result<String> {
        let unit = if self.methods_only {
            Cow::Owned(unit.without_fields())
        } else {
            Cow::Borrowed(unit)
        };

        serde_json::to_string(&UnitRecord {
            path,
            package: unit.package.as_deref(),
            announce_package,
            declarations: &unit.declarations,
        })
    }
}

fn push_bucket(out: &mut Vec<String>, header: &str, items: Vec<String>, depth: usize) {
    if items.is_empty() {
        return;
    }
    let pad = INDENT.repeat(depth);
    out.push(format!("{pad}{header}"));
    out.extend(items.into_iter().map(|item| format!("{pad}{INDENT}{item}")));
}
