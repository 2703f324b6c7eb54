/// Java extractor: turns a tree-sitter Java tree into a `CompilationUnit`
///
/// This module is organized into focused sub-modules:
/// - helpers: Shared utility functions (modifiers, inheritance clauses, type parameters)
/// - classes: Class extraction, recursing into nested classes
/// - methods: Method and constructor extraction
/// - fields: Field extraction
/// - packages: Package declaration extraction
/// - policy: What gets dropped from a summary, and why
/// - preprocess: Optional text normalization before parsing
mod classes;
mod fields;
mod helpers;
mod methods;
mod packages;
pub mod policy;
pub mod preprocess;

use crate::error::{Result, SummaryError};
use crate::extractors::base::{BaseExtractor, CompilationUnit, Declaration};
use std::path::PathBuf;
use tracing::debug;
use tree_sitter::Tree;

/// Java extractor for one compilation unit
pub struct JavaExtractor {
    base: BaseExtractor,
}

impl JavaExtractor {
    pub fn new(file_path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
        }
    }

    /// Build the declaration tree for this unit.
    ///
    /// A tree containing any ERROR or MISSING node is rejected as a whole;
    /// there is no partial extraction.
    pub fn extract_unit(&self, tree: &Tree) -> Result<CompilationUnit> {
        let root = tree.root_node();

        if let Some(problem) = self.base.first_syntax_problem(&root) {
            return Err(SummaryError::parse(
                self.base.file_path(),
                problem.diagnostic,
                Some((problem.line, problem.column)),
            ));
        }

        let mut package = None;
        let mut declarations = Vec::new();
        for node in root.named_children(&mut root.walk()) {
            match node.kind() {
                "package_declaration" => {
                    package = Some(packages::extract_package(self, node)?);
                }
                "class_declaration" => {
                    declarations.push(Declaration::Class(classes::extract_class(self, node)?));
                }
                kind if classes::is_unsummarized_type(kind) => {
                    debug!(
                        file = %self.base.file_path().display(),
                        kind,
                        "skipping top-level type declaration"
                    );
                }
                _ => {}
            }
        }

        Ok(CompilationUnit {
            file_path: self.base.file_path().to_path_buf(),
            package,
            declarations,
        })
    }

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::ClassDecl;
    use tree_sitter::Parser;

    fn extract(source: &str) -> Result<CompilationUnit> {
        let mut parser = Parser::new();
        parser
            .set_language(&crate::language::get_tree_sitter_language())
            .unwrap();
        let tree = parser.parse(source, None).unwrap();
        JavaExtractor::new("Test.java", source.to_string()).extract_unit(&tree)
    }

    fn member_names(class: &ClassDecl) -> Vec<&str> {
        class.members.iter().map(|m| m.name()).collect()
    }

    #[test]
    fn test_extracts_package_and_class_header() {
        let unit = extract(
            "package com.example.app;\n\
             public class Foo<T, U> extends Base<T> implements Runnable, Comparable<Foo<T, U>> {}",
        )
        .unwrap();

        assert_eq!(unit.package.as_deref(), Some("com.example.app"));
        let class = unit.classes().next().unwrap();
        assert_eq!(class.name, "Foo");
        assert_eq!(class.type_parameters, ["T", "U"]);
        assert_eq!(class.superclass.as_deref(), Some("Base<T>"));
        assert_eq!(class.interfaces, ["Runnable", "Comparable<Foo<T, U>>"]);
        assert!(!class.excluded);
    }

    #[test]
    fn test_single_segment_package() {
        let unit = extract("package app;\nclass A {}").unwrap();
        assert_eq!(unit.package.as_deref(), Some("app"));
    }

    #[test]
    fn test_filtering_policy() {
        let unit = extract(
            r#"
            public class Service {
                private static final Logger logger = LoggerFactory.getLogger(Service.class);
                private int count;
                public static final String NAME = "svc";
                public Service(int count) { this.count = count; }
                Service() {}
                public int getCount() { return count; }
                private void reset() {}
                protected void tick() {}
                public String toString() { return NAME; }
                public boolean equals(Object o) { return false; }
                public int hashCode() { return 1; }
                public static Service create() { return new Service(0); }
            }
            "#,
        )
        .unwrap();

        let class = unit.classes().next().unwrap();
        assert_eq!(
            member_names(class),
            ["count", "NAME", "Service", "getCount", "create"]
        );
    }

    #[test]
    fn test_field_declarators_and_dimensions() {
        let unit = extract("class A { int a, b[]; java.util.Map<String,\n Integer> m; }").unwrap();
        let class = unit.classes().next().unwrap();
        let fields: Vec<(String, String)> = class
            .members
            .iter()
            .filter_map(|m| match m {
                Declaration::Field(f) => Some((f.type_name.clone(), f.name.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            fields,
            vec![
                ("int".to_string(), "a".to_string()),
                ("int[]".to_string(), "b".to_string()),
                ("java.util.Map<String, Integer>".to_string(), "m".to_string()),
            ]
        );
    }

    #[test]
    fn test_method_signature_parts() {
        let unit = extract(
            "class A { public static <T> List<T> copy(final List<T> src, int[] idx, String... names) { return src; } public void run() {} }",
        )
        .unwrap();
        let class = unit.classes().next().unwrap();
        let methods: Vec<_> = class
            .members
            .iter()
            .filter_map(|m| match m {
                Declaration::Method(m) => Some(m),
                _ => None,
            })
            .collect();

        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].return_type, "List<T>");
        assert!(methods[0].is_static());
        let params: Vec<String> = methods[0].parameters.iter().map(|p| p.to_string()).collect();
        assert_eq!(params, ["List<T> src", "int[] idx", "String... names"]);
        assert_eq!(methods[1].return_type, "void");
        assert!(methods[1].parameters.is_empty());
    }

    #[test]
    fn test_exception_subclass_is_excluded_but_nested_classes_are_kept() {
        let unit = extract(
            r#"
            public class Foo<T> extends RuntimeException implements Comparable<T> {
                public int code;
                public int compareTo(T other) { return 0; }
                public static class Detail {
                    public String message;
                }
                public static class Wrapped extends IllegalStateException {
                    public int depth;
                }
            }
            "#,
        )
        .unwrap();

        let foo = unit.classes().next().unwrap();
        assert!(foo.excluded);
        assert_eq!(member_names(foo), ["Detail", "Wrapped"]);

        let nested: Vec<&ClassDecl> = foo.nested_classes().collect();
        assert!(!nested[0].excluded);
        assert_eq!(member_names(nested[0]), ["message"]);
        assert!(nested[1].excluded);
        assert!(nested[1].members.is_empty());
    }

    #[test]
    fn test_error_subclass_is_excluded() {
        let unit = extract("class Boom extends java.lang.Error { public void a() {} }").unwrap();
        assert!(unit.classes().next().unwrap().excluded);
    }

    #[test]
    fn test_exception_type_argument_does_not_exclude() {
        let unit = extract(
            "public class Handler extends Base<IOException> { public void handle() {} }",
        )
        .unwrap();
        let handler = unit.classes().next().unwrap();
        assert_eq!(handler.superclass.as_deref(), Some("Base<IOException>"));
        assert!(!handler.excluded);
        assert_eq!(member_names(handler), vec!["handle"]);
    }

    #[test]
    fn test_interfaces_and_enums_are_skipped() {
        let unit = extract(
            "interface I { void a(); }\nenum E { X, Y }\nrecord R(int a) {}\nclass C { interface Inner {} }",
        )
        .unwrap();
        let names: Vec<&str> = unit.classes().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["C"]);
        assert!(unit.classes().next().unwrap().members.is_empty());
    }

    #[test]
    fn test_syntax_error_is_a_parse_failure() {
        let err = extract("public class Broken { public void x( { }").unwrap_err();
        assert!(matches!(err, SummaryError::Parse { .. }));
        assert!(err.to_string().contains("Test.java"));
    }

    #[test]
    fn test_file_without_classes_is_empty() {
        let unit = extract("package a.b;\nimport java.util.List;\n").unwrap();
        assert!(unit.is_empty());
        assert_eq!(unit.package.as_deref(), Some("a.b"));
    }
}
