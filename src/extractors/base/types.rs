// Declaration model
//
// Immutable per-file declaration tree produced by the extractor. Source order
// is kept everywhere; bucketing into static/instance groups is left to the
// renderer.

use serde::Serialize;
use std::path::PathBuf;

/// One source file and everything it declares
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompilationUnit {
    /// Path the unit was read from
    pub file_path: PathBuf,
    /// Declared package (`package a.b.c;`), if any
    pub package: Option<String>,
    /// Top-level declarations in source order
    pub declarations: Vec<Declaration>,
}

impl CompilationUnit {
    /// Top-level classes of this unit, in source order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Class(class) => Some(class),
            _ => None,
        })
    }

    /// True when the unit declares nothing that would be rendered
    pub fn is_empty(&self) -> bool {
        self.classes().next().is_none()
    }

    /// Copy of this unit with every field declaration removed, at any depth
    pub fn without_fields(&self) -> CompilationUnit {
        CompilationUnit {
            file_path: self.file_path.clone(),
            package: self.package.clone(),
            declarations: strip_fields(&self.declarations),
        }
    }
}

fn strip_fields(declarations: &[Declaration]) -> Vec<Declaration> {
    declarations
        .iter()
        .filter_map(|decl| match decl {
            Declaration::Field(_) => None,
            Declaration::Class(class) => Some(Declaration::Class(ClassDecl {
                members: strip_fields(&class.members),
                ..class.clone()
            })),
            other => Some(other.clone()),
        })
        .collect()
}

/// A named structural element of a compilation unit
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Class(ClassDecl),
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class(c) => &c.name,
            Declaration::Field(f) => &f.name,
            Declaration::Method(m) => &m.name,
            Declaration::Constructor(c) => &c.class_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    /// Type parameter names in declaration order (`<K, V>` → `["K", "V"]`)
    pub type_parameters: Vec<String>,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub modifiers: Modifiers,
    /// Members in source order, nested classes included. Only nested classes
    /// are kept for an excluded class.
    pub members: Vec<Declaration>,
    /// Header is shown but members are not collected
    pub excluded: bool,
}

impl ClassDecl {
    /// Nested classes in source order
    pub fn nested_classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.members.iter().filter_map(|decl| match decl {
            Declaration::Class(class) => Some(class),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldDecl {
    /// Declared type as written, unresolved
    pub type_name: String,
    pub name: String,
    pub modifiers: Modifiers,
}

impl FieldDecl {
    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MethodDecl {
    /// Declared return type as written; `void` for void methods
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub modifiers: Modifiers,
}

impl MethodDecl {
    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConstructorDecl {
    pub class_name: String,
    pub parameters: Vec<Parameter>,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
    /// `String... args`
    pub variadic: bool,
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.variadic {
            write!(f, "{}... {}", self.type_name, self.name)
        } else {
            write!(f, "{} {}", self.type_name, self.name)
        }
    }
}

/// Access level derived from modifier keywords
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// No access modifier (package-private)
    Package,
}

/// Modifier keywords of a declaration, annotations excluded
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Modifiers {
    keywords: Vec<String>,
}

impl Modifiers {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn is_static(&self) -> bool {
        self.contains("static")
    }

    pub fn is_public(&self) -> bool {
        self.visibility() == Visibility::Public
    }

    pub fn visibility(&self) -> Visibility {
        if self.contains("public") {
            Visibility::Public
        } else if self.contains("protected") {
            Visibility::Protected
        } else if self.contains("private") {
            Visibility::Private
        } else {
            Visibility::Package
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> Declaration {
        Declaration::Field(FieldDecl {
            type_name: "int".to_string(),
            name: name.to_string(),
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn test_visibility_from_modifiers() {
        assert_eq!(Modifiers::new(["public", "static"]).visibility(), Visibility::Public);
        assert_eq!(Modifiers::new(["protected"]).visibility(), Visibility::Protected);
        assert_eq!(Modifiers::new(["private", "final"]).visibility(), Visibility::Private);
        assert_eq!(Modifiers::new(["final"]).visibility(), Visibility::Package);
        assert!(Modifiers::new(["static"]).is_static());
        assert!(!Modifiers::default().is_public());
    }

    #[test]
    fn test_parameter_display() {
        let plain = Parameter {
            type_name: "List<String>".to_string(),
            name: "items".to_string(),
            variadic: false,
        };
        let varargs = Parameter {
            type_name: "String".to_string(),
            name: "args".to_string(),
            variadic: true,
        };
        assert_eq!(plain.to_string(), "List<String> items");
        assert_eq!(varargs.to_string(), "String... args");
    }

    fn class(name: &str, members: Vec<Declaration>) -> ClassDecl {
        ClassDecl {
            name: name.to_string(),
            type_parameters: vec![],
            superclass: None,
            interfaces: vec![],
            modifiers: Modifiers::default(),
            members,
            excluded: false,
        }
    }

    #[test]
    fn test_without_fields_strips_nested_fields() {
        let inner = class("Inner", vec![field("x")]);
        let outer = class("Outer", vec![field("y"), Declaration::Class(inner)]);
        let unit = CompilationUnit {
            file_path: PathBuf::from("Outer.java"),
            package: None,
            declarations: vec![Declaration::Class(outer)],
        };

        let stripped = unit.without_fields();
        let outer = stripped.classes().next().unwrap();
        assert_eq!(outer.members.len(), 1);
        let inner = outer.nested_classes().next().unwrap();
        assert!(inner.members.is_empty());
    }
}
