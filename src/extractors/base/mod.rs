// Base extractor types
//
// - types.rs: declaration model (CompilationUnit, Declaration, ClassDecl, ...)
// - extractor.rs: BaseExtractor (source text access)
// - tree_methods.rs: tree navigation and syntax-problem detection

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use tree_methods::SyntaxProblem;
pub use types::{
    ClassDecl, CompilationUnit, ConstructorDecl, Declaration, FieldDecl, MethodDecl, Modifiers,
    Parameter, Visibility,
};
