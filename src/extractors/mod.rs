//! Declaration extraction
//!
//! Turns Java source into the immutable declaration tree the renderer consumes.
//!
//! # Architecture
//!
//! - `base` - Declaration model and source-text helpers
//! - `manager` - ExtractorManager public API (read, parse, extract)
//! - `java` - tree-sitter Java extractor and its inclusion policy

pub mod base;
pub mod java;
pub mod manager;

// Re-export the public API
pub use base::{
    ClassDecl, CompilationUnit, ConstructorDecl, Declaration, FieldDecl, MethodDecl, Modifiers,
    Parameter, Visibility,
};
pub use manager::ExtractorManager;
