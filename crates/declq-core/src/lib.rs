//! # declq-core
//!
//! Core types shared across all declq crates:
//! - The read-only syntax-tree model (`SyntaxTree`, `Declaration`, `DeclKind`)
//!   backed by an arena addressed through `DeclId`
//! - `TreeBuilder`, the only way front ends mint declarations
//! - Query `Target` and the plugin-style argument adapter
//! - The diagnostics boundary (`Diagnostic`, `DiagnosticSink`)
//! - Print style enum shared by the engine and configuration
//! - Cross-cutting error types

pub mod decl;
pub mod diagnostics;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod target;
pub mod tree;

pub use decl::{
    Callable, DeclKind, Declaration, EnumDecl, FunctionDecl, LineSpan, MethodDecl, RecordDecl,
    VarDecl,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use enums::{Access, PrintStyle, RecordTag};
pub use errors::QueryError;
pub use ids::DeclId;
pub use target::Target;
pub use tree::{NewDecl, SyntaxTree, TreeBuilder, Walk};
