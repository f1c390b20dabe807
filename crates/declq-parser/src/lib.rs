//! # declq-parser
//!
//! ast-grep-based C/C++ front end for declq.
//!
//! Parses a translation unit with the tree-sitter C++ grammar and lowers the
//! declaration-level nodes (namespaces, records, methods, functions,
//! variables, enums, aliases) into a [`declq_core::SyntaxTree`]. Out-of-line
//! member function definitions are linked back to the record that declares
//! them once the whole file has been walked.

mod cpp;
pub mod error;
pub mod parser;

pub use error::ParserError;
pub use parser::{AstTree, detect_language, parse_file, parse_source, parse_translation_unit};
