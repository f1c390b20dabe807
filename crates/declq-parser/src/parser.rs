//! ast-grep wrapper, language detection, and translation-unit entry points.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;
use declq_core::SyntaxTree;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the front-end language from a file path extension.
///
/// Every C-family extension is parsed with the C++ grammar, which accepts
/// the declaration forms of plain C as well. Returns `None` for anything else.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let ext = Path::new(file_path).extension()?.to_str()?;
    match ext {
        "cpp" | "cc" | "cxx" | "c++" | "hpp" | "hh" | "hxx" | "h" | "c" | "ipp" | "inl" => {
            Some(SupportLang::Cpp)
        }
        _ => None,
    }
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Build the declaration tree for one C++ translation unit.
///
/// Syntax errors do not fail the parse; unparseable regions are skipped
/// and reported through `tracing`.
#[must_use]
pub fn parse_translation_unit(source: &str, source_name: Option<&str>) -> SyntaxTree {
    let root = parse_source(source, SupportLang::Cpp);
    crate::cpp::lower(&root, source_name)
}

/// Read and parse a C/C++ source file.
///
/// # Errors
/// Returns [`ParserError::UnsupportedLanguage`] for non C-family extensions
/// and [`ParserError::Io`] if the file cannot be read.
pub fn parse_file(path: &Path) -> Result<SyntaxTree, ParserError> {
    let path_name = path.display().to_string();
    if detect_language(&path_name).is_none() {
        return Err(ParserError::UnsupportedLanguage(path_name));
    }
    let source = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path_name, bytes = source.len(), "parsing translation unit");
    Ok(parse_translation_unit(&source, Some(&path_name)))
}
