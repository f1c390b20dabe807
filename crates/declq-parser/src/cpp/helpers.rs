//! Shared helpers for lowering C++ nodes.

use ast_grep_core::{Doc, Node};
use declq_core::LineSpan;

/// Node kinds that can name the type of a declaration.
const TYPE_KINDS: &[&str] = &[
    "primitive_type",
    "type_identifier",
    "sized_type_specifier",
    "qualified_identifier",
    "template_type",
    "struct_specifier",
    "class_specifier",
    "union_specifier",
    "enum_specifier",
    "placeholder_type_specifier",
    "auto",
    "decltype",
    "dependent_type",
];

/// Node kinds that can appear as a declarator after the type.
const DECLARATOR_KINDS: &[&str] = &[
    "identifier",
    "field_identifier",
    "init_declarator",
    "pointer_declarator",
    "reference_declarator",
    "array_declarator",
    "function_declarator",
    "parenthesized_declarator",
    "attributed_declarator",
    "qualified_identifier",
    "operator_name",
    "destructor_name",
    "structured_binding_declarator",
    "template_function",
    "operator_cast",
];

pub(super) const RECORD_KINDS: &[&str] = &["class_specifier", "struct_specifier", "union_specifier"];

/// Collapse every whitespace run to a single space.
pub(super) fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(super) fn line_span<D: Doc>(node: &Node<D>) -> LineSpan {
    let to_line = |line: usize| u32::try_from(line + 1).unwrap_or(u32::MAX);
    LineSpan {
        start: to_line(node.start_pos().line()),
        end: to_line(node.end_pos().line()),
    }
}

pub(super) fn is_preproc_block(kind: &str) -> bool {
    matches!(
        kind,
        "preproc_if" | "preproc_ifdef" | "preproc_else" | "preproc_elif" | "preproc_elifdef"
    )
}

/// Split `ns::Foo<T>::bar` into its scope segments and final name.
///
/// Template arguments are dropped from every segment; a trailing
/// `operator...` name is kept intact so `operator<` survives.
pub(super) fn split_qualified(text: &str) -> (Vec<String>, String) {
    let text = text.trim();
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if i == start && text[start..].trim_start().starts_with("operator") {
            break;
        }
        match bytes[i] {
            b'<' | b'(' => depth += 1,
            b'>' | b')' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                let segment = strip_template_args(&text[start..i]);
                if !segment.is_empty() {
                    segments.push(segment);
                }
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    let rest = text[start..].trim();
    let name = if rest.starts_with("operator") {
        normalize_ws(rest)
    } else {
        strip_template_args(rest)
    };
    (segments, name)
}

fn strip_template_args(segment: &str) -> String {
    segment
        .split('<')
        .next()
        .unwrap_or(segment)
        .trim()
        .to_string()
}

/// Children of a declaration-like node, split into the leading specifiers
/// and type and the declarators that follow.
pub(super) struct DeclParts<'r, D: Doc> {
    pub prefix: Vec<Node<'r, D>>,
    /// Each declarator with the nodes that trail it (`= 0`, bit-field widths,
    /// default member initializers).
    pub declarators: Vec<(Node<'r, D>, Vec<Node<'r, D>>)>,
}

/// Split children of `declaration`, `field_declaration`, or `type_definition`.
///
/// `typedef_names` treats `type_identifier` after the type as a declarator,
/// which is how typedef names are spelled in the grammar.
pub(super) fn split_decl_parts<'r, D: Doc>(
    node: &Node<'r, D>,
    typedef_names: bool,
) -> DeclParts<'r, D> {
    let mut parts = DeclParts {
        prefix: Vec::new(),
        declarators: Vec::new(),
    };
    let mut seen_type = false;

    for child in node.children() {
        let kind = child.kind();
        let kind = kind.as_ref();
        if matches!(kind, ";" | "," | "comment" | "typedef") {
            continue;
        }
        let is_declarator =
            DECLARATOR_KINDS.contains(&kind) || (typedef_names && kind == "type_identifier");

        if !seen_type {
            if TYPE_KINDS.contains(&kind) {
                seen_type = true;
                parts.prefix.push(child);
            } else if matches!(kind, "function_declarator" | "operator_cast") {
                // Constructors, destructors, and conversion operators have no type.
                parts.declarators.push((child, Vec::new()));
            } else if let Some((_, trailing)) = parts.declarators.last_mut() {
                trailing.push(child);
            } else {
                parts.prefix.push(child);
            }
        } else if is_declarator {
            parts.declarators.push((child, Vec::new()));
        } else if let Some((_, trailing)) = parts.declarators.last_mut() {
            trailing.push(child);
        } else {
            parts.prefix.push(child);
        }
    }
    parts
}

/// Locate the function declarator behind pointer/reference wrappers.
///
/// Returns `None` for function-pointer variables such as `int (*fp)(int)`,
/// whose function declarator wraps a parenthesized declarator.
pub(super) fn find_function_declarator<'r, D: Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    match node.kind().as_ref() {
        "function_declarator" => {
            let inner = node.children().next()?;
            if inner.kind().as_ref() == "parenthesized_declarator" {
                None
            } else {
                Some(node.clone())
            }
        }
        "operator_cast" => Some(node.clone()),
        "pointer_declarator" | "reference_declarator" | "attributed_declarator" => node
            .children()
            .find(|c| DECLARATOR_KINDS.contains(&c.kind().as_ref()))
            .and_then(|inner| find_function_declarator(&inner)),
        _ => None,
    }
}

/// Text of the name a function declarator declares, e.g. `Foo::~Foo` or
/// `operator bool`.
pub(super) fn function_declarator_name<D: Doc>(declarator: &Node<D>) -> Option<String> {
    if declarator.kind().as_ref() == "operator_cast" {
        return Some(cast_name(&declarator.text()));
    }
    declarator
        .children()
        .next()
        .map(|name| name.text().to_string())
}

/// `operator bool() const` -> `operator bool`.
pub(super) fn cast_name(text: &str) -> String {
    normalize_ws(text.split('(').next().unwrap_or_default())
}

/// Join the printed type prefix and a declarator, keeping the source's
/// spacing between them: `int* get()` stays glued, `int *get()` does not.
pub(super) fn join_declarator<D: Doc>(
    prefix: &str,
    prefix_end: Option<usize>,
    declarator: &Node<D>,
) -> String {
    let text = declarator.text();
    if prefix.is_empty() {
        return normalize_ws(&text);
    }
    let glued = prefix_end == Some(declarator.range().start);
    let separator = if glued { "" } else { " " };
    normalize_ws(&format!("{prefix}{separator}{text}"))
}

/// Innermost declared name of a variable, field, or typedef declarator.
pub(super) fn declarator_name<D: Doc>(node: &Node<D>) -> String {
    match node.kind().as_ref() {
        "identifier" | "field_identifier" | "type_identifier" => node.text().to_string(),
        "qualified_identifier" | "operator_name" | "destructor_name" | "template_function" => {
            split_qualified(&node.text()).1
        }
        "structured_binding_declarator" => {
            let ids: Vec<String> = node
                .children()
                .filter(|c| c.kind().as_ref() == "identifier")
                .map(|c| c.text().to_string())
                .collect();
            format!("[{}]", ids.join(", "))
        }
        _ => node
            .children()
            .find(|c| {
                DECLARATOR_KINDS.contains(&c.kind().as_ref()) || c.kind().as_ref() == "type_identifier"
            })
            .map(|inner| declarator_name(&inner))
            .unwrap_or_default(),
    }
}

/// Number of top-level parameters in a signature's first parameter list.
pub(super) fn parameter_count(signature: &str) -> usize {
    let Some(open) = signature.find('(') else {
        return 0;
    };
    let mut depth = 0usize;
    let mut commas = 0;
    let mut has_content = false;
    for ch in signature[open + 1..].chars() {
        match ch {
            '(' | '<' | '[' | '{' => depth += 1,
            ')' if depth == 0 => break,
            ')' | '>' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => commas += 1,
            c if !c.is_whitespace() => has_content = true,
            _ => {}
        }
    }
    if has_content { commas + 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("bar", &[], "bar")]
    #[case("Foo::bar", &["Foo"], "bar")]
    #[case("ns::Foo<T>::~Foo", &["ns", "Foo"], "~Foo")]
    #[case("::global", &[], "global")]
    #[case("Foo::operator<", &["Foo"], "operator<")]
    #[case("Vec<Map<K, V>>::operator()", &["Vec"], "operator()")]
    #[case("swap<int>", &[], "swap")]
    fn splits_qualified_names(#[case] text: &str, #[case] scopes: &[&str], #[case] name: &str) {
        let (segments, last) = split_qualified(text);
        assert_eq!(segments, scopes);
        assert_eq!(last, name);
    }

    #[test]
    fn normalizes_whitespace_runs() {
        assert_eq!(normalize_ws("  int\n   Foo::get( )  const "), "int Foo::get( ) const");
    }

    #[rstest]
    #[case("void f()", 0)]
    #[case("void f(int a)", 1)]
    #[case("void f(std::map<int, int> m, int (*cb)(int, int))", 2)]
    #[case("int main(void)", 1)]
    fn counts_parameters(#[case] signature: &str, #[case] expected: usize) {
        assert_eq!(parameter_count(signature), expected);
    }
}
