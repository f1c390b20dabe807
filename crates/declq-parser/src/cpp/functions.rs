//! Function definitions, in record bodies and at namespace scope.

use ast_grep_core::{Doc, Node};
use declq_core::{Access, Callable, DeclKind, FunctionDecl, MethodDecl, NewDecl};

use super::helpers::{
    cast_name, find_function_declarator, function_declarator_name, line_span, normalize_ws,
    split_qualified,
};
use super::{Lowering, PendingLink, Scope};

const BODY_KINDS: &[&str] = &["compound_statement", "try_statement"];
const CLAUSE_KINDS: &[&str] = &[
    "default_method_clause",
    "delete_method_clause",
    "pure_virtual_clause",
];

/// Whether a trailing clause makes a bodiless function a definition.
pub(super) fn trailer_defines(trailer: &str) -> bool {
    matches!(trailer, "= default" | "= delete")
}

/// Strip `tail` off the end of `text`, falling back to its last occurrence.
fn head_before<'a>(text: &'a str, tail: &str) -> &'a str {
    text.strip_suffix(tail)
        .or_else(|| text.rfind(tail).map(|at| &text[..at]))
        .unwrap_or(text)
}

/// Declared name of a function definition, including any `Scope::` prefix.
fn definition_name<D: Doc>(children: &[Node<D>]) -> Option<String> {
    if let Some(name) = children
        .iter()
        .find_map(find_function_declarator)
        .and_then(|declarator| function_declarator_name(&declarator))
    {
        return Some(name);
    }
    // Conversion operators: `operator bool() const`, `Foo::operator int()`.
    children
        .iter()
        .find(|c| matches!(c.kind().as_ref(), "operator_cast" | "qualified_identifier"))
        .map(|cast| cast_name(&cast.text()))
}

impl Lowering {
    pub(super) fn lower_function_definition<D: Doc>(
        &mut self,
        node: &Node<D>,
        scope: &Scope,
        access: Option<Access>,
        template: Option<&str>,
    ) {
        let children: Vec<_> = node.children().collect();
        let Some(full_name) = definition_name(&children) else {
            tracing::debug!(
                line = node.start_pos().line() + 1,
                "function definition without a recognisable declarator"
            );
            return;
        };
        let (qualifiers, name) = split_qualified(&full_name);

        let text = node.text();
        let body = children
            .iter()
            .find(|c| BODY_KINDS.contains(&c.kind().as_ref()))
            .map(|body| body.text().to_string());
        let clause = children
            .iter()
            .find(|c| CLAUSE_KINDS.contains(&c.kind().as_ref()))
            .map(|clause| clause.text().to_string());

        let (head, trailer) = match (&body, &clause) {
            (Some(body), _) => (head_before(&text, body), None),
            (None, Some(clause)) => {
                let trailer = normalize_ws(clause.trim_end().trim_end_matches(';'));
                (head_before(&text, clause), Some(trailer))
            }
            (None, None) => (text.trim_end().trim_end_matches(';'), None),
        };
        let is_definition = body.is_some() || trailer.as_deref().is_some_and(trailer_defines);
        let callable = Callable {
            signature: normalize_ws(head),
            body,
            trailer,
            is_definition,
        };

        let kind = match scope.record {
            Some(parent_record) if qualifiers.is_empty() => DeclKind::Method(MethodDecl {
                parent_record,
                callable,
                redeclares: None,
            }),
            _ => DeclKind::Function(FunctionDecl {
                callable,
                qualifier: (!qualifiers.is_empty()).then(|| qualifiers.join("::")),
            }),
        };

        let id = self.builder.push(
            scope.id,
            NewDecl::new(name, kind)
                .with_access(access)
                .with_template(template.map(String::from))
                .with_lines(line_span(node)),
        );

        if !qualifiers.is_empty() {
            self.pending.push(PendingLink {
                id,
                qualifiers,
                namespace: scope.path.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn head_before_prefers_suffix() {
        assert_eq!(head_before("void f() { }", "{ }"), "void f() ");
        assert_eq!(head_before("void f() {} // c", "{}"), "void f() ");
        assert_eq!(head_before("void f()", "{}"), "void f()");
    }

    #[test]
    fn default_and_delete_define() {
        assert!(trailer_defines("= default"));
        assert!(trailer_defines("= delete"));
        assert!(!trailer_defines("= 0"));
    }
}
