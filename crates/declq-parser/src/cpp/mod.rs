//! C++ lowering: ast-grep nodes to a declq syntax tree.
//!
//! Walks the translation unit top-down with a kind-based dispatcher,
//! pushing one declaration per named entity into a [`TreeBuilder`]. Record
//! bodies are walked with their access labels tracked so every member knows
//! its access. Qualified function definitions (`void Foo::a() {}`) are queued
//! and linked to their owning record after the walk, see [`linker`].

mod declarations;
mod functions;
mod helpers;
mod linker;
mod records;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use ast_grep_core::{AstGrep, Doc, Node};
use declq_core::{Access, DeclId, DeclKind, NewDecl, SyntaxTree, TreeBuilder};

use helpers::{is_preproc_block, line_span, normalize_ws, RECORD_KINDS};

/// Lower a parsed C++ translation unit into a [`SyntaxTree`].
pub(crate) fn lower<D: Doc>(root: &AstGrep<D>, source_name: Option<&str>) -> SyntaxTree {
    let mut lowering = Lowering::new(source_name);
    let root_node = root.root();
    let scope = Scope::translation_unit();
    for child in root_node.children() {
        lowering.lower_item(&child, &scope, None, None);
    }
    lowering.link_out_of_line();

    if lowering.error_nodes > 0 {
        tracing::warn!(
            source = source_name.unwrap_or("<input>"),
            error_nodes = lowering.error_nodes,
            "skipped unparseable regions while building declaration tree"
        );
    }
    lowering.builder.finish()
}

/// Lexical position while walking: the enclosing declaration, the name path
/// used to resolve qualified names, and the enclosing record, if any.
#[derive(Debug, Clone)]
struct Scope {
    id: Option<DeclId>,
    path: Vec<String>,
    record: Option<DeclId>,
}

impl Scope {
    const fn translation_unit() -> Self {
        Self {
            id: None,
            path: Vec::new(),
            record: None,
        }
    }

    fn enter(&self, id: DeclId, name: &str, is_record: bool) -> Self {
        let mut path = self.path.clone();
        if !name.is_empty() {
            path.push(name.to_string());
        }
        Self {
            id: Some(id),
            path,
            record: is_record.then_some(id),
        }
    }
}

/// A qualified definition waiting for its record to be known.
#[derive(Debug)]
struct PendingLink {
    id: DeclId,
    qualifiers: Vec<String>,
    namespace: Vec<String>,
}

struct Lowering {
    builder: TreeBuilder,
    /// Qualified record name to its defining declaration (forward declarations
    /// only when no definition has been seen).
    records: HashMap<String, DeclId>,
    pending: Vec<PendingLink>,
    error_nodes: usize,
}

impl Lowering {
    fn new(source_name: Option<&str>) -> Self {
        Self {
            builder: TreeBuilder::new(source_name.map(String::from)),
            records: HashMap::new(),
            pending: Vec::new(),
            error_nodes: 0,
        }
    }

    // ── Dispatcher ─────────────────────────────────────────────────

    fn lower_item<D: Doc>(
        &mut self,
        node: &Node<D>,
        scope: &Scope,
        access: Option<Access>,
        template: Option<&str>,
    ) {
        let kind = node.kind();
        match kind.as_ref() {
            "namespace_definition" => self.lower_namespace(node, scope),
            k if RECORD_KINDS.contains(&k) => {
                self.lower_record(node, scope, access, template);
            }
            "enum_specifier" => {
                self.lower_enum(node, scope, access, template);
            }
            "function_definition" => self.lower_function_definition(node, scope, access, template),
            "declaration" | "field_declaration" => {
                self.lower_declaration(node, scope, access, template);
            }
            "type_definition" => self.lower_typedef(node, scope, access, template),
            "alias_declaration" => self.lower_alias(node, scope, access, template),
            "template_declaration" => self.lower_template(node, scope, access, template),
            "linkage_specification" => self.lower_linkage(node, scope),
            "friend_declaration" | "using_declaration" | "static_assert_declaration" => {
                self.lower_verbatim(node, scope, access, template);
            }
            "attributed_declaration" => {
                for inner in node.children() {
                    if inner.kind().as_ref() != "attribute_declaration" {
                        self.lower_item(&inner, scope, access, template);
                    }
                }
            }
            k if is_preproc_block(k) => {
                for inner in node.children() {
                    self.lower_item(&inner, scope, access, template);
                }
            }
            "ERROR" => self.error_nodes += 1,
            _ => {}
        }
    }

    // ── Namespaces and linkage blocks ──────────────────────────────

    fn lower_namespace<D: Doc>(&mut self, node: &Node<D>, scope: &Scope) {
        let children: Vec<_> = node.children().collect();
        let is_inline = children.iter().any(|c| c.kind().as_ref() == "inline");

        // `namespace a::b {}` opens one namespace per segment.
        let names: Vec<String> = children
            .iter()
            .find(|c| {
                matches!(
                    c.kind().as_ref(),
                    "nested_namespace_specifier" | "namespace_identifier"
                )
            })
            .map(|c| {
                c.text()
                    .split("::")
                    .map(|segment| segment.trim().trim_start_matches("inline ").trim().to_string())
                    .filter(|segment| !segment.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec![String::new()]);

        let lines = line_span(node);
        let mut current = scope.clone();
        let last = names.len().saturating_sub(1);
        for (idx, name) in names.iter().enumerate() {
            let id = self.builder.push(
                current.id,
                NewDecl::new(
                    name.clone(),
                    DeclKind::Namespace {
                        is_inline: is_inline && idx == last,
                    },
                )
                .with_lines(lines),
            );
            current = current.enter(id, name, false);
        }

        let Some(body) = children
            .iter()
            .find(|c| c.kind().as_ref() == "declaration_list")
        else {
            return;
        };
        for child in body.children() {
            self.lower_item(&child, &current, None, None);
        }
    }

    /// `extern "C"` blocks are transparent: their contents belong to the
    /// enclosing scope.
    fn lower_linkage<D: Doc>(&mut self, node: &Node<D>, scope: &Scope) {
        for child in node.children() {
            match child.kind().as_ref() {
                "extern" | "string_literal" => {}
                "declaration_list" => {
                    for inner in child.children() {
                        self.lower_item(&inner, scope, None, None);
                    }
                }
                _ => self.lower_item(&child, scope, None, None),
            }
        }
    }

    // ── Templates ──────────────────────────────────────────────────

    fn lower_template<D: Doc>(
        &mut self,
        node: &Node<D>,
        scope: &Scope,
        access: Option<Access>,
        outer: Option<&str>,
    ) {
        let params = node
            .children()
            .find(|c| c.kind().as_ref() == "template_parameter_list")
            .map_or_else(|| "<>".to_string(), |p| normalize_ws(&p.text()));
        let prefix = match outer {
            Some(outer) => format!("{outer} template {params}"),
            None => format!("template {params}"),
        };

        for child in node.children() {
            match child.kind().as_ref() {
                "template" | "template_parameter_list" | "requires_clause" | ";" | "comment" => {}
                _ => self.lower_item(&child, scope, access, Some(&prefix)),
            }
        }
    }
}
