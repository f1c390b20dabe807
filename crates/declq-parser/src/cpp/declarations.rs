//! Declarations without a body: prototypes, fields, variables, and aliases.

use ast_grep_core::{Doc, Node};
use declq_core::{Access, Callable, DeclKind, FunctionDecl, MethodDecl, NewDecl, VarDecl};

use super::functions::trailer_defines;
use super::helpers::{
    declarator_name, find_function_declarator, function_declarator_name, join_declarator,
    line_span, normalize_ws, split_decl_parts, split_qualified, RECORD_KINDS,
};
use super::records::{has_body, record_tag, specifier_name};
use super::{Lowering, Scope};

fn join_text<D: Doc>(nodes: &[Node<D>]) -> String {
    normalize_ws(
        &nodes
            .iter()
            .map(|n| n.text().to_string())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Text a type specifier contributes to the declarators that use it.
///
/// A specifier with a body is shortened to `struct Point`, since the body
/// is lowered as its own declaration.
fn prefix_text<D: Doc>(prefix: &[Node<D>]) -> String {
    let parts: Vec<String> = prefix
        .iter()
        .map(|node| {
            let kind = node.kind();
            let tag = record_tag(kind.as_ref())
                .map(|tag| tag.as_str())
                .or_else(|| (kind.as_ref() == "enum_specifier").then_some("enum"));
            match tag {
                Some(tag) if has_body(node) => {
                    let (_, name) = specifier_name(node);
                    if name.is_empty() {
                        normalize_ws(&node.text())
                    } else {
                        format!("{tag} {name}")
                    }
                }
                _ => node.text().to_string(),
            }
        })
        .collect();
    normalize_ws(&parts.join(" "))
}

fn is_type_specifier(kind: &str) -> bool {
    RECORD_KINDS.contains(&kind) || kind == "enum_specifier"
}

impl Lowering {
    /// Lower the specifier nodes of a declaration that introduce their own
    /// record or enum: any with a body, or a bare `class Foo;`.
    fn lower_prefix_types<D: Doc>(
        &mut self,
        prefix: &[Node<D>],
        scope: &Scope,
        access: Option<Access>,
        template: Option<&str>,
        standalone: bool,
    ) {
        for node in prefix {
            let kind = node.kind();
            if !is_type_specifier(kind.as_ref()) || !(standalone || has_body(node)) {
                continue;
            }
            let template = if standalone { template } else { None };
            if kind.as_ref() == "enum_specifier" {
                self.lower_enum(node, scope, access, template);
            } else {
                self.lower_record(node, scope, access, template);
            }
        }
    }

    pub(super) fn lower_declaration<D: Doc>(
        &mut self,
        node: &Node<D>,
        scope: &Scope,
        access: Option<Access>,
        template: Option<&str>,
    ) {
        let parts = split_decl_parts(node, false);
        self.lower_prefix_types(
            &parts.prefix,
            scope,
            access,
            template,
            parts.declarators.is_empty(),
        );

        let prefix = prefix_text(&parts.prefix);
        let prefix_end = parts.prefix.last().map(|n| n.range().end);
        let is_extern = parts.prefix.iter().any(|n| {
            n.kind().as_ref() == "storage_class_specifier" && n.text().as_ref() == "extern"
        });
        let lines = line_span(node);

        for (declarator, trailing) in &parts.declarators {
            let head = join_declarator(&prefix, prefix_end, declarator);
            let trailer = join_text(trailing);

            let (name, kind) = match find_function_declarator(declarator) {
                Some(function) => {
                    let full_name = function_declarator_name(&function).unwrap_or_default();
                    let (qualifiers, name) = split_qualified(&full_name);
                    let trailer = (!trailer.is_empty()).then_some(trailer);
                    let callable = Callable {
                        signature: head,
                        body: None,
                        is_definition: trailer.as_deref().is_some_and(trailer_defines),
                        trailer,
                    };
                    let kind = match scope.record {
                        Some(parent_record) => DeclKind::Method(MethodDecl {
                            parent_record,
                            callable,
                            redeclares: None,
                        }),
                        None => DeclKind::Function(FunctionDecl {
                            callable,
                            qualifier: (!qualifiers.is_empty()).then(|| qualifiers.join("::")),
                        }),
                    };
                    (name, kind)
                }
                None => {
                    let var = VarDecl {
                        text: normalize_ws(&format!("{head} {trailer}")),
                        is_extern,
                    };
                    let kind = if scope.record.is_some() {
                        DeclKind::Field(var)
                    } else {
                        DeclKind::Variable(var)
                    };
                    (declarator_name(declarator), kind)
                }
            };

            self.builder.push(
                scope.id,
                NewDecl::new(name, kind)
                    .with_access(access)
                    .with_template(template.map(String::from))
                    .with_lines(lines),
            );
        }
    }

    pub(super) fn lower_typedef<D: Doc>(
        &mut self,
        node: &Node<D>,
        scope: &Scope,
        access: Option<Access>,
        template: Option<&str>,
    ) {
        let parts = split_decl_parts(node, true);
        self.lower_prefix_types(&parts.prefix, scope, access, None, false);
        let prefix = prefix_text(&parts.prefix);
        let prefix_end = parts.prefix.last().map(|n| n.range().end);

        for (declarator, trailing) in &parts.declarators {
            let declared = join_declarator(&prefix, prefix_end, declarator);
            let text = normalize_ws(&format!("typedef {declared} {}", join_text(trailing)));
            self.builder.push(
                scope.id,
                NewDecl::new(declarator_name(declarator), DeclKind::TypeAlias { text })
                    .with_access(access)
                    .with_template(template.map(String::from))
                    .with_lines(line_span(node)),
            );
        }
    }

    pub(super) fn lower_alias<D: Doc>(
        &mut self,
        node: &Node<D>,
        scope: &Scope,
        access: Option<Access>,
        template: Option<&str>,
    ) {
        let Some(name) = node
            .children()
            .find(|c| c.kind().as_ref() == "type_identifier")
            .map(|c| c.text().to_string())
        else {
            return;
        };
        let text = normalize_ws(node.text().trim_end().trim_end_matches(';'));
        self.builder.push(
            scope.id,
            NewDecl::new(name, DeclKind::TypeAlias { text })
                .with_access(access)
                .with_template(template.map(String::from))
                .with_lines(line_span(node)),
        );
    }

    /// Members kept as written: friend declarations, using-declarations,
    /// and `static_assert`s.
    pub(super) fn lower_verbatim<D: Doc>(
        &mut self,
        node: &Node<D>,
        scope: &Scope,
        access: Option<Access>,
        template: Option<&str>,
    ) {
        let text = normalize_ws(node.text().trim_end().trim_end_matches(';'));
        self.builder.push(
            scope.id,
            NewDecl::new(String::new(), DeclKind::Verbatim { text })
                .with_access(access)
                .with_template(template.map(String::from))
                .with_lines(line_span(node)),
        );
    }
}
