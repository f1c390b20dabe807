//! Class, struct, union, and enum specifiers.

use ast_grep_core::{Doc, Node};
use declq_core::{Access, DeclId, DeclKind, EnumDecl, NewDecl, RecordDecl, RecordTag};

use super::helpers::{is_preproc_block, line_span, normalize_ws, split_qualified};
use super::{Lowering, Scope};

const RECORD_NAME_KINDS: &[&str] = &["type_identifier", "template_type", "qualified_identifier"];

pub(super) fn record_tag(kind: &str) -> Option<RecordTag> {
    match kind {
        "class_specifier" => Some(RecordTag::Class),
        "struct_specifier" => Some(RecordTag::Struct),
        "union_specifier" => Some(RecordTag::Union),
        _ => None,
    }
}

/// Name of a record or enum specifier, empty when anonymous.
pub(super) fn specifier_name<D: Doc>(node: &Node<D>) -> (Vec<String>, String) {
    node.children()
        .find(|c| RECORD_NAME_KINDS.contains(&c.kind().as_ref()))
        .map(|name| split_qualified(&name.text()))
        .unwrap_or_default()
}

/// Whether a record or enum specifier carries its body.
pub(super) fn has_body<D: Doc>(node: &Node<D>) -> bool {
    node.children().any(|c| {
        matches!(
            c.kind().as_ref(),
            "field_declaration_list" | "enumerator_list"
        )
    })
}

impl Lowering {
    pub(super) fn lower_record<D: Doc>(
        &mut self,
        node: &Node<D>,
        scope: &Scope,
        access: Option<Access>,
        template: Option<&str>,
    ) -> Option<DeclId> {
        let tag = record_tag(node.kind().as_ref())?;
        let (qualifiers, name) = specifier_name(node);
        let children: Vec<_> = node.children().collect();

        let bases = children
            .iter()
            .find(|c| c.kind().as_ref() == "base_class_clause")
            .map(|clause| normalize_ws(clause.text().trim_start().trim_start_matches(':')));
        let body = children
            .iter()
            .find(|c| c.kind().as_ref() == "field_declaration_list");

        let id = self.builder.push(
            scope.id,
            NewDecl::new(
                name.clone(),
                DeclKind::Record(RecordDecl {
                    tag,
                    bases,
                    has_body: body.is_some(),
                }),
            )
            .with_access(access)
            .with_template(template.map(String::from))
            .with_lines(line_span(node)),
        );

        let mut path = scope.path.clone();
        path.extend(qualifiers);
        if !name.is_empty() {
            path.push(name.clone());
            let key = path.join("::");
            if body.is_some() || !self.records.contains_key(&key) {
                self.records.insert(key, id);
            }
        }

        if let Some(body) = body {
            let inner = Scope {
                id: Some(id),
                path,
                record: Some(id),
            };
            let mut current = tag.default_access();
            self.lower_record_body(body, &inner, &mut current);
        }
        Some(id)
    }

    /// Lower the members of a `field_declaration_list`, tracking the access
    /// label in effect.
    fn lower_record_body<D: Doc>(&mut self, container: &Node<D>, scope: &Scope, access: &mut Access) {
        for member in container.children() {
            let kind = member.kind();
            match kind.as_ref() {
                "access_specifier" => {
                    if let Some(label) = Access::from_label(&member.text()) {
                        *access = label;
                    }
                }
                k if is_preproc_block(k) => self.lower_record_body(&member, scope, access),
                _ => self.lower_item(&member, scope, Some(*access), None),
            }
        }
    }

    pub(super) fn lower_enum<D: Doc>(
        &mut self,
        node: &Node<D>,
        scope: &Scope,
        access: Option<Access>,
        template: Option<&str>,
    ) -> Option<DeclId> {
        let children: Vec<_> = node.children().collect();
        let (_, name) = specifier_name(node);
        let is_scoped = children
            .iter()
            .any(|c| matches!(c.kind().as_ref(), "class" | "struct"));
        let base = children
            .iter()
            .position(|c| c.kind().as_ref() == ":")
            .and_then(|colon| children.get(colon + 1))
            .map(|ty| normalize_ws(&ty.text()));
        let list = children
            .iter()
            .find(|c| c.kind().as_ref() == "enumerator_list");

        let id = self.builder.push(
            scope.id,
            NewDecl::new(
                name,
                DeclKind::Enum(EnumDecl {
                    is_scoped,
                    base,
                    has_body: list.is_some(),
                }),
            )
            .with_access(access)
            .with_template(template.map(String::from))
            .with_lines(line_span(node)),
        );

        for enumerator in list
            .into_iter()
            .flat_map(|list| list.children())
            .filter(|c| c.kind().as_ref() == "enumerator")
        {
            let parts: Vec<_> = enumerator.children().collect();
            let Some(ident) = parts.first() else {
                continue;
            };
            let value = parts
                .iter()
                .position(|c| c.kind().as_ref() == "=")
                .and_then(|eq| parts.get(eq + 1))
                .map(|value| normalize_ws(&value.text()));
            self.builder.push(
                Some(id),
                NewDecl::new(ident.text().to_string(), DeclKind::Enumerator { value })
                    .with_lines(line_span(&enumerator)),
            );
        }
        Some(id)
    }
}
