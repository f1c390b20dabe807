//! Out-of-line definition linking.
//!
//! A definition written as `void Foo::a() {}` is first lowered as a free
//! function carrying its qualifier. Once the whole file has been walked, each
//! qualifier is resolved against the records seen, searching from the
//! innermost enclosing namespace outward. The definition becomes a method of
//! the resolved record only when that record's body declares a method of the
//! same name; otherwise it stays a qualified free function.

use declq_core::{DeclId, DeclKind, MethodDecl};

use super::helpers::parameter_count;
use super::{Lowering, PendingLink};

impl Lowering {
    pub(super) fn link_out_of_line(&mut self) {
        for link in std::mem::take(&mut self.pending) {
            self.link_one(&link);
        }
    }

    fn link_one(&mut self, link: &PendingLink) {
        let Some(decl) = self.builder.get(link.id) else {
            return;
        };
        let DeclKind::Function(function) = &decl.kind else {
            return;
        };
        let Some(record) = self.resolve_record(&link.qualifiers, &link.namespace) else {
            tracing::debug!(
                name = %decl.name,
                qualifier = %link.qualifiers.join("::"),
                "qualified definition does not name a known record"
            );
            return;
        };

        let arity = parameter_count(&function.callable.signature);
        let candidates: Vec<(DeclId, usize)> = self
            .builder
            .get(record)
            .map(|owner| owner.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.builder.get(*child))
            .filter(|member| member.name == decl.name)
            .filter_map(|member| {
                member
                    .as_method()
                    .map(|method| (member.id, parameter_count(&method.callable.signature)))
            })
            .collect();

        if candidates.is_empty() {
            tracing::debug!(
                name = %decl.name,
                qualifier = %link.qualifiers.join("::"),
                "record declares no method of this name; keeping free function"
            );
            return;
        }

        let redeclares = candidates
            .iter()
            .find(|(_, count)| *count == arity)
            .or_else(|| candidates.first())
            .map(|(id, _)| *id);
        let callable = function.callable.clone();
        tracing::debug!(name = %decl.name, record = %record, "linked out-of-line definition");

        self.builder.set_kind(
            link.id,
            DeclKind::Method(MethodDecl {
                parent_record: record,
                callable,
                redeclares,
            }),
        );
    }

    /// Find the record named by `qualifiers`, trying each enclosing
    /// namespace prefix from the innermost outward.
    fn resolve_record(&self, qualifiers: &[String], namespace: &[String]) -> Option<DeclId> {
        (0..=namespace.len()).rev().find_map(|depth| {
            let key = namespace[..depth]
                .iter()
                .chain(qualifiers)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("::");
            self.records.get(&key).copied()
        })
    }
}
