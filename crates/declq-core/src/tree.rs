//! The translation-unit arena and its builder.
//!
//! A [`SyntaxTree`] is immutable once [`TreeBuilder::finish`] returns. Every
//! cross-reference between declarations (lexical scope, children, the owning
//! record of a method) is a [`DeclId`] into the same arena, so consumers can
//! hold plain shared references for the duration of a query.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::decl::{DeclKind, Declaration, LineSpan};
use crate::enums::Access;
use crate::ids::DeclId;

/// Root container for a single translation unit's declarations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyntaxTree {
    source_name: Option<String>,
    decls: Vec<Declaration>,
    roots: Vec<DeclId>,
}

impl SyntaxTree {
    /// File name or other label the tree was parsed from.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    #[must_use]
    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Direct children of the translation unit, in source order.
    pub fn top_level(&self) -> impl Iterator<Item = &Declaration> {
        self.roots.iter().filter_map(|id| self.get(*id))
    }

    /// Nested declarations of `id`, in source order.
    pub fn children(&self, id: DeclId) -> impl Iterator<Item = &Declaration> {
        self.get(id)
            .map(|decl| decl.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.get(*child))
    }

    /// Methods declared or defined inside a record's own body.
    pub fn methods_of(&self, record: DeclId) -> impl Iterator<Item = &Declaration> {
        self.children(record).filter(|decl| decl.as_method().is_some())
    }

    /// Pre-order traversal of every declaration at every depth.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// `ns::Foo::bar`-style name. Out-of-line methods qualify through their
    /// owning record rather than their lexical scope.
    #[must_use]
    pub fn qualified_name(&self, id: DeclId) -> String {
        let mut segments = Vec::new();
        let mut current = self.get(id);
        while let Some(decl) = current {
            if !decl.name.is_empty() {
                segments.push(decl.name.as_str());
            }
            let next = decl
                .as_method()
                .map(|method| method.parent_record)
                .or(decl.scope);
            current = next.and_then(|next| self.get(next));
        }
        segments.reverse();
        segments.join("::")
    }
}

impl Index<DeclId> for SyntaxTree {
    type Output = Declaration;

    fn index(&self, id: DeclId) -> &Declaration {
        &self.decls[id.index()]
    }
}

/// Iterator returned by [`SyntaxTree::walk`].
pub struct Walk<'t> {
    tree: &'t SyntaxTree,
    stack: Vec<DeclId>,
}

impl<'t> Iterator for Walk<'t> {
    type Item = &'t Declaration;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let Some(decl) = self.tree.get(id) else {
                continue;
            };
            self.stack.extend(decl.children.iter().rev().copied());
            return Some(decl);
        }
        None
    }
}

/// Everything about a declaration except its place in the arena.
#[derive(Debug, Clone)]
pub struct NewDecl {
    pub name: String,
    pub kind: DeclKind,
    pub access: Option<Access>,
    pub template_params: Option<String>,
    pub lines: LineSpan,
}

impl NewDecl {
    pub fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            access: None,
            template_params: None,
            lines: LineSpan::default(),
        }
    }

    #[must_use]
    pub const fn with_access(mut self, access: Option<Access>) -> Self {
        self.access = access;
        self
    }

    #[must_use]
    pub fn with_template(mut self, template_params: Option<String>) -> Self {
        self.template_params = template_params;
        self
    }

    #[must_use]
    pub const fn with_lines(mut self, lines: LineSpan) -> Self {
        self.lines = lines;
        self
    }
}

/// Mutable staging area used by front ends to assemble a [`SyntaxTree`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    source_name: Option<String>,
    decls: Vec<Declaration>,
    roots: Vec<DeclId>,
}

impl TreeBuilder {
    #[must_use]
    pub fn new(source_name: Option<String>) -> Self {
        Self {
            source_name,
            ..Self::default()
        }
    }

    /// Append a declaration under `scope` (or at the root) and return its id.
    ///
    /// An unknown `scope` id places the declaration at the root.
    pub fn push(&mut self, scope: Option<DeclId>, decl: NewDecl) -> DeclId {
        let id = DeclId::from_index(self.decls.len());
        let scope = scope.filter(|parent| parent.index() < self.decls.len());
        self.decls.push(Declaration {
            id,
            name: decl.name,
            kind: decl.kind,
            scope,
            children: Vec::new(),
            access: decl.access,
            template_params: decl.template_params,
            lines: decl.lines,
        });
        match scope {
            Some(parent) => self.decls[parent.index()].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    #[must_use]
    pub fn get(&self, id: DeclId) -> Option<&Declaration> {
        self.decls.get(id.index())
    }

    /// Patch a declaration's kind after the fact, e.g. to link an
    /// out-of-line definition once its owning record is known.
    pub fn set_kind(&mut self, id: DeclId, kind: DeclKind) {
        if let Some(decl) = self.decls.get_mut(id.index()) {
            decl.kind = kind;
        }
    }

    #[must_use]
    pub fn finish(self) -> SyntaxTree {
        SyntaxTree {
            source_name: self.source_name,
            decls: self.decls,
            roots: self.roots,
        }
    }
}
