//! Traversal and match collection.

use declq_core::{DeclId, SyntaxTree, Target};
use serde::Serialize;

/// Declarations matching one target, in first-visit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSet {
    target: Target,
    matches: Vec<DeclId>,
}

impl MatchSet {
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub fn ids(&self) -> &[DeclId] {
        &self.matches
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DeclId> + '_ {
        self.matches.iter().copied()
    }
}

/// Collect every declaration named `target`, at any depth.
///
/// One pre-order traversal; an empty result is a normal outcome.
#[must_use]
pub fn collect(tree: &SyntaxTree, target: &Target) -> MatchSet {
    let matches: Vec<DeclId> = tree
        .walk()
        .filter(|decl| decl.name == target.as_str())
        .map(|decl| decl.id)
        .collect();
    tracing::debug!(target = %target, matches = matches.len(), "collected declarations");
    MatchSet {
        target: target.clone(),
        matches,
    }
}

#[cfg(test)]
mod tests {
    use declq_core::{DeclKind, NewDecl, RecordDecl, RecordTag, TreeBuilder};
    use pretty_assertions::assert_eq;

    use super::*;

    fn record() -> DeclKind {
        DeclKind::Record(RecordDecl {
            tag: RecordTag::Struct,
            bases: None,
            has_body: true,
        })
    }

    #[test]
    fn collects_every_depth_in_visit_order() {
        let mut builder = TreeBuilder::new(None);
        let first = builder.push(None, NewDecl::new("A", record()));
        let b = builder.push(None, NewDecl::new("B", record()));
        let nested = builder.push(Some(b), NewDecl::new("A", record()));
        let tree = builder.finish();

        let matches = collect(&tree, &Target::new("A").unwrap());
        assert_eq!(matches.ids(), &[first, nested]);
        assert_eq!(matches.target().as_str(), "A");
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let tree = TreeBuilder::new(None).finish();
        let matches = collect(&tree, &Target::new("Missing").unwrap());
        assert!(matches.is_empty());
        assert_eq!(matches.len(), 0);
    }
}
