//! Definition linker and renderer.

mod body;
mod canonical;

use declq_core::{DeclId, PrintStyle, SyntaxTree};
use serde::{Deserialize, Serialize};

use crate::collect::MatchSet;
use crate::output::{Block, MarkerScope, RenderedOutput};

/// How declarations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub style: PrintStyle,
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: PrintStyle::Full,
            indent_width: 4,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub const fn terse() -> Self {
        Self {
            style: PrintStyle::Terse,
            indent_width: 4,
        }
    }

    #[must_use]
    pub const fn with_indent(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }
}

/// Out-of-line member definitions of `record`, in top-level order.
///
/// Only direct children of the translation unit are scanned. A definition
/// qualifies when it is a method owned by `record`, is a definition, and
/// sits outside the record's body; in-body definitions are already part of
/// the record's own text.
#[must_use]
pub fn linked_definitions(tree: &SyntaxTree, record: DeclId) -> Vec<DeclId> {
    tree.top_level()
        .filter(|decl| {
            decl.as_method()
                .is_some_and(|method| method.parent_record == record)
                && decl.is_definition()
                && decl.is_out_of_line()
        })
        .map(|decl| decl.id)
        .collect()
}

/// Render every match in `matches`, in order.
///
/// Each match yields its declaration block; a record match is followed by
/// its linked definitions. Every match ends with a closing marker, `class`
/// for records and `symbol` for everything else.
#[must_use]
pub fn render(tree: &SyntaxTree, matches: &MatchSet, options: &RenderOptions) -> RenderedOutput {
    let mut output = RenderedOutput::empty(
        matches.target().clone(),
        tree.source_name().map(String::from),
    );

    for decl in matches.iter().filter_map(|id| tree.get(id)) {
        output.push(Block::Declaration {
            id: decl.id,
            kind: decl.kind_label(),
            qualified_name: tree.qualified_name(decl.id),
            text: canonical::print(tree, decl, options),
        });

        let scope = if decl.is_record() {
            let linked = linked_definitions(tree, decl.id);
            tracing::debug!(
                record = %tree.qualified_name(decl.id),
                linked = linked.len(),
                "rendering record with out-of-line definitions"
            );
            for definition in linked.into_iter().filter_map(|id| tree.get(id)) {
                output.push(Block::LinkedDefinition {
                    id: definition.id,
                    owner: decl.id,
                    qualified_name: tree.qualified_name(definition.id),
                    text: canonical::print(tree, definition, options),
                });
            }
            MarkerScope::Class
        } else {
            MarkerScope::Symbol
        };
        output.push(Block::ClosingMarker {
            scope,
            name: decl.name.clone(),
        });
    }
    output
}
