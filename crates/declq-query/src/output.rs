//! Rendered query output.
//!
//! [`RenderedOutput`] is an ordered list of blocks. Its `Display` form is the
//! plain text written to stdout; its `Serialize` form is the JSON envelope.

use std::fmt;

use declq_core::{DeclId, Target};
use serde::Serialize;

/// Which kind of match a closing marker terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerScope {
    Class,
    Symbol,
}

impl MarkerScope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Symbol => "symbol",
        }
    }
}

impl fmt::Display for MarkerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    /// Canonical text of a matched declaration.
    Declaration {
        id: DeclId,
        kind: &'static str,
        qualified_name: String,
        text: String,
    },
    /// An out-of-line member definition printed under its owning record.
    LinkedDefinition {
        id: DeclId,
        owner: DeclId,
        qualified_name: String,
        text: String,
    },
    ClosingMarker { scope: MarkerScope, name: String },
}

impl Block {
    /// Text of the block without its trailing separator.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Declaration { text, .. } | Self::LinkedDefinition { text, .. } => text.clone(),
            Self::ClosingMarker { scope, name } => format!("// ---- end of {scope} {name} ----"),
        }
    }

    #[must_use]
    pub const fn is_marker(&self) -> bool {
        matches!(self, Self::ClosingMarker { .. })
    }
}

/// All blocks produced by one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedOutput {
    target: Target,
    source: Option<String>,
    blocks: Vec<Block>,
}

impl RenderedOutput {
    #[must_use]
    pub const fn empty(target: Target, source: Option<String>) -> Self {
        Self {
            target,
            source,
            blocks: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Display for RenderedOutput {
    /// Declarations and linked definitions end with a newline; closing
    /// markers end with a blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            let separator = if block.is_marker() { "\n\n" } else { "\n" };
            write!(f, "{}{separator}", block.text())?;
        }
        Ok(())
    }
}
