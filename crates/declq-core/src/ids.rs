//! Arena indices for declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-owning reference to a declaration inside a [`SyntaxTree`](crate::SyntaxTree).
///
/// Ids are minted by [`TreeBuilder`](crate::TreeBuilder) in creation order
/// and stay valid for the lifetime of the tree they were minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclId(u32);

impl DeclId {
    /// Position of the declaration in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}
