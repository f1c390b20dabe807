//! # declq-query
//!
//! The declaration query engine. Two stateless passes over a read-only
//! [`SyntaxTree`](declq_core::SyntaxTree):
//!
//! 1. [`collect`] walks every declaration once, in pre-order, and keeps the
//!    ones whose name equals the target.
//! 2. [`render`] prints each match in canonical form. Record matches are
//!    followed by their out-of-line member definitions, found by a second
//!    scan of the top-level declarations, and every match ends with a
//!    closing marker.
//!
//! [`run_query`] ties both together and reports the no-match condition to a
//! [`DiagnosticSink`](declq_core::DiagnosticSink).

pub mod collect;
pub mod engine;
pub mod output;
pub mod render;

pub use collect::{MatchSet, collect};
pub use engine::{run_from_args, run_query};
pub use output::{Block, MarkerScope, RenderedOutput};
pub use render::{RenderOptions, linked_definitions, render};
