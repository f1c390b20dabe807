//! Cross-cutting error types for declq.
//!
//! Front-end and configuration errors live in their own crates
//! (`ParserError`, `ConfigError`); they converge in `declq-cli` through `anyhow`.

use thiserror::Error;

/// Errors raised before or while preparing a declaration query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// No usable target name was supplied; the query never runs.
    #[error("no target name provided; pass `Name`, `class=Name` or `symbol=Name`")]
    MissingTarget,
}
