//! Query entry points that report to a diagnostics sink.

use declq_core::{Diagnostic, DiagnosticSink, QueryError, SyntaxTree, Target};

use crate::collect::collect;
use crate::output::RenderedOutput;
use crate::render::{RenderOptions, render};

/// Collect and render `target`, reporting a warning when nothing matches.
///
/// An empty match set yields an empty [`RenderedOutput`]; nothing is
/// fabricated.
pub fn run_query(
    tree: &SyntaxTree,
    target: &Target,
    options: &RenderOptions,
    sink: &mut dyn DiagnosticSink,
) -> RenderedOutput {
    let matches = collect(tree, target);
    if matches.is_empty() {
        let source = tree.source_name().unwrap_or("<input>");
        sink.report(Diagnostic::warning(format!(
            "no declaration named '{target}' found in {source}"
        )));
        return RenderedOutput::empty(target.clone(), tree.source_name().map(String::from));
    }
    render(tree, &matches, options)
}

/// Resolve the target from plugin-style arguments, then run the query.
///
/// # Errors
/// Returns [`QueryError::MissingTarget`] when no usable target was supplied.
/// The condition is also reported to `sink` at error severity and the tree
/// is never traversed.
pub fn run_from_args<I, S>(
    tree: &SyntaxTree,
    args: I,
    options: &RenderOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<RenderedOutput, QueryError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let target = Target::from_args(args).inspect_err(|err| {
        sink.report(Diagnostic::error(err.to_string()));
    })?;
    Ok(run_query(tree, &target, options, sink))
}
