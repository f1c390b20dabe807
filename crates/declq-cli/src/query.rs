//! The single `declq` command: resolve the target, parse, query, print.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use declq_core::{Diagnostic, DiagnosticSink, Target};
use declq_query::RenderOptions;

use crate::cli::Cli;
use crate::output::write_output;

/// Run one query and write its output to `out`.
///
/// A missing target is reported to `sink` and yields a failing exit code
/// before the file is opened. A target with no match is a warning only.
pub fn handle(
    cli: &Cli,
    options: &RenderOptions,
    sink: &mut dyn DiagnosticSink,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    let target = match Target::from_args(&cli.targets) {
        Ok(target) => target,
        Err(err) => {
            sink.report(Diagnostic::error(err.to_string()));
            return Ok(ExitCode::FAILURE);
        }
    };

    let tree = declq_parser::parse_file(&cli.file)
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;
    tracing::debug!(target = %target, decls = tree.len(), "running query");

    let rendered = declq_query::run_query(&tree, &target, options, sink);
    write_output(out, &rendered, cli.format)?;
    Ok(ExitCode::SUCCESS)
}
