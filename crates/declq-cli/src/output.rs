use std::io::Write;

use declq_query::RenderedOutput;

use crate::cli::OutputFormat;

/// Write rendered blocks in the requested format.
///
/// Text output is written verbatim, so an empty result writes nothing.
pub fn write_output(
    out: &mut dyn Write,
    rendered: &RenderedOutput,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{rendered}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(rendered)?)?,
    }
    out.flush()?;
    Ok(())
}
