use std::process::ExitCode;

use clap::Parser;
use declq_config::DeclqConfig;

mod cli;
mod output;
mod query;
mod sink;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("declq error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    let config = DeclqConfig::load(cli.config.as_deref());
    let configured_filter = config.as_ref().map_or("warn", |config| config.log.filter.as_str());
    init_tracing(cli.quiet, cli.verbose, configured_filter)?;
    let config = config?;

    let options = cli.render_options(&config.render);
    let mut sink = sink::TracingSink::default();
    let mut stdout = std::io::stdout().lock();
    let code = query::handle(&cli, &options, &mut sink, &mut stdout)?;
    if sink.has_errors() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(code)
}

/// Logs go to stderr so stdout carries only rendered output.
fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DECLQ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
