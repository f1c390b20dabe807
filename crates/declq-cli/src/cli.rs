use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use declq_config::{MAX_INDENT_WIDTH, RenderConfig};
use declq_core::PrintStyle;
use declq_query::RenderOptions;

/// Output mode for rendered blocks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical source text with closing markers.
    #[default]
    Text,
    /// The rendered blocks as pretty-printed JSON.
    Json,
}

/// `--indent` accepts the same range as `render.indent_width`.
fn parse_indent(value: &str) -> Result<usize, String> {
    let width: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (1..=MAX_INDENT_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(format!("must be between 1 and {MAX_INDENT_WIDTH}"))
    }
}

/// Top-level CLI parser for the `declq` binary.
#[derive(Debug, Parser)]
#[command(
    name = "declq",
    version,
    about = "Print a C++ declaration, its out-of-line definitions, and a closing marker"
)]
pub struct Cli {
    /// C or C++ source file to search
    pub file: PathBuf,

    /// Declaration to print: `Name`, `class=Name` or `symbol=Name` (last wins)
    pub targets: Vec<String>,

    /// Print headers only, eliding bodies
    #[arg(long)]
    pub terse: bool,

    /// Spaces per nesting level
    #[arg(long, value_parser = parse_indent)]
    pub indent: Option<usize>,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra TOML config layered over the discovered files
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Flags override the loaded configuration.
    #[must_use]
    pub fn render_options(&self, config: &RenderConfig) -> RenderOptions {
        RenderOptions {
            style: if self.terse {
                PrintStyle::Terse
            } else {
                config.style
            },
            indent_width: self.indent.unwrap_or(config.indent_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clap_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn targets_are_optional_and_ordered() {
        let cli = Cli::try_parse_from(["declq", "a.cpp"]).expect("cli should parse");
        assert!(cli.targets.is_empty());

        let cli = Cli::try_parse_from(["declq", "a.cpp", "class=Foo", "symbol=bar"])
            .expect("cli should parse");
        assert_eq!(cli.targets, vec!["class=Foo", "symbol=bar"]);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from(["declq", "--terse", "--indent", "2", "a.cpp", "Foo"])
            .expect("cli should parse");
        let options = cli.render_options(&RenderConfig::default());
        assert_eq!(options.style, PrintStyle::Terse);
        assert_eq!(options.indent_width, 2);
    }

    #[test]
    fn config_applies_without_flags() {
        let cli = Cli::try_parse_from(["declq", "a.cpp", "Foo"]).expect("cli should parse");
        let config = RenderConfig {
            style: PrintStyle::Terse,
            indent_width: 8,
        };
        let options = cli.render_options(&config);
        assert_eq!(options.style, PrintStyle::Terse);
        assert_eq!(options.indent_width, 8);
    }

    #[test]
    fn indent_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["declq", "--indent", "0", "a.cpp"]).is_err());
        let too_wide = (MAX_INDENT_WIDTH + 1).to_string();
        assert!(Cli::try_parse_from(["declq", "--indent", too_wide.as_str(), "a.cpp"]).is_err());
        assert!(Cli::try_parse_from(["declq", "--indent", "two", "a.cpp"]).is_err());
    }

    #[test]
    fn indent_accepts_configured_maximum() {
        let widest = MAX_INDENT_WIDTH.to_string();
        let cli = Cli::try_parse_from(["declq", "--indent", widest.as_str(), "a.cpp", "Foo"])
            .expect("cli should parse");
        assert_eq!(cli.indent, Some(MAX_INDENT_WIDTH));
    }

    #[test]
    fn json_format_parses() {
        let cli = Cli::try_parse_from(["declq", "-f", "json", "a.cpp", "Foo"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["declq", "-q", "-v", "a.cpp"]).is_err());
    }
}
