use std::path::PathBuf;

use clap::{
	ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "uglys",
	version,
	about = "Interactive explorer for Unicode code points",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `uglys` binary.
pub(crate) struct CliArgs {
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial name filter (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'c',
		long = "code-point",
		value_name = "CODE",
		help = "Code point to select at startup: U+XXXX, 0xXXXX, or decimal (default: U+0041)"
	)]
	pub(crate) code_point: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		env = "UGLYS_THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long = "list-themes", help = "List available theme names and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		env = "UGLYS_LOG",
		help = "Write debug logs to this file (default: logging disabled)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats for the final selection.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_to_plain_output() {
		let parsed = CliArgs::parse_from(["uglys"]);
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.query.is_none());
		assert!(!parsed.list_themes);
	}

	#[test]
	fn accepts_the_full_flag_set() {
		let parsed = CliArgs::parse_from([
			"uglys",
			"-q",
			"arrow",
			"--code-point",
			"U+2605",
			"--theme",
			"light",
			"--output",
			"json",
		]);
		assert_eq!(parsed.query.as_deref(), Some("arrow"));
		assert_eq!(parsed.code_point.as_deref(), Some("U+2605"));
		assert_eq!(parsed.theme.as_deref(), Some("light"));
		assert_eq!(parsed.output, OutputFormat::Json);
	}
}
