mod cli;
mod config;
mod logging;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::ExploreWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in uglys_tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = config::resolve(&cli)?;
	logging::initialize(resolved.log_file.as_deref())?;

	run_explorer(cli.output, resolved)
}

/// Execute the explorer workflow and print output in the chosen format.
fn run_explorer(format: OutputFormat, config: config::Config) -> Result<()> {
	let workflow = ExploreWorkflow::from_config(config)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
