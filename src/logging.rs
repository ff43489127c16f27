//! Optional file logging.
//!
//! The terminal stays owned by the UI, so logs never go to stdout;
//! passing `--log-file` routes the `log` facade into a file instead.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Install the file logger when a path is given; otherwise logging
/// stays disabled and `log` macros are no-ops.
pub(crate) fn initialize(log_file: Option<&Path>) -> Result<()> {
	let Some(path) = log_file else {
		return Ok(());
	};

	let file = File::create(path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;
	let config = ConfigBuilder::new().set_target_level(LevelFilter::Error).build();
	WriteLogger::init(LevelFilter::Debug, config, file).context("failed to install logger")?;
	log::debug!("logging initialized");
	Ok(())
}
