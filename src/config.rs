//! Resolution of command-line arguments into a validated configuration.

use std::path::PathBuf;

use uglys_core::BMP_LEN;

use crate::cli::CliArgs;

/// Validated settings for one explorer run.
#[derive(Debug, Clone)]
pub(crate) struct Config {
	pub(crate) query: String,
	pub(crate) code_point: Option<u32>,
	pub(crate) theme: Option<String>,
	pub(crate) log_file: Option<PathBuf>,
}

/// Errors produced while resolving the configuration.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
	#[error("unparseable code point {input:?}; expected U+XXXX, 0xXXXX, or decimal")]
	InvalidCodePoint { input: String },
	#[error("code point {value:#06X} is outside the Basic Multilingual Plane")]
	CodePointOutOfRange { value: u32 },
	#[error("unknown theme {name:?}; try --list-themes")]
	UnknownTheme { name: String },
}

/// Validate the raw arguments.
pub(crate) fn resolve(cli: &CliArgs) -> Result<Config, ConfigError> {
	let code_point = cli
		.code_point
		.as_deref()
		.map(parse_code_point)
		.transpose()?;

	if let Some(name) = &cli.theme
		&& uglys_tui::by_name(name).is_none()
	{
		return Err(ConfigError::UnknownTheme { name: name.clone() });
	}

	Ok(Config {
		query: cli.query.clone().unwrap_or_default(),
		code_point,
		theme: cli.theme.clone(),
		log_file: cli.log_file.clone(),
	})
}

/// Validate `U+XXXX`, `0xXXXX`, or decimal input as a BMP code point.
fn parse_code_point(input: &str) -> Result<u32, ConfigError> {
	let value =
		uglys_core::parse_code_point(input).ok_or_else(|| ConfigError::InvalidCodePoint {
			input: input.to_owned(),
		})?;
	if value >= BMP_LEN {
		return Err(ConfigError::CodePointOutOfRange { value });
	}
	Ok(value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_the_supported_notations() {
		assert_eq!(parse_code_point("U+0041").unwrap(), 0x41);
		assert_eq!(parse_code_point("0x2605").unwrap(), 0x2605);
		assert_eq!(parse_code_point("65").unwrap(), 65);
	}

	#[test]
	fn rejects_values_past_the_bmp() {
		assert!(matches!(
			parse_code_point("U+10000"),
			Err(ConfigError::CodePointOutOfRange { value: 0x10000 })
		));
	}

	#[test]
	fn rejects_unparseable_input() {
		assert!(matches!(
			parse_code_point("star"),
			Err(ConfigError::InvalidCodePoint { .. })
		));
		assert!(matches!(
			parse_code_point("U+"),
			Err(ConfigError::InvalidCodePoint { .. })
		));
	}
}
