//! Visual styling utilities.
//!
//! Themes are the color schemes applied to the terminal UI; additional
//! styling knobs can be layered alongside them over time.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
