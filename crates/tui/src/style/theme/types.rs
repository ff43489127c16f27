use ratatui::style::{Color, Style};

/// A theme containing styles for the explorer's UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for borders, headers, and separators.
	pub header: Style,
	/// Style for the selected row or grid cell.
	pub row_highlight: Style,
	/// Style for the prompt label.
	pub prompt: Style,
	/// Style for undefined code points and empty states.
	pub empty: Style,
	/// Style for emphasized values (glyphs, set property flags).
	pub highlight: Style,
}

impl Theme {
	/// Foreground used for chrome drawn outside widget styles.
	#[must_use]
	pub fn chrome_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}
}

/// A named theme that can be offered for selection.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The canonical name of the theme.
	pub name: String,
	/// The theme definition.
	pub theme: Theme,
	/// Alternate names accepted when selecting by name.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}
