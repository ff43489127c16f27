//! Aggregate dataset and outcome types shared between the binary and
//! the terminal UI.

use serde::Serialize;

use crate::fonts::FontCatalog;
use crate::index::NamedIndex;
use crate::properties::CharInfo;
use crate::suggest;

/// Everything the explorer UI needs, built once before the terminal
/// becomes interactive so no partial index is ever shown.
pub struct ExplorerData {
	/// The named code-point index (immutable after construction).
	pub index: NamedIndex,
	/// Alphabetical suggestion seeds for the query prompt.
	pub suggestions: Vec<String>,
	/// Installed font families and their glyph coverage.
	pub fonts: FontCatalog,
	/// Query text the UI starts with.
	pub initial_query: String,
	/// Code point the grid selects on startup.
	pub initial_code_point: u32,
}

impl ExplorerData {
	/// Scan the character database and the system fonts.
	pub fn load() -> Self {
		let index = NamedIndex::build();
		let suggestions = suggest::suggestions(&index);
		let fonts = FontCatalog::load_system();
		Self {
			index,
			suggestions,
			fonts,
			initial_query: String::new(),
			// Start on a glyph every font can show, as the original did.
			initial_code_point: 65,
		}
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	pub fn with_initial_code_point(mut self, code_point: u32) -> Self {
		self.initial_code_point = code_point;
		self
	}
}

/// The code point the user accepted, with the context worth printing.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
	#[serde(flatten)]
	pub info: CharInfo,
	/// Families able to render the selected glyph.
	pub fonts: Vec<String>,
}

/// Result of one explorer session.
#[derive(Debug, Clone, Serialize)]
pub struct ExploreOutcome {
	/// Whether the user accepted a selection or cancelled.
	pub accepted: bool,
	pub selection: Option<Selection>,
	/// The query text at exit.
	pub query: String,
}
