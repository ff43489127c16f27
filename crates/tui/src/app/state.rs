//! The application struct and its state transitions.

use uglys_core::{CharInfo, ExploreOutcome, ExplorerData, Selection};

use crate::app::{GridState, TablePane};
use crate::components::tables::TABLE_HEADER_ROWS;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::StyleConfig;
use crate::style::theme::Theme;

/// Which pane keyboard navigation currently drives.
///
/// The query prompt is always live: printable keys edit the filter no
/// matter which pane has focus, the way the original explorer kept its
/// filter field hot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pane {
	Grid,
	Results,
	Fonts,
}

impl Pane {
	pub fn next(self) -> Self {
		match self {
			Pane::Grid => Pane::Results,
			Pane::Results => Pane::Fonts,
			Pane::Fonts => Pane::Grid,
		}
	}
}

/// Full state of one explorer session.
pub struct App<'a> {
	pub(crate) data: ExplorerData,
	pub(crate) query_input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	pub(crate) style: StyleConfig,
	pub(crate) focus: Pane,
	pub(crate) grid: GridState,
	pub(crate) results: TablePane,
	/// Positions into the index matching the current query.
	pub(crate) filtered: Vec<usize>,
	pub(crate) fonts: TablePane,
	/// Families covering the selected glyph, in catalog order.
	pub(crate) supported: Vec<String>,
	pub(crate) detail: CharInfo,
	/// Pending go-to-code-point input, `Some` while the mode is active.
	pub(crate) goto: Option<String>,
	/// Index of the last suggestion applied with ctrl-n.
	pub(crate) suggestion_cursor: Option<usize>,
}

impl App<'_> {
	pub fn new(data: ExplorerData) -> Self {
		let query_input = QueryInput::new(data.initial_query.clone());
		let filtered = data.index.filter(&data.initial_query);
		let mut results = TablePane::new(TABLE_HEADER_ROWS);
		results.set_content_len(filtered.len());

		let mut grid = GridState::default();
		grid.select(data.initial_code_point);

		let mut app = Self {
			detail: CharInfo::lookup(grid.selected),
			data,
			query_input,
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			focus: Pane::Grid,
			grid,
			results,
			filtered,
			fonts: TablePane::new(0),
			supported: Vec::new(),
			goto: None,
			suggestion_cursor: None,
		};
		app.refresh_detail();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style = StyleConfig::with_theme(theme);
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	/// Code point currently under the grid cursor.
	pub fn selected_code_point(&self) -> u32 {
		self.grid.selected
	}

	pub fn query(&self) -> &str {
		self.query_input.text()
	}

	/// Re-run the filter against the current query text and reset the
	/// results list to the top.
	pub(crate) fn apply_filter(&mut self) {
		self.filtered = self.data.index.filter(self.query_input.text());
		self.results.set_content_len(self.filtered.len());
		self.results.reset();
	}

	/// Point the grid at whatever the results list has selected.
	pub(crate) fn sync_grid_to_results(&mut self) {
		let Some(selected) = self.results.selected() else {
			return;
		};
		let Some(&position) = self.filtered.get(selected) else {
			return;
		};
		if let Some(entry) = self.data.index.get(position) {
			self.grid.select(entry.code_point);
			self.refresh_detail();
		}
	}

	/// Recompute the detail pane and the font panel for the cursor.
	pub(crate) fn refresh_detail(&mut self) {
		let code_point = self.grid.selected;
		self.detail = CharInfo::lookup(code_point);
		self.supported = self.data.fonts.supporting_families(code_point).to_vec();
		self.fonts.set_content_len(self.supported.len());
	}

	/// Replace the query with the next suggestion seed, wrapping at the
	/// end of the list. One of the seeds is the empty string, so
	/// cycling always passes through the unfiltered view.
	pub(crate) fn cycle_suggestion(&mut self) {
		if self.data.suggestions.is_empty() {
			return;
		}
		let next = match self.suggestion_cursor {
			Some(cursor) => (cursor + 1) % self.data.suggestions.len(),
			None => 0,
		};
		self.suggestion_cursor = Some(next);
		self.query_input.set_text(&self.data.suggestions[next]);
		self.apply_filter();
	}

	/// Text for the right side of the prompt row.
	pub(crate) fn status_line(&self) -> String {
		match &self.goto {
			Some(buffer) => format!("go to: {buffer}_"),
			None => format!("{}/{}", self.filtered.len(), self.data.index.len()),
		}
	}

	/// Snapshot the session for the caller: the cursor's character, its
	/// font coverage, and the query as it stood at exit.
	pub(crate) fn outcome(&self, accepted: bool) -> ExploreOutcome {
		let selection = accepted.then(|| Selection {
			info: self.detail.clone(),
			fonts: self.supported.clone(),
		});
		ExploreOutcome {
			accepted,
			selection,
			query: self.query_input.text().to_owned(),
		}
	}
}
