use anyhow::Result;
use uglys_core::{ExploreOutcome, ExplorerData};
use uglys_tui::App;

use crate::config::Config;

/// Coordinates building the dataset and running the interactive UI.
pub(crate) struct ExploreWorkflow {
	data: ExplorerData,
	theme: Option<String>,
}

impl ExploreWorkflow {
	/// Build the character index and scan the installed fonts. This is
	/// the slow part of startup and happens before the terminal enters
	/// raw mode.
	pub(crate) fn from_config(config: Config) -> Result<Self> {
		let Config {
			query,
			code_point,
			theme,
			log_file: _,
		} = config;

		let mut data = ExplorerData::load().with_initial_query(query);
		if let Some(code_point) = code_point {
			data = data.with_initial_code_point(code_point);
		}
		log::info!(
			"loaded {} named code points, {} font families",
			data.index.len(),
			data.fonts.families().len()
		);

		Ok(Self { data, theme })
	}

	pub(crate) fn run(self) -> Result<ExploreOutcome> {
		let mut app = App::new(self.data);
		if let Some(theme) = self.theme.as_deref().and_then(uglys_tui::by_name) {
			app.set_theme(theme);
		}
		app.run()
	}
}
