//! Labels for the UI chrome.

/// Pane titles and the prompt label. Defaults match the explorer's
/// stock wording; the binary can override them before the app runs.
#[derive(Debug, Clone)]
pub struct UiLabels {
	pub prompt: String,
	pub grid_title: String,
	pub results_title: String,
	pub detail_title: String,
	pub fonts_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			prompt: "Filter".into(),
			grid_title: "Code points".into(),
			results_title: "Named code points".into(),
			detail_title: "Character".into(),
			fonts_title: "Fonts".into(),
		}
	}
}
