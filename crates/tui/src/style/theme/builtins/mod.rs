//! Color schemes embedded at compile time.
//!
//! Every `.toml` file under `themes/` describes one scheme: the five
//! style slots the explorer draws with, a canonical name, optional
//! aliases, and at most one `default = true` marker. The whole palette
//! is parsed once on first use and shared for the process lifetime; a
//! malformed bundled definition is a build defect and panics at startup
//! rather than limping along unstyled.

mod loader;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use loader::Palette;

use crate::style::theme::types::{Theme, ThemeRegistration};

static THEME_SOURCES: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

/// The scheme used when none is requested by name.
pub fn default_theme() -> Theme {
	palette().default_theme
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	palette().registrations.clone()
}

fn palette() -> &'static Palette {
	static PALETTE: OnceLock<Palette> = OnceLock::new();
	PALETTE.get_or_init(|| {
		Palette::from_sources(&THEME_SOURCES)
			.unwrap_or_else(|error| panic!("bundled theme definitions are invalid: {error:#}"))
	})
}
