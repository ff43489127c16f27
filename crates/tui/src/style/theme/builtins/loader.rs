//! Parsing of the bundled theme definitions.

use anyhow::{Context, Result, bail, ensure};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

/// Every bundled scheme plus the one to use when none is named.
#[derive(Debug)]
pub(super) struct Palette {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

impl Palette {
	/// Parse all definitions in `dir`, in path order so the result is
	/// stable regardless of embedding order.
	pub(super) fn from_sources(dir: &Dir) -> Result<Self> {
		let mut sources: Vec<_> = dir.files().collect();
		sources.sort_by(|a, b| a.path().cmp(b.path()));

		let mut documents = Vec::with_capacity(sources.len());
		for file in sources {
			let path = file.path();
			let text = file
				.contents_utf8()
				.with_context(|| format!("{path:?} is not valid UTF-8"))?;
			let definition: ThemeFile = toml::from_str(text)
				.with_context(|| format!("malformed theme definition {path:?}"))?;
			documents.push(definition.resolve()?);
		}

		Self::from_documents(documents)
	}

	fn from_documents(documents: Vec<(ThemeRegistration, bool)>) -> Result<Self> {
		ensure!(!documents.is_empty(), "no theme definitions found");

		let defaults: Vec<&str> = documents
			.iter()
			.filter(|(_, is_default)| *is_default)
			.map(|(registration, _)| registration.name.as_str())
			.collect();
		if defaults.len() > 1 {
			bail!("more than one theme claims default: {}", defaults.join(", "));
		}

		let default_theme = documents
			.iter()
			.find(|(_, is_default)| *is_default)
			.map_or(documents[0].0.theme, |(registration, _)| registration.theme);

		Ok(Self {
			registrations: documents
				.into_iter()
				.map(|(registration, _)| registration)
				.collect(),
			default_theme,
		})
	}
}

/// One theme file as written, before any styles are interpreted.
#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: SlotTable,
}

/// The five style slots a scheme must fill.
#[derive(Debug, Deserialize)]
struct SlotTable {
	header: RawStyle,
	row_highlight: RawStyle,
	prompt: RawStyle,
	empty: RawStyle,
	highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawStyle {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl ThemeFile {
	fn resolve(self) -> Result<(ThemeRegistration, bool)> {
		let slot = |raw: &RawStyle, name: &str| {
			raw.resolve()
				.with_context(|| format!("theme `{}`, slot `{name}`", self.name))
		};
		let theme = Theme {
			header: slot(&self.styles.header, "header")?,
			row_highlight: slot(&self.styles.row_highlight, "row_highlight")?,
			prompt: slot(&self.styles.prompt, "prompt")?,
			empty: slot(&self.styles.empty, "empty")?,
			highlight: slot(&self.styles.highlight, "highlight")?,
		};

		let mut registration = ThemeRegistration::new(self.name, theme);
		for alias in self.aliases {
			let alias = alias.trim();
			if !alias.is_empty() {
				registration = registration.alias(alias);
			}
		}
		Ok((registration, self.default))
	}
}

impl RawStyle {
	fn resolve(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(color_from(fg)?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(color_from(bg)?);
		}
		for name in &self.modifiers {
			style = style.add_modifier(modifier_from(name)?);
		}
		Ok(style)
	}
}

/// Named colors accepted in theme files, after key normalization.
const NAMED_COLORS: &[(&str, Color)] = &[
	("reset", Color::Reset),
	("none", Color::Reset),
	("default", Color::Reset),
	("black", Color::Black),
	("red", Color::Red),
	("green", Color::Green),
	("yellow", Color::Yellow),
	("blue", Color::Blue),
	("magenta", Color::Magenta),
	("cyan", Color::Cyan),
	("gray", Color::Gray),
	("grey", Color::Gray),
	("dark_gray", Color::DarkGray),
	("dark_grey", Color::DarkGray),
	("light_red", Color::LightRed),
	("light_green", Color::LightGreen),
	("light_yellow", Color::LightYellow),
	("light_blue", Color::LightBlue),
	("light_magenta", Color::LightMagenta),
	("light_cyan", Color::LightCyan),
	("white", Color::White),
];

const MODIFIERS: &[(&str, Modifier)] = &[
	("bold", Modifier::BOLD),
	("dim", Modifier::DIM),
	("italic", Modifier::ITALIC),
	("underline", Modifier::UNDERLINED),
	("underlined", Modifier::UNDERLINED),
	("reverse", Modifier::REVERSED),
	("reversed", Modifier::REVERSED),
	("invert", Modifier::REVERSED),
	("inverted", Modifier::REVERSED),
	("hidden", Modifier::HIDDEN),
	("crossed_out", Modifier::CROSSED_OUT),
	("crossedout", Modifier::CROSSED_OUT),
	("strikethrough", Modifier::CROSSED_OUT),
];

/// `#rgb`/`#rrggbb` hex, `rgb(r, g, b)`, a 0-255 palette index, or a
/// name from [`NAMED_COLORS`].
fn color_from(text: &str) -> Result<Color> {
	let value = text.trim();

	if let Some(digits) = value.strip_prefix('#') {
		return hex_color(digits).with_context(|| format!("bad hex color `{value}`"));
	}
	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return rgb_color(body).with_context(|| format!("bad rgb() color `{value}`"));
	}
	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	let key = normalize_key(value);
	NAMED_COLORS
		.iter()
		.find(|(name, _)| *name == key)
		.map(|&(_, color)| color)
		.with_context(|| format!("unknown color `{value}`"))
}

fn hex_color(digits: &str) -> Result<Color> {
	let value = u32::from_str_radix(digits, 16).context("not a hex number")?;
	match digits.len() {
		// Each #rgb nibble doubles, as in CSS.
		3 => {
			let channel = |shift: u32| (((value >> shift) & 0xF) as u8) * 0x11;
			Ok(Color::Rgb(channel(8), channel(4), channel(0)))
		}
		6 => Ok(Color::Rgb(
			(value >> 16) as u8,
			(value >> 8) as u8,
			value as u8,
		)),
		other => bail!("expected 3 or 6 hex digits, found {other}"),
	}
}

fn rgb_color(body: &str) -> Result<Color> {
	let channels = body
		.split(',')
		.map(|part| {
			let part = part.trim();
			part.parse::<u8>()
				.with_context(|| format!("channel `{part}` is not 0-255"))
		})
		.collect::<Result<Vec<u8>>>()?;
	ensure!(channels.len() == 3, "expected three channels, found {}", channels.len());
	Ok(Color::Rgb(channels[0], channels[1], channels[2]))
}

fn modifier_from(text: &str) -> Result<Modifier> {
	let key = normalize_key(text);
	MODIFIERS
		.iter()
		.find(|(name, _)| *name == key)
		.map(|&(_, modifier)| modifier)
		.with_context(|| format!("unknown modifier `{text}`"))
}

fn normalize_key(value: &str) -> String {
	value.trim().to_lowercase().replace([' ', '-'], "_")
}
