//! Per-code-point Unicode property lookups.
//!
//! [`CharInfo`] wraps the character database behind one query: canonical
//! name, the boolean predicates the detail pane renders, and a display
//! string that is always safe to hand to the terminal. Lookups are total
//! over `0..=MAX_CODE_POINT`; unassigned values come back with absent
//! name and false flags rather than an error.
//!
//! Name data follows the Unicode database version bundled by the
//! `unicode_names2` crate. Notably U+0000 has no canonical name there
//! (some platforms report the "NULL" alias instead), which the tests
//! assert explicitly.

use icu_properties::CodePointSetData;
use icu_properties::props::{BidiMirrored, Ideographic};
use serde::Serialize;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Number of code points in the Basic Multilingual Plane.
pub const BMP_LEN: u32 = 0x1_0000;

/// Highest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Glyph shown for code points that have no valid scalar encoding.
const PLACEHOLDER: char = '\u{FFFD}';

/// Canonical name of a code point, if the character database has one.
///
/// Surrogate code points carry no name because they are not Unicode
/// scalar values.
pub fn name(code_point: u32) -> Option<String> {
	char::from_u32(code_point)
		.and_then(unicode_names2::name)
		.map(|name| name.to_string())
}

/// Parse code-point text into its numeric value.
///
/// Accepts the `U+XXXX` and `0xXXXX` hex notations and plain decimal,
/// case-insensitively and ignoring surrounding whitespace. Only the
/// grammar lives here; range policy belongs to the caller.
pub fn parse_code_point(input: &str) -> Option<u32> {
	let cleaned = input.trim().to_ascii_lowercase();
	if cleaned.is_empty() {
		return None;
	}
	let (digits, radix) = match cleaned
		.strip_prefix("u+")
		.or_else(|| cleaned.strip_prefix("0x"))
	{
		Some(hex) => (hex, 16),
		None => (cleaned.as_str(), 10),
	};
	u32::from_str_radix(digits, radix).ok()
}

/// Everything the explorer knows about a single code point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharInfo {
	/// The code point this record describes.
	pub code_point: u32,
	/// Canonical character name, absent for unnamed code points.
	pub name: Option<String>,
	/// One scalar value encoded as a renderable string.
	pub display: String,
	pub is_defined: bool,
	pub is_bmp: bool,
	pub is_iso_control: bool,
	pub is_mirrored: bool,
	pub is_digit: bool,
	pub is_letter: bool,
	pub is_alphabetic: bool,
	pub is_ideographic: bool,
	pub is_space_char: bool,
	pub is_whitespace: bool,
	pub is_lower_case: bool,
	pub is_title_case: bool,
	pub is_upper_case: bool,
}

impl CharInfo {
	/// Look up every property the explorer surfaces for `code_point`.
	///
	/// Values above [`MAX_CODE_POINT`] are a caller bug; in release
	/// builds they degrade to the unassigned defaults.
	pub fn lookup(code_point: u32) -> Self {
		debug_assert!(
			code_point <= MAX_CODE_POINT,
			"code point out of range: {code_point:#x}"
		);

		let scalar = char::from_u32(code_point);
		let category = scalar.map(UnicodeGeneralCategory::general_category);
		let group = scalar.map(UnicodeGeneralCategory::general_category_group);

		// Surrogates cannot be `char`s but are assigned (category Cs).
		let is_surrogate = (0xD800..=0xDFFF).contains(&code_point);
		let is_defined =
			is_surrogate || category.is_some_and(|c| c != GeneralCategory::Unassigned);

		Self {
			code_point,
			name: scalar.and_then(unicode_names2::name).map(|n| n.to_string()),
			display: scalar.unwrap_or(PLACEHOLDER).to_string(),
			is_defined,
			is_bmp: code_point < BMP_LEN,
			is_iso_control: scalar.is_some_and(char::is_control),
			is_mirrored: scalar
				.is_some_and(|ch| CodePointSetData::new::<BidiMirrored>().contains(ch)),
			is_digit: category == Some(GeneralCategory::DecimalNumber),
			is_letter: group == Some(GeneralCategoryGroup::Letter),
			is_alphabetic: scalar.is_some_and(char::is_alphabetic),
			is_ideographic: scalar
				.is_some_and(|ch| CodePointSetData::new::<Ideographic>().contains(ch)),
			is_space_char: matches!(
				category,
				Some(
					GeneralCategory::SpaceSeparator
						| GeneralCategory::LineSeparator
						| GeneralCategory::ParagraphSeparator
				)
			),
			is_whitespace: scalar.is_some_and(char::is_whitespace),
			is_lower_case: scalar.is_some_and(char::is_lowercase),
			is_title_case: category == Some(GeneralCategory::TitlecaseLetter),
			is_upper_case: scalar.is_some_and(char::is_uppercase),
		}
	}

	/// Code point formatted in the conventional `U+XXXX` notation.
	pub fn hex_label(&self) -> String {
		format!("U+{:04X}", self.code_point)
	}

	/// The glyph itself, or a readable stand-in when emitting it raw
	/// would corrupt the output stream.
	pub fn printable_display(&self) -> String {
		if self.is_iso_control {
			"(control)".to_string()
		} else {
			self.display.clone()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn code_point_text_parses_in_all_three_notations() {
		assert_eq!(parse_code_point("U+0041"), Some(0x41));
		assert_eq!(parse_code_point("0x2605"), Some(0x2605));
		assert_eq!(parse_code_point("65"), Some(65));
		assert_eq!(parse_code_point("  u+ffff "), Some(0xFFFF));

		assert_eq!(parse_code_point(""), None);
		assert_eq!(parse_code_point("U+"), None);
		assert_eq!(parse_code_point("star"), None);
	}

	#[test]
	fn latin_capital_a_has_expected_properties() {
		let info = CharInfo::lookup(65);
		assert_eq!(info.name.as_deref(), Some("LATIN CAPITAL LETTER A"));
		assert_eq!(info.display, "A");
		assert!(info.is_defined);
		assert!(info.is_letter);
		assert!(info.is_alphabetic);
		assert!(info.is_upper_case);
		assert!(!info.is_lower_case);
		assert!(!info.is_digit);
		assert!(!info.is_title_case);
		assert!(!info.is_iso_control);
	}

	#[test]
	fn nul_is_an_unnamed_control_character() {
		let info = CharInfo::lookup(0);
		// unicode_names2 has no canonical name for controls.
		assert_eq!(info.name, None);
		assert!(info.is_defined);
		assert!(info.is_iso_control);
		assert!(!info.is_letter);
	}

	#[test]
	fn surrogates_degrade_to_placeholder() {
		let info = CharInfo::lookup(0xD800);
		assert_eq!(info.name, None);
		assert_eq!(info.display, "\u{FFFD}");
		assert!(info.is_defined);
		assert!(info.is_bmp);
		assert!(!info.is_letter);
		assert!(!info.is_whitespace);
	}

	#[test]
	fn astral_code_points_encode_as_single_scalars() {
		let info = CharInfo::lookup(0x1F600);
		assert_eq!(info.name.as_deref(), Some("GRINNING FACE"));
		assert!(!info.is_bmp);
		let mut chars = info.display.chars();
		assert_eq!(chars.next().map(u32::from), Some(0x1F600));
		assert_eq!(chars.next(), None);
	}

	#[test]
	fn display_round_trips_across_the_bmp() {
		for code_point in 0..BMP_LEN {
			let info = CharInfo::lookup(code_point);
			let mut chars = info.display.chars();
			let first = chars.next().expect("display string is never empty");
			assert_eq!(chars.next(), None, "exactly one scalar for {code_point:#x}");
			if let Some(expected) = char::from_u32(code_point) {
				assert_eq!(first, expected);
			} else {
				assert_eq!(first, '\u{FFFD}');
			}
		}
	}

	#[test]
	fn mirrored_and_ideographic_flags() {
		assert!(CharInfo::lookup(u32::from('(')).is_mirrored);
		assert!(!CharInfo::lookup(65).is_mirrored);
		assert!(CharInfo::lookup(0x4E00).is_ideographic);
		assert!(!CharInfo::lookup(65).is_ideographic);
	}

	#[test]
	fn category_flags_cover_digits_and_spaces() {
		let five = CharInfo::lookup(u32::from('5'));
		assert!(five.is_digit);
		assert!(!five.is_letter);

		let space = CharInfo::lookup(0x20);
		assert!(space.is_space_char);
		assert!(space.is_whitespace);

		let titlecase = CharInfo::lookup(0x01C5); // LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON
		assert!(titlecase.is_title_case);
	}
}
