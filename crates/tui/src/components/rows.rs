//! Row builders for the named-code-point list and the font panel.

use ratatui::style::Style;
use ratatui::widgets::{Cell, Row};
use uglys_core::NamedIndex;

use crate::style::theme::Theme;

/// Build rows for the filtered named list: glyph, hex label, name.
///
/// `filtered` holds positions into the index, the representation the
/// core filter returns, so no entry data is copied here.
pub fn build_named_rows<'a>(
	filtered: &[usize],
	index: &'a NamedIndex,
	theme: &Theme,
) -> Vec<Row<'a>> {
	filtered
		.iter()
		.filter_map(|&position| index.get(position))
		.map(|entry| {
			let glyph = char::from_u32(entry.code_point)
				.unwrap_or('\u{FFFD}')
				.to_string();
			Row::new(vec![
				Cell::from(glyph).style(theme.highlight),
				Cell::from(format!("U+{:04X}", entry.code_point)),
				Cell::from(entry.name.as_str()),
			])
		})
		.collect()
}

/// Build single-column rows for the supported-fonts panel.
pub fn build_font_rows<'a>(families: &'a [String]) -> Vec<Row<'a>> {
	families
		.iter()
		.map(|family| Row::new(vec![Cell::from(family.as_str()).style(Style::default())]))
		.collect()
}

#[cfg(test)]
mod tests {
	use uglys_core::NamedEntry;

	use super::*;

	#[test]
	fn named_rows_follow_the_filtered_positions() {
		let index = NamedIndex::from_entries(vec![
			NamedEntry {
				code_point: 65,
				name: "LATIN CAPITAL LETTER A".into(),
			},
			NamedEntry {
				code_point: 0x2605,
				name: "BLACK STAR".into(),
			},
		]);
		let theme = Theme::default();

		assert_eq!(build_named_rows(&[0, 1], &index, &theme).len(), 2);
		assert_eq!(build_named_rows(&[1], &index, &theme).len(), 1);
		// Stale positions are skipped rather than panicking.
		assert_eq!(build_named_rows(&[7], &index, &theme).len(), 0);
	}
}
