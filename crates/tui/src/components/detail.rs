//! Character property table for the detail pane.

use ratatui::widgets::{Cell, Row};
use uglys_core::CharInfo;

use crate::style::theme::Theme;

/// Label/value pairs for every property the detail pane shows, in the
/// order the explorer has always listed them.
pub fn detail_entries(info: &CharInfo) -> Vec<(&'static str, String)> {
	vec![
		("Character", info.printable_display()),
		(
			"Name",
			info.name.clone().unwrap_or_else(|| "—".to_string()),
		),
		(
			"Code Point",
			format!("{} ({})", info.code_point, info.hex_label()),
		),
		("Is Defined", flag(info.is_defined)),
		("Is BMP", flag(info.is_bmp)),
		("Is ISO Control", flag(info.is_iso_control)),
		("Is Mirrored", flag(info.is_mirrored)),
		("Is Digit", flag(info.is_digit)),
		("Is Letter", flag(info.is_letter)),
		("Is Alphabetic", flag(info.is_alphabetic)),
		("Is Ideographic", flag(info.is_ideographic)),
		("Is Space Character", flag(info.is_space_char)),
		("Is White Space", flag(info.is_whitespace)),
		("Is Lower Case", flag(info.is_lower_case)),
		("Is Title Case", flag(info.is_title_case)),
		("Is Upper Case", flag(info.is_upper_case)),
	]
}

/// Build the detail pane rows, two property columns per row to keep the
/// pane short.
pub fn build_detail_rows<'a>(info: &CharInfo, theme: &Theme) -> Vec<Row<'a>> {
	let entries = detail_entries(info);
	entries
		.chunks(2)
		.map(|pair| {
			let mut cells = Vec::with_capacity(4);
			for (label, value) in pair {
				cells.push(Cell::from(*label).style(theme.header));
				cells.push(Cell::from(value.clone()).style(theme.highlight));
			}
			while cells.len() < 4 {
				cells.push(Cell::from(""));
			}
			Row::new(cells)
		})
		.collect()
}

fn flag(value: bool) -> String {
	if value { "yes" } else { "no" }.to_string()
}
