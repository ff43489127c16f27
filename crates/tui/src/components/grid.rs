//! Glyph grid over the Basic Multilingual Plane.
//!
//! 16 columns by 4096 logical rows, one cell per code point. Only the
//! rows inside the viewport are materialized; addressing stays in full
//! grid coordinates (row = code point / 16, column = code point % 16).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use uglys_core::{BMP_LEN, CharInfo};
use unicode_width::UnicodeWidthStr;

use crate::style::theme::Theme;

/// Cells per grid row.
pub const GRID_COLUMNS: u32 = 16;

/// Total logical rows in the grid.
pub const GRID_ROWS: usize = (BMP_LEN / GRID_COLUMNS) as usize;

/// Screen columns per cell.
const CELL_WIDTH: usize = 3;

/// Width of the leading row-label column, including its trailing space.
const LABEL_WIDTH: usize = 7;

const COLUMN_HEADERS: [&str; GRID_COLUMNS as usize] = [
	"0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F",
];

/// Argument bundle for rendering the glyph grid.
pub struct GridContext<'a> {
	/// Currently selected code point.
	pub selected: u32,
	/// First visible grid row.
	pub offset_row: usize,
	pub title: &'a str,
	pub theme: &'a Theme,
}

/// Number of glyph rows that fit into the grid's outer area.
pub fn viewport_rows(area: Rect) -> usize {
	// Borders take two rows, the column header one more.
	(area.height as usize).saturating_sub(3)
}

/// Map a screen position inside the grid's outer area to a code point.
pub fn cell_at(area: Rect, offset_row: usize, column: u16, row: u16) -> Option<u32> {
	let inner_x = area.x.saturating_add(1);
	let inner_y = area.y.saturating_add(1);

	// First inner row is the column header.
	let body_y = inner_y.saturating_add(1);
	if row < body_y || row >= area.y.saturating_add(area.height.saturating_sub(1)) {
		return None;
	}
	let grid_row = offset_row + usize::from(row - body_y);
	if grid_row >= GRID_ROWS {
		return None;
	}

	let cells_x = inner_x.saturating_add(LABEL_WIDTH as u16);
	if column < cells_x {
		return None;
	}
	let grid_col = usize::from(column - cells_x) / CELL_WIDTH;
	if grid_col >= GRID_COLUMNS as usize {
		return None;
	}

	Some(grid_row as u32 * GRID_COLUMNS + grid_col as u32)
}

/// Render the visible slice of the glyph grid.
pub fn render_grid(frame: &mut Frame, area: Rect, ctx: GridContext<'_>) {
	let GridContext {
		selected,
		offset_row,
		title,
		theme,
	} = ctx;

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.chrome_fg()))
		.title(title.to_owned());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if inner.height == 0 || inner.width == 0 {
		return;
	}

	let mut lines = Vec::with_capacity(inner.height as usize);
	lines.push(header_line(theme));

	let visible = usize::from(inner.height).saturating_sub(1);
	for visible_row in 0..visible {
		let grid_row = offset_row + visible_row;
		if grid_row >= GRID_ROWS {
			break;
		}
		lines.push(grid_line(grid_row, selected, theme));
	}

	frame.render_widget(Paragraph::new(lines), inner);
}

fn header_line(theme: &Theme) -> Line<'static> {
	let mut spans = vec![Span::raw(" ".repeat(LABEL_WIDTH))];
	for header in COLUMN_HEADERS {
		spans.push(Span::styled(
			format!("{header:<CELL_WIDTH$}"),
			theme.header,
		));
	}
	Line::from(spans)
}

fn grid_line(grid_row: usize, selected: u32, theme: &Theme) -> Line<'static> {
	let base = grid_row as u32 * GRID_COLUMNS;
	let label = format!("U+{base:04X} ");
	let mut spans = vec![Span::styled(label, theme.header)];

	for col in 0..GRID_COLUMNS {
		let code_point = base + col;
		let info = CharInfo::lookup(code_point);
		let text = cell_text(&info);

		let style = if code_point == selected {
			theme.row_highlight
		} else if !info.is_defined {
			theme.empty
		} else {
			Style::default()
		};
		spans.push(Span::styled(text, style));
	}

	Line::from(spans)
}

/// A cell's printable text, padded to [`CELL_WIDTH`] screen columns.
///
/// Control characters and zero-width glyphs would corrupt the terminal
/// grid, so they degrade to a midpoint dot.
fn cell_text(info: &CharInfo) -> String {
	let glyph_width = info.display.width();
	if info.is_iso_control || glyph_width == 0 {
		return format!("{:<CELL_WIDTH$}", "·");
	}

	let pad = CELL_WIDTH.saturating_sub(glyph_width.min(CELL_WIDTH));
	format!("{}{}", info.display, " ".repeat(pad))
}
