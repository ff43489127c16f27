use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::render_scrollbar;
use crate::style::theme::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers; an empty vector renders a headerless table.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
}

impl TableSpec<'_> {
	fn has_header(&self) -> bool {
		!self.headers.is_empty()
	}

	/// Rows reserved above the body (header + separator, or none).
	pub fn header_rows(&self) -> usize {
		if self.has_header() { TABLE_HEADER_ROWS } else { 0 }
	}
}

/// Render the table inside a rounded border block.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.chrome_fg()));

	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	render_configured_table(frame, inner, table_state, scrollbar_state, theme, spec);
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let has_header = spec.has_header();
	let header_rows = spec.header_rows();
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header_style = Style::default().fg(theme.chrome_fg());

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let viewport_height = area.height as usize;
	let available_rows = viewport_height.saturating_sub(header_rows);
	let total_rows = spec.rows.len();
	let needs_scrollbar = total_rows > available_rows && available_rows > 0;

	let table_area = if needs_scrollbar {
		Rect {
			x: area.x,
			y: area.y,
			width: area.width.saturating_sub(1),
			height: area.height,
		}
	} else {
		area
	};

	let mut table = Table::new(spec.rows, widths)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);

	if has_header {
		let header = Row::new(header_cells)
			.style(header_style)
			.height(1)
			.bottom_margin(1);
		table = table.header(header);
	}

	frame.render_stateful_widget(table, table_area, table_state);

	if needs_scrollbar {
		render_scrollbar(frame, area, scrollbar_state, theme);
	}

	if has_header {
		render_header_separator(frame, table_area, theme, 1);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let sep_y = area.y + header_height;
	if sep_y >= area.y + area.height {
		return;
	}

	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: sep_y,
		width: area.width,
		height: 1,
	};
	if width <= 2 {
		let line = " ".repeat(width);
		frame.render_widget(Paragraph::new(line), sep_rect);
		return;
	}

	let middle = "─".repeat(width - 2);
	let middle_span = Span::styled(middle, Style::default().fg(theme.chrome_fg()));
	let spans = vec![Span::raw(" "), middle_span, Span::raw(" ")];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}
