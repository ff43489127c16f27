//! Frame layout and per-pane rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph, TableState};

use crate::app::App;
use crate::app::state::Pane;
use crate::components::{
	GridContext, PromptContext, TableSpec, build_detail_rows, build_font_rows, build_named_rows,
	grid, render_grid, render_prompt, render_table,
};

/// Height of the bottom band: eight detail rows plus the border.
const DETAIL_PANE_HEIGHT: u16 = 10;

/// Marker appended to the focused pane's title.
const FOCUS_MARK: &str = " ●";

impl App<'_> {
	/// Draw the whole frame: prompt row, grid and results side by side,
	/// then the detail pane with the font panel beneath.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let bands = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(DETAIL_PANE_HEIGHT),
			])
			.split(area);

		let status = self.status_line();
		render_prompt(
			frame,
			PromptContext {
				input: &self.query_input,
				label: &self.ui.prompt,
				status: &status,
				area: bands[0],
				theme: &self.style.theme,
			},
		);

		let middle = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
			.split(bands[1]);
		self.render_grid_pane(frame, middle[0]);
		self.render_results_pane(frame, middle[1]);

		let bottom = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
			.split(bands[2]);
		self.render_detail_pane(frame, bottom[0]);
		self.render_fonts_pane(frame, bottom[1]);
	}

	fn render_grid_pane(&mut self, frame: &mut Frame, area: Rect) {
		self.grid.area = Some(area);
		self.grid.set_viewport_rows(grid::viewport_rows(area));

		let mut title = format!("{} — {}", self.ui.grid_title, self.detail.hex_label());
		if self.focus == Pane::Grid {
			title.push_str(FOCUS_MARK);
		}

		render_grid(
			frame,
			area,
			GridContext {
				selected: self.grid.selected,
				offset_row: self.grid.offset_row,
				title: &title,
				theme: &self.style.theme,
			},
		);
	}

	fn render_results_pane(&mut self, frame: &mut Frame, area: Rect) {
		self.results.area = Some(area);
		let inner_height = usize::from(area.height.saturating_sub(2));
		self.results.update_scrollbar(inner_height);

		let mut title = format!("{} ({})", self.ui.results_title, self.filtered.len());
		if self.focus == Pane::Results {
			title.push_str(FOCUS_MARK);
		}

		if self.filtered.is_empty() {
			render_empty_pane(frame, area, title, "no matching names", self);
			return;
		}

		let spec = TableSpec {
			headers: vec!["".into(), "Code".into(), "Name".into()],
			widths: vec![
				Constraint::Length(2),
				Constraint::Length(7),
				Constraint::Min(10),
			],
			rows: build_named_rows(&self.filtered, &self.data.index, &self.style.theme),
			title: Some(title),
		};
		let theme = self.style.theme;
		render_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			spec,
			&theme,
		);
	}

	fn render_detail_pane(&mut self, frame: &mut Frame, area: Rect) {
		let title = format!("{} {}", self.ui.detail_title, self.detail.hex_label());
		let spec = TableSpec {
			headers: Vec::new(),
			widths: vec![
				Constraint::Length(18),
				Constraint::Min(8),
				Constraint::Length(18),
				Constraint::Min(8),
			],
			rows: build_detail_rows(&self.detail, &self.style.theme),
			title: Some(title),
		};

		// The detail pane has no cursor; throwaway state keeps the
		// table widget happy.
		let mut table_state = TableState::default();
		let mut scrollbar_state = Default::default();
		let theme = self.style.theme;
		render_table(
			frame,
			area,
			&mut table_state,
			&mut scrollbar_state,
			spec,
			&theme,
		);
	}

	fn render_fonts_pane(&mut self, frame: &mut Frame, area: Rect) {
		self.fonts.area = Some(area);
		let inner_height = usize::from(area.height.saturating_sub(2));
		self.fonts.update_scrollbar(inner_height);

		let mut title = format!("{} ({})", self.ui.fonts_title, self.supported.len());
		if self.focus == Pane::Fonts {
			title.push_str(FOCUS_MARK);
		}

		if self.supported.is_empty() {
			render_empty_pane(frame, area, title, "no font coverage", self);
			return;
		}

		let spec = TableSpec {
			headers: Vec::new(),
			widths: vec![Constraint::Fill(1)],
			rows: build_font_rows(&self.supported),
			title: Some(title),
		};
		let theme = self.style.theme;
		render_table(
			frame,
			area,
			&mut self.fonts.table_state,
			&mut self.fonts.scrollbar_state,
			spec,
			&theme,
		);
	}
}

fn render_empty_pane(frame: &mut Frame, area: Rect, title: String, message: &str, app: &App<'_>) {
	let theme = &app.style.theme;
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.chrome_fg()))
		.title(title);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	frame.render_widget(Paragraph::new(message).style(theme.empty), inner);
}
