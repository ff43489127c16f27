//! Keyboard and mouse handling.

use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use uglys_core::{BMP_LEN, ExploreOutcome};

use crate::app::App;
use crate::app::state::Pane;
use crate::components::grid;

/// Rows a wheel tick scrolls in the grid.
const GRID_SCROLL_STEP: i64 = 3;

impl App<'_> {
	/// Handle one key event. Returns `Some` when the session ends.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ExploreOutcome>> {
		if self.goto.is_some() {
			self.handle_goto_key(key);
			return Ok(None);
		}

		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Enter => return Ok(Some(self.outcome(true))),
			KeyCode::Tab => self.focus = self.focus.next(),
			KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.cycle_suggestion();
			}
			KeyCode::Char(':') => self.goto = Some(String::new()),
			KeyCode::Up => self.move_focused(-1),
			KeyCode::Down => self.move_focused(1),
			KeyCode::PageUp => self.page_focused(-1),
			KeyCode::PageDown => self.page_focused(1),
			KeyCode::Left if self.focus == Pane::Grid => {
				self.grid.move_by(-1);
				self.refresh_detail();
			}
			KeyCode::Right if self.focus == Pane::Grid => {
				self.grid.move_by(1);
				self.refresh_detail();
			}
			KeyCode::Home => self.jump_focused(true),
			KeyCode::End => self.jump_focused(false),
			_ => {
				if self.query_input.input(key) {
					self.suggestion_cursor = None;
					self.apply_filter();
				}
			}
		}
		Ok(None)
	}

	/// Handle one mouse event: hover tracking, wheel scrolling, and
	/// click-to-select in any pane.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		self.grid.update_hover(mouse.column, mouse.row);
		self.results.update_hover(mouse.column, mouse.row);
		self.fonts.update_hover(mouse.column, mouse.row);

		match mouse.kind {
			MouseEventKind::ScrollUp => self.scroll_hovered(-1),
			MouseEventKind::ScrollDown => self.scroll_hovered(1),
			MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
			_ => {}
		}
	}

	fn handle_goto_key(&mut self, key: KeyEvent) {
		let Some(buffer) = self.goto.as_mut() else {
			return;
		};
		match key.code {
			KeyCode::Esc => self.goto = None,
			KeyCode::Enter => {
				let buffer = self.goto.take().unwrap_or_default();
				match parse_code_point(&buffer) {
					Some(code_point) => {
						self.grid.select(code_point);
						self.refresh_detail();
						self.focus = Pane::Grid;
					}
					None => log::debug!("ignoring unparseable go-to input {buffer:?}"),
				}
			}
			KeyCode::Backspace => {
				if buffer.pop().is_none() {
					self.goto = None;
				}
			}
			KeyCode::Char(ch) if ch.is_ascii_alphanumeric() || ch == '+' => {
				buffer.push(ch);
			}
			_ => {}
		}
	}

	fn move_focused(&mut self, direction: i64) {
		match self.focus {
			Pane::Grid => {
				self.grid.move_by(direction * i64::from(grid::GRID_COLUMNS));
				self.refresh_detail();
			}
			Pane::Results => {
				self.results.move_by(direction);
				self.sync_grid_to_results();
			}
			Pane::Fonts => self.fonts.move_by(direction),
		}
	}

	fn page_focused(&mut self, pages: i64) {
		match self.focus {
			Pane::Grid => {
				self.grid.page(pages);
				self.refresh_detail();
			}
			Pane::Results => {
				self.results.move_by(pages * 10);
				self.sync_grid_to_results();
			}
			Pane::Fonts => self.fonts.move_by(pages * 10),
		}
	}

	fn jump_focused(&mut self, to_start: bool) {
		match self.focus {
			Pane::Grid => {
				self.grid
					.select(if to_start { 0 } else { BMP_LEN - 1 });
				self.refresh_detail();
			}
			Pane::Results => {
				if to_start {
					self.results.select_first();
				} else {
					self.results.select_last();
				}
				self.sync_grid_to_results();
			}
			Pane::Fonts => {
				if to_start {
					self.fonts.select_first();
				} else {
					self.fonts.select_last();
				}
			}
		}
	}

	fn scroll_hovered(&mut self, direction: i64) {
		if self.grid.hovered {
			self.grid.scroll_by(direction * GRID_SCROLL_STEP);
		} else if self.results.hovered {
			self.results.move_by(direction);
			self.sync_grid_to_results();
		} else if self.fonts.hovered {
			self.fonts.move_by(direction);
		}
	}

	fn click(&mut self, column: u16, row: u16) {
		if let Some(area) = self.grid.area
			&& let Some(code_point) = grid::cell_at(area, self.grid.offset_row, column, row)
		{
			self.grid.select(code_point);
			self.refresh_detail();
			self.focus = Pane::Grid;
			return;
		}
		if self.results.select_at(column, row) {
			self.sync_grid_to_results();
			self.focus = Pane::Results;
			return;
		}
		if self.fonts.select_at(column, row) {
			self.focus = Pane::Fonts;
		}
	}
}

/// Parse go-to input: `U+0041`, `0x41`, or decimal `65`, limited to the
/// Basic Multilingual Plane.
pub(crate) fn parse_code_point(text: &str) -> Option<u32> {
	uglys_core::parse_code_point(text).filter(|&value| value < BMP_LEN)
}
