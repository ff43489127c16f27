//! Cursor and viewport state for the glyph grid pane.

use ratatui::layout::Rect;
use uglys_core::BMP_LEN;

use crate::components::{GRID_COLUMNS, point_in_rect};

const LAST_CODE_POINT: u32 = BMP_LEN - 1;
const LAST_ROW: usize = (BMP_LEN / GRID_COLUMNS) as usize - 1;

/// Selection cursor plus the vertical scroll window of the grid.
pub(crate) struct GridState {
	pub selected: u32,
	pub offset_row: usize,
	pub viewport_rows: usize,
	pub area: Option<Rect>,
	pub hovered: bool,
}

impl Default for GridState {
	fn default() -> Self {
		Self {
			selected: 0,
			offset_row: 0,
			viewport_rows: 1,
			area: None,
			hovered: false,
		}
	}
}

impl GridState {
	/// Moves the cursor to `code_point`, clamped to the Basic
	/// Multilingual Plane, and scrolls it into view.
	pub fn select(&mut self, code_point: u32) {
		self.selected = code_point.min(LAST_CODE_POINT);
		self.scroll_to_cursor();
	}

	/// Moves the cursor by `delta` code points.
	pub fn move_by(&mut self, delta: i64) {
		let target = i64::from(self.selected) + delta;
		self.selected = target.clamp(0, i64::from(LAST_CODE_POINT)) as u32;
		self.scroll_to_cursor();
	}

	/// Moves the cursor by whole viewports.
	pub fn page(&mut self, pages: i64) {
		let stride = self.viewport_rows.max(1) as i64 * i64::from(GRID_COLUMNS);
		self.move_by(pages * stride);
	}

	pub fn selected_row(&self) -> usize {
		(self.selected / GRID_COLUMNS) as usize
	}

	/// Record the viewport height measured during rendering. Only a
	/// changed height re-clamps the scroll offset; a steady-state
	/// refresh must not undo wheel scrolling away from the cursor.
	pub fn set_viewport_rows(&mut self, rows: usize) {
		let rows = rows.max(1);
		if rows == self.viewport_rows {
			return;
		}
		self.viewport_rows = rows;
		self.scroll_to_cursor();
	}

	/// Scrolls the viewport without moving the cursor.
	pub fn scroll_by(&mut self, delta: i64) {
		let target = self.offset_row as i64 + delta;
		self.offset_row = target.clamp(0, LAST_ROW as i64) as usize;
	}

	pub fn update_hover(&mut self, column: u16, row: u16) {
		self.hovered = self
			.area
			.is_some_and(|area| point_in_rect(column, row, area));
	}

	fn scroll_to_cursor(&mut self) {
		let row = self.selected_row();
		if row < self.offset_row {
			self.offset_row = row;
		}
		let viewport = self.viewport_rows.max(1);
		if row >= self.offset_row + viewport {
			self.offset_row = row + 1 - viewport;
		}
		self.offset_row = self.offset_row.min(LAST_ROW);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn select_clamps_to_bmp() {
		let mut grid = GridState::default();
		grid.select(0x5_0000);
		assert_eq!(grid.selected, LAST_CODE_POINT);
	}

	#[test]
	fn move_by_saturates_at_both_ends() {
		let mut grid = GridState::default();
		grid.move_by(-100);
		assert_eq!(grid.selected, 0);
		grid.select(LAST_CODE_POINT);
		grid.move_by(32);
		assert_eq!(grid.selected, LAST_CODE_POINT);
	}

	#[test]
	fn cursor_scrolls_into_view() {
		let mut grid = GridState::default();
		grid.set_viewport_rows(10);
		grid.select(0x0400);
		let row = grid.selected_row();
		assert!(grid.offset_row <= row);
		assert!(row < grid.offset_row + grid.viewport_rows);

		grid.select(0);
		assert_eq!(grid.offset_row, 0);
	}

	#[test]
	fn wheel_scroll_survives_a_viewport_refresh() {
		let mut grid = GridState::default();
		grid.set_viewport_rows(10);
		grid.select(0x200);
		let scrolled_to = grid.offset_row as i64 - 15;
		grid.scroll_by(-15);
		assert_eq!(grid.offset_row as i64, scrolled_to);

		// The next frame re-reports the same height; the offset must
		// stay where the wheel put it, not snap back to the cursor.
		grid.set_viewport_rows(10);
		assert_eq!(grid.offset_row as i64, scrolled_to);

		// A real resize still brings the cursor back into view.
		grid.set_viewport_rows(5);
		let row = grid.selected_row();
		assert!(grid.offset_row <= row);
		assert!(row < grid.offset_row + grid.viewport_rows);
	}

	#[test]
	fn page_moves_one_viewport_of_rows() {
		let mut grid = GridState::default();
		grid.set_viewport_rows(8);
		grid.page(1);
		assert_eq!(grid.selected, 8 * GRID_COLUMNS);
		grid.page(-1);
		assert_eq!(grid.selected, 0);
	}
}
