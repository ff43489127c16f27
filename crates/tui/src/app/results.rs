//! Scroll and selection state shared by the list-shaped panes.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::point_in_rect;

/// Selection, scroll offset, and hover state for one scrollable table.
///
/// The named-results list and the font panel both use this; the only
/// structural difference between them is whether a header (plus its
/// separator line) sits above the body rows.
pub(crate) struct TablePane {
	pub table_state: TableState,
	pub scrollbar_state: ScrollbarState,
	pub area: Option<Rect>,
	pub hovered: bool,
	header_rows: usize,
	content_len: usize,
}

impl TablePane {
	pub fn new(header_rows: usize) -> Self {
		Self {
			table_state: TableState::default().with_selected(Some(0)),
			scrollbar_state: ScrollbarState::default(),
			area: None,
			hovered: false,
			header_rows,
			content_len: 0,
		}
	}

	pub fn content_len(&self) -> usize {
		self.content_len
	}

	pub fn selected(&self) -> Option<usize> {
		self.table_state.selected()
	}

	/// Record the new body length and clamp the selection into it.
	pub fn set_content_len(&mut self, len: usize) {
		self.content_len = len;
		self.ensure_selection();
	}

	/// Reset to the top of the list (offset and selection).
	pub fn reset(&mut self) {
		*self.table_state.offset_mut() = 0;
		self.table_state
			.select(if self.content_len == 0 { None } else { Some(0) });
	}

	pub fn move_up(&mut self) {
		self.move_by(-1);
	}

	pub fn move_down(&mut self) {
		self.move_by(1);
	}

	pub fn move_by(&mut self, delta: i64) {
		if self.content_len == 0 {
			self.table_state.select(None);
			return;
		}
		let last = self.content_len as i64 - 1;
		let current = self.selected().unwrap_or(0) as i64;
		let next = (current + delta).clamp(0, last);
		self.table_state.select(Some(next as usize));
	}

	pub fn select_first(&mut self) {
		if self.content_len > 0 {
			self.table_state.select(Some(0));
		}
	}

	pub fn select_last(&mut self) {
		if self.content_len > 0 {
			self.table_state.select(Some(self.content_len - 1));
		}
	}

	pub fn update_hover(&mut self, column: u16, row: u16) {
		self.hovered = self
			.area
			.is_some_and(|area| point_in_rect(column, row, area));
	}

	/// Map a click inside this pane's area onto a body row. Returns
	/// true when the selection changed.
	pub fn select_at(&mut self, column: u16, row: u16) -> bool {
		let Some(area) = self.area else {
			return false;
		};
		if !point_in_rect(column, row, area) {
			return false;
		}

		let body_y = area.y.saturating_add(1).saturating_add(self.header_rows as u16);
		if row < body_y || row >= area.y.saturating_add(area.height.saturating_sub(1)) {
			return false;
		}

		let index = self.table_state.offset() + usize::from(row - body_y);
		if index >= self.content_len {
			return false;
		}
		self.table_state.select(Some(index));
		true
	}

	/// Clamp the scroll offset and refresh the scrollbar thumb for a
	/// body viewport of `viewport_height` rows (including the header).
	pub fn update_scrollbar(&mut self, viewport_height: usize) {
		let available = viewport_height.saturating_sub(self.header_rows);
		if available == 0 || self.content_len <= available {
			*self.table_state.offset_mut() = 0;
			self.scrollbar_state = ScrollbarState::default();
			return;
		}

		let max_offset = self.content_len - available;
		let offset = self.table_state.offset().min(max_offset);
		*self.table_state.offset_mut() = offset;

		let position = ((offset as f64 / max_offset as f64) * (self.content_len - 1) as f64)
			.round() as usize;
		self.scrollbar_state = self
			.scrollbar_state
			.content_length(self.content_len)
			.viewport_content_length(available)
			.position(position);
	}

	fn ensure_selection(&mut self) {
		if self.content_len == 0 {
			self.table_state.select(None);
			return;
		}
		match self.selected() {
			Some(selected) if selected < self.content_len => {}
			_ => self.table_state.select(Some(0)),
		}
	}
}
