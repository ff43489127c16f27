//! Single-line query input backed by a textarea widget.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The filter query prompt. Wraps a one-line [`TextArea`] so editing
/// keys (cursor movement, word deletion, paste) behave as expected.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			textarea: build_textarea(initial.into()),
		}
	}

	/// Current query text.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the query wholesale, leaving the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		self.textarea = build_textarea(text.to_owned());
	}

	/// Feed a key event into the textarea. Returns true when the text
	/// changed, so callers know to re-run the filter.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn build_textarea<'a>(text: String) -> TextArea<'a> {
	let mut textarea = TextArea::new(vec![text]);
	textarea.set_cursor_line_style(Style::default());
	textarea.move_cursor(CursorMove::End);
	textarea
}
