//! The query prompt row: label, editable input, and a status readout.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::theme::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub label: &'a str,
	/// Right-aligned status text (match counts, goto buffer).
	pub status: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the prompt label, the input field, and the status readout.
pub fn render_prompt(frame: &mut Frame, ctx: PromptContext<'_>) {
	let PromptContext {
		input,
		label,
		status,
		area,
		theme,
	} = ctx;

	let label_text = format!("{label} > ");
	let label_width = label_text.width() as u16;
	let status_width = status.width() as u16;

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(label_width),
			Constraint::Min(1),
			Constraint::Length(status_width.saturating_add(1)),
		])
		.split(area);

	let label_widget = Paragraph::new(label_text).style(theme.prompt);
	frame.render_widget(label_widget, horizontal[0]);

	input.render(frame, horizontal[1]);

	let status_widget = Paragraph::new(status).style(theme.header);
	frame.render_widget(status_widget, horizontal[2]);
}
