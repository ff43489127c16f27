//! Shared scrollbar rendering component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::theme::Theme;

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Render a themed vertical scrollbar on the right edge of `area` and
/// return the content area with its width reduced accordingly.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.chrome_fg()));

	let sb_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};

	frame.render_stateful_widget(scrollbar, sb_area, scrollbar_state);

	Rect {
		x: area.x,
		y: area.y,
		width: area.width.saturating_sub(1),
		height: area.height,
	}
}
