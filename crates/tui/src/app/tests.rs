use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use uglys_core::{ExplorerData, FontCatalog, NamedEntry, NamedIndex};

use crate::app::App;
use crate::app::state::Pane;

fn sample_data() -> ExplorerData {
	let index = NamedIndex::from_entries(vec![
		NamedEntry {
			code_point: 65,
			name: "LATIN CAPITAL LETTER A".into(),
		},
		NamedEntry {
			code_point: 66,
			name: "LATIN CAPITAL LETTER B".into(),
		},
		NamedEntry {
			code_point: 0x2605,
			name: "BLACK STAR".into(),
		},
		NamedEntry {
			code_point: 0x2606,
			name: "WHITE STAR".into(),
		},
	]);
	ExplorerData {
		index,
		suggestions: vec!["STAR".into(), String::new()],
		fonts: FontCatalog::empty(),
		initial_query: String::new(),
		initial_code_point: 65,
	}
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::from(code)
}

#[test]
fn starts_on_the_initial_code_point() {
	let app = App::new(sample_data());
	assert_eq!(app.selected_code_point(), 65);
	assert_eq!(app.detail.code_point, 65);
	assert_eq!(app.filtered.len(), 4);
	assert_eq!(app.results.selected(), Some(0));
}

#[test]
fn initial_query_is_applied_before_the_first_frame() {
	let app = App::new(sample_data().with_initial_query("star"));
	assert_eq!(app.query(), "star");
	assert_eq!(app.filtered.len(), 2);
}

#[test]
fn typing_narrows_the_results() {
	let mut app = App::new(sample_data());
	app.handle_key(key(KeyCode::Char('s'))).unwrap();
	app.handle_key(key(KeyCode::Char('t'))).unwrap();
	app.handle_key(key(KeyCode::Char('a'))).unwrap();
	app.handle_key(key(KeyCode::Char('r'))).unwrap();
	assert_eq!(app.query(), "star");
	assert_eq!(app.filtered.len(), 2);

	app.handle_key(key(KeyCode::Backspace)).unwrap();
	assert_eq!(app.query(), "sta");
	assert_eq!(app.filtered.len(), 2);
}

#[test]
fn enter_accepts_the_selection() {
	let mut app = App::new(sample_data());
	let outcome = app.handle_key(key(KeyCode::Enter)).unwrap().unwrap();
	assert!(outcome.accepted);
	let selection = outcome.selection.unwrap();
	assert_eq!(selection.info.code_point, 65);
}

#[test]
fn esc_cancels_without_a_selection() {
	let mut app = App::new(sample_data());
	let outcome = app.handle_key(key(KeyCode::Esc)).unwrap().unwrap();
	assert!(!outcome.accepted);
	assert!(outcome.selection.is_none());
}

#[test]
fn tab_cycles_the_focused_pane() {
	let mut app = App::new(sample_data());
	assert_eq!(app.focus, Pane::Grid);
	app.handle_key(key(KeyCode::Tab)).unwrap();
	assert_eq!(app.focus, Pane::Results);
	app.handle_key(key(KeyCode::Tab)).unwrap();
	assert_eq!(app.focus, Pane::Fonts);
	app.handle_key(key(KeyCode::Tab)).unwrap();
	assert_eq!(app.focus, Pane::Grid);
}

#[test]
fn results_navigation_moves_the_grid_cursor() {
	let mut app = App::new(sample_data());
	app.handle_key(key(KeyCode::Tab)).unwrap();
	app.handle_key(key(KeyCode::Down)).unwrap();
	assert_eq!(app.results.selected(), Some(1));
	assert_eq!(app.selected_code_point(), 66);
	assert_eq!(app.detail.code_point, 66);

	app.handle_key(key(KeyCode::End)).unwrap();
	assert_eq!(app.selected_code_point(), 0x2606);
}

#[test]
fn goto_mode_jumps_to_a_hex_code_point() {
	let mut app = App::new(sample_data());
	app.handle_key(key(KeyCode::Char(':'))).unwrap();
	assert!(app.goto.is_some());
	for ch in "u+2605".chars() {
		app.handle_key(key(KeyCode::Char(ch))).unwrap();
	}
	app.handle_key(key(KeyCode::Enter)).unwrap();
	assert!(app.goto.is_none());
	assert_eq!(app.selected_code_point(), 0x2605);
	assert_eq!(app.focus, Pane::Grid);
	// The query text is untouched by go-to input.
	assert_eq!(app.query(), "");
}

#[test]
fn goto_mode_can_be_cancelled() {
	let mut app = App::new(sample_data());
	app.handle_key(key(KeyCode::Char(':'))).unwrap();
	app.handle_key(key(KeyCode::Char('6'))).unwrap();
	app.handle_key(key(KeyCode::Esc)).unwrap();
	assert!(app.goto.is_none());
	assert_eq!(app.selected_code_point(), 65);

	// Backspacing past the start also leaves the mode.
	app.handle_key(key(KeyCode::Char(':'))).unwrap();
	app.handle_key(key(KeyCode::Backspace)).unwrap();
	assert!(app.goto.is_none());
}

#[test]
fn ctrl_n_cycles_suggestions_and_wraps() {
	let mut app = App::new(sample_data());
	let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);

	app.handle_key(ctrl_n).unwrap();
	assert_eq!(app.query(), "STAR");
	assert_eq!(app.filtered.len(), 2);

	app.handle_key(ctrl_n).unwrap();
	assert_eq!(app.query(), "");
	assert_eq!(app.filtered.len(), 4);

	app.handle_key(ctrl_n).unwrap();
	assert_eq!(app.query(), "STAR");
}

#[test]
fn editing_the_query_resets_the_suggestion_cursor() {
	let mut app = App::new(sample_data());
	let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
	app.handle_key(ctrl_n).unwrap();
	app.handle_key(key(KeyCode::Char('x'))).unwrap();
	assert!(app.suggestion_cursor.is_none());

	// Cycling starts over from the first suggestion.
	app.handle_key(ctrl_n).unwrap();
	assert_eq!(app.query(), "STAR");
}

#[test]
fn status_line_reports_the_match_counts() {
	let mut app = App::new(sample_data());
	assert_eq!(app.status_line(), "4/4");
	app.handle_key(key(KeyCode::Char('b'))).unwrap();
	assert_eq!(app.status_line(), "2/4");

	app.handle_key(key(KeyCode::Char(':'))).unwrap();
	app.handle_key(key(KeyCode::Char('4'))).unwrap();
	assert_eq!(app.status_line(), "go to: 4_");
}

#[test]
fn filter_resets_the_results_selection() {
	let mut app = App::new(sample_data());
	app.handle_key(key(KeyCode::Tab)).unwrap();
	app.handle_key(key(KeyCode::Down)).unwrap();
	assert_eq!(app.results.selected(), Some(1));

	app.handle_key(key(KeyCode::Char('s'))).unwrap();
	assert_eq!(app.results.selected(), Some(0));
}
