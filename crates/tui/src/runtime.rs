//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use uglys_core::{ExploreOutcome, ExplorerData};

use crate::App;

/// Construct an [`App`] for the provided data and run it to completion.
pub fn run(data: ExplorerData) -> Result<ExploreOutcome> {
	let mut app = App::new(data);
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<ExploreOutcome> {
		let mut terminal = ratatui::init();
		let setup = terminal
			.clear()
			.map_err(anyhow::Error::from)
			.and_then(|()| Ok(execute!(stdout(), EnableMouseCapture)?));
		if let Err(err) = setup {
			ratatui::restore();
			return Err(err);
		}

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<ExploreOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						// Errors break the loop rather than returning,
						// so the terminal is always restored below.
						match self.handle_key(key) {
							Ok(Some(outcome)) => {
								maybe_outcome = Some(outcome);
								break;
							}
							Ok(None) => {}
							Err(err) => break 'event_loop Err(err),
						}
					}
					Event::Mouse(mouse) => {
						self.handle_mouse(mouse);
					}
					// Layout is recomputed every frame, so resizes
					// need no bookkeeping of their own.
					Event::Resize(_, _) => {}
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break 'event_loop Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
