//! Terminal capabilities the picker loop relies on.
//!
//! The loop only needs to clear, place cells, flush, and block for the next
//! input event. [`TerminalScreen`] provides those on top of a ratatui
//! [`Terminal`], so the same loop runs against the real crossterm terminal
//! or an in-memory [`TestBackend`](ratatui::backend::TestBackend).
//!
//! The real terminal is drawn on stderr. Stdout carries nothing but the
//! selected value, so the picker works inside `$(...)` and pipelines.

use std::collections::VecDeque;
use std::io::{self, Write};

use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::crossterm::cursor::Show;
use ratatui::crossterm::event::{self, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::Size;
use ratatui::style::Style;

/// Cell-level drawing surface plus an input event stream.
pub trait Screen {
	/// Forget every cell placed since the last flush.
	fn clear(&mut self);

	/// Place `symbol` at column `x`, row `y`.
	fn set_cell(&mut self, x: u16, y: u16, symbol: &str, style: Style);

	/// Push the placed cells to the terminal, replacing what was shown.
	fn flush(&mut self) -> io::Result<()>;

	/// Block until the next input event arrives.
	fn poll_event(&mut self) -> io::Result<Event>;

	/// Current size of the drawable area.
	fn size(&self) -> io::Result<Size>;
}

/// Source of terminal input events.
pub trait EventSource {
	fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the process terminal via crossterm, without a timeout.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
	fn next_event(&mut self) -> io::Result<Event> {
		event::read()
	}
}

/// Replays a fixed list of events, then fails with `UnexpectedEof`.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
	events: VecDeque<Event>,
}

impl ScriptedEvents {
	pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
		Self {
			events: events.into_iter().collect(),
		}
	}

	pub fn remaining(&self) -> usize {
		self.events.len()
	}
}

impl EventSource for ScriptedEvents {
	fn next_event(&mut self) -> io::Result<Event> {
		self.events.pop_front().ok_or_else(|| {
			io::Error::new(io::ErrorKind::UnexpectedEof, "input event stream exhausted")
		})
	}
}

#[derive(Debug, Clone)]
struct PendingCell {
	x: u16,
	y: u16,
	symbol: String,
	style: Style,
}

/// Leaves the alternate screen on `writer` when dropped, and raw mode too
/// when it was the one to enable it.
///
/// Created as soon as raw mode is on, so a failure in any later setup step
/// still hands the terminal back.
#[derive(Debug)]
struct RestoreOnDrop<W: Write> {
	writer: W,
	raw_mode: bool,
}

impl<W: Write> RestoreOnDrop<W> {
	fn enter(writer: W, raw_mode: bool) -> io::Result<Self> {
		let mut guard = Self { writer, raw_mode };
		execute!(guard.writer, EnterAlternateScreen)?;
		Ok(guard)
	}

	fn restore(&mut self) -> io::Result<()> {
		let screen = execute!(self.writer, LeaveAlternateScreen, Show);
		if self.raw_mode {
			disable_raw_mode()?;
		}
		screen
	}
}

impl<W: Write> Drop for RestoreOnDrop<W> {
	fn drop(&mut self) {
		if let Err(err) = self.restore() {
			tracing::warn!(%err, "failed to restore terminal");
		}
	}
}

/// [`Screen`] over a ratatui terminal.
///
/// Cells are collected between flushes and drawn into a fresh frame, so
/// every flush fully replaces the previous contents.
pub struct TerminalScreen<B: Backend, E> {
	terminal: Terminal<B>,
	events: E,
	cells: Vec<PendingCell>,
	_restore: Option<RestoreOnDrop<io::Stderr>>,
}

impl TerminalScreen<CrosstermBackend<io::Stderr>, CrosstermEvents> {
	/// Enter raw mode and the alternate screen on stderr.
	///
	/// The terminal is restored when the returned screen is dropped, or
	/// right away if a setup step after enabling raw mode fails.
	pub fn open() -> io::Result<Self> {
		install_panic_hook();
		enable_raw_mode()?;
		let restore = RestoreOnDrop::enter(io::stderr(), true)?;
		let terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
		let mut screen = Self {
			terminal,
			events: CrosstermEvents,
			cells: Vec::new(),
			_restore: Some(restore),
		};
		screen.terminal.clear()?;
		Ok(screen)
	}
}

/// Restore the terminal before the panic message is printed, so it lands on
/// the normal screen instead of the discarded alternate one.
fn install_panic_hook() {
	let previous = std::panic::take_hook();
	std::panic::set_hook(Box::new(move |info| {
		let _ = disable_raw_mode();
		let _ = execute!(io::stderr(), LeaveAlternateScreen, Show);
		previous(info);
	}));
}

impl<B: Backend, E: EventSource> TerminalScreen<B, E> {
	/// Wrap an already initialised terminal. Nothing is restored on drop.
	pub fn new(terminal: Terminal<B>, events: E) -> Self {
		Self {
			terminal,
			events,
			cells: Vec::new(),
			_restore: None,
		}
	}

	pub fn terminal(&self) -> &Terminal<B> {
		&self.terminal
	}

	pub fn events(&self) -> &E {
		&self.events
	}
}

impl<B: Backend, E: EventSource> Screen for TerminalScreen<B, E> {
	fn clear(&mut self) {
		self.cells.clear();
	}

	fn set_cell(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
		self.cells.push(PendingCell {
			x,
			y,
			symbol: symbol.to_string(),
			style,
		});
	}

	fn flush(&mut self) -> io::Result<()> {
		let cells = &self.cells;
		self.terminal.draw(|frame| {
			let buffer = frame.buffer_mut();
			for cell in cells {
				if let Some(target) = buffer.cell_mut((cell.x, cell.y)) {
					target.set_symbol(&cell.symbol).set_style(cell.style);
				}
			}
		})?;
		Ok(())
	}

	fn poll_event(&mut self) -> io::Result<Event> {
		self.events.next_event()
	}

	fn size(&self) -> io::Result<Size> {
		self.terminal.size()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, KeyEvent};

	use super::*;

	const ENTER_ALTERNATE: &str = "\x1b[?1049h";
	const LEAVE_ALTERNATE: &str = "\x1b[?1049l";

	/// Records everything written and fails the first `failing_flushes` flushes.
	#[derive(Debug, Clone, Default)]
	struct TtyLog {
		bytes: Rc<RefCell<Vec<u8>>>,
		failing_flushes: Rc<RefCell<usize>>,
	}

	impl TtyLog {
		fn failing_first_flush() -> Self {
			let log = Self::default();
			*log.failing_flushes.borrow_mut() = 1;
			log
		}

		fn text(&self) -> String {
			String::from_utf8(self.bytes.borrow().clone()).expect("utf8 escape codes")
		}
	}

	impl Write for TtyLog {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.bytes.borrow_mut().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			let mut failing = self.failing_flushes.borrow_mut();
			if *failing > 0 {
				*failing -= 1;
				return Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty went away"));
			}
			Ok(())
		}
	}

	fn test_screen(events: Vec<Event>) -> TerminalScreen<TestBackend, ScriptedEvents> {
		let terminal = Terminal::new(TestBackend::new(10, 3)).expect("terminal");
		TerminalScreen::new(terminal, ScriptedEvents::new(events))
	}

	#[test]
	fn flush_draws_pending_cells() {
		let mut screen = test_screen(Vec::new());
		screen.set_cell(0, 0, "a", Style::default());
		screen.set_cell(2, 1, "🙂", Style::default());
		screen.flush().expect("flush");

		let buffer = screen.terminal().backend().buffer();
		assert_eq!(buffer[(0, 0)].symbol(), "a");
		assert_eq!(buffer[(2, 1)].symbol(), "🙂");
	}

	#[test]
	fn cleared_cells_disappear_on_next_flush() {
		let mut screen = test_screen(Vec::new());
		screen.set_cell(0, 0, "a", Style::default());
		screen.flush().expect("flush");

		screen.clear();
		screen.set_cell(1, 0, "b", Style::default());
		screen.flush().expect("flush");

		let buffer = screen.terminal().backend().buffer();
		assert_eq!(buffer[(0, 0)].symbol(), " ");
		assert_eq!(buffer[(1, 0)].symbol(), "b");
	}

	#[test]
	fn out_of_bounds_cells_are_discarded() {
		let mut screen = test_screen(Vec::new());
		screen.set_cell(50, 50, "x", Style::default());
		screen.flush().expect("out of bounds cells must not fail the draw");
	}

	#[test]
	fn scripted_events_replay_then_end() {
		let key = Event::Key(KeyEvent::from(KeyCode::Enter));
		let mut screen = test_screen(vec![key.clone()]);

		assert_eq!(screen.poll_event().expect("first event"), key);
		assert_eq!(screen.events().remaining(), 0);
		let err = screen.poll_event().expect_err("stream exhausted");
		assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
	}

	#[test]
	fn size_reports_backend_dimensions() {
		let screen = test_screen(Vec::new());
		assert_eq!(screen.size().expect("size"), Size::new(10, 3));
	}

	#[test]
	fn restore_guard_leaves_alternate_screen_on_drop() {
		let tty = TtyLog::default();
		let guard = RestoreOnDrop::enter(tty.clone(), false).expect("enter");
		assert_eq!(tty.text(), ENTER_ALTERNATE);

		drop(guard);
		let text = tty.text();
		assert!(text.starts_with(ENTER_ALTERNATE), "{text:?}");
		assert!(text.contains(LEAVE_ALTERNATE), "{text:?}");
		assert!(text.ends_with("\x1b[?25h"), "cursor must be shown again: {text:?}");
	}

	#[test]
	fn failed_setup_still_restores_the_terminal() {
		let tty = TtyLog::failing_first_flush();

		let err = RestoreOnDrop::enter(tty.clone(), false).expect_err("flush fails");

		assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
		let text = tty.text();
		assert!(text.contains(LEAVE_ALTERNATE), "terminal left on alternate screen: {text:?}");
		assert!(text.find(LEAVE_ALTERNATE) > text.find(ENTER_ALTERNATE));
	}
}
