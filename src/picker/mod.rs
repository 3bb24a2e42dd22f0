//! The interactive selection loop.
//!
//! [`Picker::run`] draws the prompt and the full candidate list, then
//! handles one input event at a time: editing the query reruns the matcher,
//! arrow keys move the cursor, Enter resolves the highlighted candidate and
//! Ctrl-C/Esc abandon the pick. The screen is redrawn after every event that
//! changed the session and left alone otherwise.

mod config;
mod input;
mod render;
mod session;

pub use config::{CursorUnderflow, PickerConfig};
pub use input::{Input, translate};
pub use render::draw;
pub use session::Session;

use crate::catalog::Catalog;
use crate::error::PickerError;
use crate::matcher::{FuzzyMatcher, Matcher};
use crate::screen::{Screen, TerminalScreen};

/// How a picker run ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// The user confirmed a candidate; holds its value.
	Selected(&'static str),
	/// The user pressed Ctrl-C or Esc.
	Interrupted,
	/// The user confirmed while nothing matched the query.
	NotFound,
}

/// What the loop does after applying one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
	Redraw,
	Idle,
	Finish(Outcome),
}

impl Step {
	fn redraw_if(changed: bool) -> Self {
		if changed { Step::Redraw } else { Step::Idle }
	}
}

/// Fuzzy picker over a [`Catalog`].
pub struct Picker<'a, M = FuzzyMatcher> {
	catalog: &'a Catalog,
	matcher: M,
	config: PickerConfig,
}

impl<'a> Picker<'a, FuzzyMatcher> {
	/// Create a picker using [`FuzzyMatcher`] and the default configuration.
	pub fn new(catalog: &'a Catalog) -> Self {
		Self {
			catalog,
			matcher: FuzzyMatcher,
			config: PickerConfig::default(),
		}
	}
}

impl<'a, M: Matcher> Picker<'a, M> {
	/// Replace the matcher used to rank candidates.
	pub fn with_matcher<N: Matcher>(self, matcher: N) -> Picker<'a, N> {
		Picker {
			catalog: self.catalog,
			matcher,
			config: self.config,
		}
	}

	#[must_use]
	pub fn with_config(mut self, config: PickerConfig) -> Self {
		self.config = config;
		self
	}

	/// Take over the process terminal, run the picker, and restore the
	/// terminal before returning.
	pub fn run_in_terminal(&self) -> Result<Outcome, PickerError> {
		let mut screen = TerminalScreen::open()?;
		self.run(&mut screen)
	}

	/// Pump input events from `screen` until the user picks, cancels, or an
	/// error occurs.
	pub fn run<S: Screen + ?Sized>(&self, screen: &mut S) -> Result<Outcome, PickerError> {
		let mut session = Session::new(&self.matcher, self.catalog);
		tracing::debug!(candidates = self.catalog.len(), "picker started");
		render::draw(screen, &session, self.catalog, &self.config)?;

		loop {
			let event = screen.poll_event()?;
			let Some(input) = input::translate(&event) else {
				continue;
			};

			match self.step(&mut session, input)? {
				Step::Redraw => render::draw(screen, &session, self.catalog, &self.config)?,
				Step::Idle => {}
				Step::Finish(outcome) => {
					tracing::debug!(?outcome, query = session.query(), "picker finished");
					return Ok(outcome);
				}
			}
		}
	}

	fn step(&self, session: &mut Session, input: Input) -> Result<Step, PickerError> {
		let step = match input {
			Input::Insert(c) => {
				session.insert(c, &self.matcher, self.catalog);
				Step::Redraw
			}
			Input::DeleteBackward => {
				Step::redraw_if(session.delete_backward(&self.matcher, self.catalog))
			}
			Input::CursorUp => Step::redraw_if(session.cursor_up(self.config.underflow)),
			Input::CursorDown => Step::redraw_if(session.cursor_down()),
			Input::Confirm => {
				let outcome = session.confirm(self.catalog).inspect_err(|err| {
					tracing::error!(%err, query = session.query(), "confirm failed");
				})?;
				Step::Finish(outcome)
			}
			Input::Interrupt => Step::Finish(Outcome::Interrupted),
			Input::Resize => Step::Redraw,
		};

		tracing::debug!(
			?input,
			?step,
			query = session.query(),
			matches = session.matches().len(),
			cursor = session.cursor(),
			"applied input"
		);
		Ok(step)
	}
}
