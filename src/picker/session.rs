use crate::catalog::Catalog;
use crate::error::PickerError;
use crate::matcher::{Match, Matcher};

use super::Outcome;
use super::config::CursorUnderflow;

/// Mutable state of one picker run: the query, its matches, and the cursor.
#[derive(Debug, Clone)]
pub struct Session {
	query: String,
	matches: Vec<Match>,
	cursor: usize,
}

impl Session {
	/// Start with an empty query and the matches it produces.
	pub fn new<M: Matcher + ?Sized>(matcher: &M, catalog: &Catalog) -> Self {
		let mut session = Self {
			query: String::new(),
			matches: Vec::new(),
			cursor: 0,
		};
		session.refresh(matcher, catalog);
		session
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn matches(&self) -> &[Match] {
		&self.matches
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Append `c` to the query and rerun the matcher.
	pub fn insert<M: Matcher + ?Sized>(&mut self, c: char, matcher: &M, catalog: &Catalog) {
		self.query.push(c);
		self.refresh(matcher, catalog);
	}

	/// Drop the last character of the query. Returns `false` when the query
	/// was already empty.
	pub fn delete_backward<M: Matcher + ?Sized>(&mut self, matcher: &M, catalog: &Catalog) -> bool {
		if self.query.pop().is_none() {
			return false;
		}
		self.refresh(matcher, catalog);
		true
	}

	/// Move the cursor one match up. Returns whether it moved.
	pub fn cursor_up(&mut self, underflow: CursorUnderflow) -> bool {
		let previous = self.cursor;
		self.cursor = match underflow {
			CursorUnderflow::Clamp => previous.saturating_sub(1),
			CursorUnderflow::Wrap => previous.wrapping_sub(1),
		};
		self.cursor != previous
	}

	/// Move the cursor one match down, stopping at the last match. Returns
	/// whether it moved.
	pub fn cursor_down(&mut self) -> bool {
		let previous = self.cursor;
		let mut next = previous.wrapping_add(1);
		if next >= self.matches.len() {
			next = self.matches.len().saturating_sub(1);
		}
		self.cursor = next;
		self.cursor != previous
	}

	/// Resolve the highlighted match to its catalog value.
	pub fn confirm(&self, catalog: &Catalog) -> Result<Outcome, PickerError> {
		if self.matches.is_empty() {
			return Ok(Outcome::NotFound);
		}

		let entry = self
			.matches
			.get(self.cursor)
			.ok_or(PickerError::CursorOutOfRange {
				cursor: self.cursor,
				len: self.matches.len(),
			})?;

		let value = catalog
			.lookup(entry.name)
			.ok_or_else(|| PickerError::MissingValue {
				name: entry.name.to_string(),
			})?;

		Ok(Outcome::Selected(value))
	}

	fn refresh<M: Matcher + ?Sized>(&mut self, matcher: &M, catalog: &Catalog) {
		self.matches = matcher.find(&self.query, catalog.names());
		self.cursor = self.cursor.min(self.matches.len().saturating_sub(1));
	}
}
