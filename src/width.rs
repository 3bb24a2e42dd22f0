//! Display-width helpers for placing text onto terminal cells.
//!
//! Every character advances the column by its display width. Zero-width
//! characters (combining marks, variation selectors, joiners) have no column
//! of their own and are folded into the previously placed cell instead.

use unicode_width::UnicodeWidthChar;

/// Number of terminal columns `c` occupies: 0, 1, or 2.
///
/// Control characters report no width and are treated as zero-width.
pub fn char_width(c: char) -> usize {
	c.width().unwrap_or(0)
}

/// A run of characters occupying a single terminal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
	pub column: u16,
	pub symbol: String,
}

/// Lay `text` out left to right starting at `start`.
///
/// A zero-width character is appended to the symbol of the previous glyph;
/// with no previous glyph in this run it is dropped without advancing.
pub fn layout(text: &str, start: u16) -> Vec<Glyph> {
	let mut glyphs: Vec<Glyph> = Vec::with_capacity(text.len());
	let mut column = start;

	for c in text.chars() {
		let width = char_width(c);
		if width == 0 {
			if let Some(previous) = glyphs.last_mut() {
				previous.symbol.push(c);
			}
			continue;
		}

		glyphs.push(Glyph {
			column,
			symbol: c.to_string(),
		});
		column = column.saturating_add(width as u16);
	}

	glyphs
}

/// Total number of columns `text` spans once laid out.
pub fn text_width(text: &str) -> usize {
	text.chars().map(char_width).sum()
}
