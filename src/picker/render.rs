use std::io;

use ratatui::style::Style;

use crate::catalog::Catalog;
use crate::screen::Screen;
use crate::width::{layout, text_width};

use super::config::PickerConfig;
use super::session::Session;

/// Column where candidate values start; columns before it hold the marker.
const VALUE_COLUMN: u16 = 2;

/// Redraw the whole picker: prompt and query on row 0, one match per row below.
pub fn draw<S: Screen + ?Sized>(
	screen: &mut S,
	session: &Session,
	catalog: &Catalog,
	config: &PickerConfig,
) -> io::Result<()> {
	screen.clear();

	let prompt = format!("{}{}", config.prompt, session.query());
	put(screen, &prompt, 0, 0, config.text_style);

	let rows = usize::from(screen.size()?.height.saturating_sub(1));
	let matches = session.matches();
	let offset = scroll_offset(session.cursor(), matches.len(), rows);

	for (row, (index, entry)) in matches.iter().enumerate().skip(offset).take(rows).enumerate() {
		let y = (row + 1) as u16;
		if index == session.cursor() {
			put(screen, &config.marker, 0, y, config.marker_style);
		}

		let value = catalog.lookup(entry.name).unwrap_or_else(|| {
			tracing::warn!(name = entry.name, "matched candidate has no value");
			""
		});
		let end = put(screen, value, VALUE_COLUMN, y, config.text_style);

		if config.show_names {
			put(screen, entry.name, end.saturating_add(1), y, config.name_style);
		}
	}

	screen.flush()
}

/// First match index to show so that the cursor row stays visible.
fn scroll_offset(cursor: usize, len: usize, rows: usize) -> usize {
	if rows == 0 || cursor >= len || cursor < rows {
		0
	} else {
		cursor + 1 - rows
	}
}

/// Place `text` starting at column `x` and return the column after it.
fn put<S: Screen + ?Sized>(screen: &mut S, text: &str, x: u16, y: u16, style: Style) -> u16 {
	for glyph in layout(text, x) {
		screen.set_cell(glyph.column, y, &glyph.symbol, style);
	}
	x.saturating_add(text_width(text) as u16)
}
