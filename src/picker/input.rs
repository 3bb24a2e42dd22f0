use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A terminal event the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
	Insert(char),
	DeleteBackward,
	CursorUp,
	CursorDown,
	Confirm,
	Interrupt,
	Resize,
}

/// Map a raw terminal event onto a picker [`Input`].
///
/// Only key presses are considered; releases, repeats, mouse and focus
/// events map to `None`.
pub fn translate(event: &Event) -> Option<Input> {
	match event {
		Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
		Event::Resize(_, _) => Some(Input::Resize),
		_ => None,
	}
}

fn translate_key(key: &KeyEvent) -> Option<Input> {
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

	match key.code {
		KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
			'c' => Some(Input::Interrupt),
			'h' | 'd' => Some(Input::DeleteBackward),
			'k' => Some(Input::CursorUp),
			'j' => Some(Input::CursorDown),
			_ => None,
		},
		KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => None,
		KeyCode::Char(c) => Some(Input::Insert(c)),
		KeyCode::Backspace | KeyCode::Delete => Some(Input::DeleteBackward),
		KeyCode::Up => Some(Input::CursorUp),
		KeyCode::Down => Some(Input::CursorDown),
		KeyCode::Enter => Some(Input::Confirm),
		KeyCode::Esc => Some(Input::Interrupt),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyEventState;
	use rstest::rstest;

	use super::*;

	fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
		Event::Key(KeyEvent::new(code, modifiers))
	}

	#[rstest]
	#[case(key(KeyCode::Char('s'), KeyModifiers::NONE), Some(Input::Insert('s')))]
	#[case(key(KeyCode::Char('S'), KeyModifiers::SHIFT), Some(Input::Insert('S')))]
	#[case(key(KeyCode::Char('é'), KeyModifiers::NONE), Some(Input::Insert('é')))]
	#[case(key(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Input::Interrupt))]
	#[case(key(KeyCode::Esc, KeyModifiers::NONE), Some(Input::Interrupt))]
	#[case(key(KeyCode::Backspace, KeyModifiers::NONE), Some(Input::DeleteBackward))]
	#[case(key(KeyCode::Delete, KeyModifiers::NONE), Some(Input::DeleteBackward))]
	#[case(key(KeyCode::Char('h'), KeyModifiers::CONTROL), Some(Input::DeleteBackward))]
	#[case(key(KeyCode::Char('d'), KeyModifiers::CONTROL), Some(Input::DeleteBackward))]
	#[case(key(KeyCode::Up, KeyModifiers::NONE), Some(Input::CursorUp))]
	#[case(key(KeyCode::Char('k'), KeyModifiers::CONTROL), Some(Input::CursorUp))]
	#[case(key(KeyCode::Down, KeyModifiers::NONE), Some(Input::CursorDown))]
	#[case(key(KeyCode::Char('j'), KeyModifiers::CONTROL), Some(Input::CursorDown))]
	#[case(key(KeyCode::Enter, KeyModifiers::NONE), Some(Input::Confirm))]
	#[case(key(KeyCode::Char('x'), KeyModifiers::CONTROL), None)]
	#[case(key(KeyCode::Char('x'), KeyModifiers::ALT), None)]
	#[case(key(KeyCode::Tab, KeyModifiers::NONE), None)]
	#[case(Event::Resize(80, 24), Some(Input::Resize))]
	#[case(Event::FocusGained, None)]
	fn maps_events(#[case] event: Event, #[case] expected: Option<Input>) {
		assert_eq!(translate(&event), expected);
	}

	#[test]
	fn key_releases_are_ignored() {
		let release = KeyEvent {
			code: KeyCode::Char('a'),
			modifiers: KeyModifiers::NONE,
			kind: KeyEventKind::Release,
			state: KeyEventState::NONE,
		};
		assert_eq!(translate(&Event::Key(release)), None);
	}
}
