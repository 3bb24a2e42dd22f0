use ratatui::style::{Color, Modifier, Style};

/// What happens when the cursor moves up from the first match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CursorUnderflow {
	/// Stay on the first match.
	#[default]
	Clamp,
	/// Wrap the unsigned cursor around to `usize::MAX`.
	///
	/// The cursor is then out of range: moving down wraps it back to the
	/// first match, editing the query clamps it to the last match, and
	/// confirming fails with
	/// [`PickerError::CursorOutOfRange`](crate::PickerError::CursorOutOfRange).
	Wrap,
}

/// Presentation and navigation settings for the picker.
#[derive(Debug, Clone)]
pub struct PickerConfig {
	/// Text shown in front of the query on the first row.
	pub prompt: String,
	/// Symbol drawn in the indicator column of the selected row.
	pub marker: String,
	/// Style applied to the marker.
	pub marker_style: Style,
	/// Style applied to the prompt, query and values.
	pub text_style: Style,
	/// Style applied to candidate names when [`Self::show_names`] is set.
	pub name_style: Style,
	/// Print the candidate name after its value on each row.
	pub show_names: bool,
	pub underflow: CursorUnderflow,
}

impl Default for PickerConfig {
	fn default() -> Self {
		Self {
			prompt: "find: ".to_string(),
			marker: ">".to_string(),
			marker_style: Style::new().add_modifier(Modifier::BOLD),
			text_style: Style::new(),
			name_style: Style::new().fg(Color::DarkGray),
			show_names: false,
			underflow: CursorUnderflow::default(),
		}
	}
}

impl PickerConfig {
	#[must_use]
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = prompt.into();
		self
	}

	#[must_use]
	pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
		self.marker = marker.into();
		self
	}

	#[must_use]
	pub fn with_names(mut self, show_names: bool) -> Self {
		self.show_names = show_names;
		self
	}

	#[must_use]
	pub fn with_underflow(mut self, underflow: CursorUnderflow) -> Self {
		self.underflow = underflow;
		self
	}
}
