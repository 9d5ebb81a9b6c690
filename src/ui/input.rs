//! Single-line search field backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Text input for the contact search.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Create an input holding `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// Placeholder drawn while the field is empty.
	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	/// Current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press. Returns `true` when the text changed.
	///
	/// Keys that would break the single line (newline, tab) are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let inserts_newline = matches!(key.code, KeyCode::Enter | KeyCode::Tab)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if inserts_newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub(crate) fn textarea(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_and_deleting_report_changes() {
		let mut input = SearchInput::new("");
		assert!(input.input(press(KeyCode::Char('b'))));
		assert!(input.input(press(KeyCode::Char('o'))));
		assert_eq!(input.text(), "bo");
		assert!(input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "b");
	}

	#[test]
	fn cursor_moves_are_not_changes() {
		let mut input = SearchInput::new("bob");
		assert!(!input.input(press(KeyCode::Left)));
		assert_eq!(input.text(), "bob");
	}

	#[test]
	fn newline_keys_are_ignored() {
		let mut input = SearchInput::new("al");
		assert!(!input.input(press(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "al");
	}

	#[test]
	fn initial_text_keeps_cursor_at_end() {
		let mut input = SearchInput::new("ali");
		input.input(press(KeyCode::Char('c')));
		assert_eq!(input.text(), "alic");
	}
}
