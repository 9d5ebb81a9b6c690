use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::BrowseOutcome;
use crate::navigation::Route;

impl<'a> App<'a> {
	/// Process a key press and return an outcome when the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('c') => return Ok(Some(self.outcome())),
				KeyCode::Char('r') => {
					self.remount();
					return Ok(None);
				}
				_ => {}
			}
		}

		if matches!(self.navigator.current(), Route::ContactDetail { .. }) {
			self.handle_detail_key(key);
			return Ok(None);
		}
		Ok(self.handle_contacts_key(key))
	}

	fn handle_contacts_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
		match key.code {
			KeyCode::Esc => {
				if !self.toasts.dismiss() {
					return Some(self.outcome());
				}
			}
			KeyCode::Enter => {
				self.open_selected();
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				// Typing is ignored while the search bar is hidden.
				if self.screen.show_search_bar() && self.search_input.input(key) {
					self.search_changed();
				}
			}
		}
		None
	}

	fn handle_detail_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc if self.toasts.dismiss() => {}
			KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('q') => {
				self.go_back();
			}
			_ => {}
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			let len = self.screen.matching_len();
			if selected + 1 < len {
				self.table_state.select(Some(selected + 1));
			}
		}
	}
}
