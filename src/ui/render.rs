use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};

use super::App;
use super::components::{
	ListPane, render_contact_list, render_detail, render_empty_state, render_search_bar,
	render_toast,
};
use crate::i18n;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		if let Some(detail) = self.current_detail() {
			render_detail(frame, area, &detail, &self.strings, &self.theme);
		} else {
			self.draw_contacts(frame, area);
		}

		if let Some(toast) = self.toasts.current() {
			render_toast(frame, area, toast, &self.theme);
		}
	}

	fn draw_contacts(&mut self, frame: &mut Frame, area: Rect) {
		let search_height = if self.screen.show_search_bar() { 1 } else { 0 };
		let [title_area, search_area, results_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(search_height),
			Constraint::Min(1),
		])
		.areas(area);

		let title = Line::from(vec![
			Span::styled(self.strings.translate(i18n::CONTACTS_TITLE), self.theme.header),
			Span::styled(
				format!(" ({})", self.screen.contacts().len()),
				self.theme.muted,
			),
		]);
		frame.render_widget(title, title_area);

		if self.screen.show_search_bar() {
			render_search_bar(frame, search_area, &self.search_input, &self.theme);
		}

		match self.screen.empty_state() {
			Some(state) => render_empty_state(
				frame,
				results_area,
				state,
				&self.strings,
				&mut self.throbber_state,
				&self.theme,
			),
			None => {
				let pane = ListPane {
					contacts: self.screen.matching().collect(),
				};
				render_contact_list(
					frame,
					results_area,
					&mut self.table_state,
					pane,
					&self.theme,
				);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::thread;
	use std::time::{Duration, Instant};

	use contacts_api::{Contact, StaticSource};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use crate::ui::App;
	use crate::ui::state::AppOptions;

	fn loaded_app(contacts: Vec<Contact>) -> App<'static> {
		let mut app = App::new(Arc::new(StaticSource::new(contacts)), AppOptions::default());
		let deadline = Instant::now() + Duration::from_secs(1);
		app.tick();
		while app.query.is_loading() && Instant::now() < deadline {
			thread::sleep(Duration::from_millis(5));
			app.tick();
		}
		app
	}

	fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line);
		}
		lines.join("\n")
	}

	fn render(app: &mut App) -> String {
		let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		buffer_to_string(terminal.backend().buffer())
	}

	#[test]
	fn list_shows_alias_and_hides_denied_accounts() {
		let mut app = loaded_app(vec![
			Contact::new("alice").with_alias("Alice A"),
			Contact::new("bob"),
			Contact::new("BitcoinBeachMarketing").with_alias("BBM"),
		]);
		let view = render(&mut app);
		assert!(view.contains("Contacts (2)"));
		assert!(view.contains("Alice A"));
		assert!(view.contains("@alice"));
		assert!(view.contains("bob"));
		assert!(!view.contains("BBM"));
		assert!(view.contains("Search"), "search placeholder should be visible");
	}

	#[test]
	fn no_contacts_hides_search_bar() {
		let mut app = loaded_app(Vec::new());
		let view = render(&mut app);
		assert!(view.contains("No contacts yet"));
		assert!(!view.contains("> "));
		assert!(!view.contains("Search"));
	}

	#[test]
	fn unmatched_search_shows_no_matching_message() {
		let mut app = loaded_app(vec![Contact::new("alice")]);
		for ch in "zzz999".chars() {
			app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
				.unwrap();
		}
		let view = render(&mut app);
		assert!(view.contains("No contact found for this search"));
		assert!(view.contains("zzz999"));
	}

	#[test]
	fn detail_screen_lists_fields() {
		let mut app = loaded_app(vec![
			Contact::new("alice").with_alias("Alice A").with_transactions(12),
		]);
		app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
			.unwrap();
		let view = render(&mut app);
		let username_line = view
			.lines()
			.find(|line| line.contains("Username"))
			.expect("username row");
		assert!(username_line.contains("alice"));
		let transactions_line = view
			.lines()
			.find(|line| line.contains("Transactions"))
			.expect("transactions row");
		assert!(transactions_line.contains("12"));
	}

	#[test]
	fn pending_fetch_shows_throbber_without_search_bar() {
		// No tick yet, so the mount and focus fetches are both outstanding.
		let mut app = App::new(
			Arc::new(StaticSource::new(vec![Contact::new("alice")])),
			AppOptions::default(),
		);
		assert!(app.screen.is_loading());
		let view = render(&mut app);
		let loading_line = view
			.lines()
			.find(|line| line.contains("Loading"))
			.expect("loading row");
		assert!(loading_line.trim().chars().count() > "Loading".len());
		assert!(view.contains("Contacts (0)"));
		assert!(!view.contains("Search"));
		assert!(!view.contains("No contacts yet"));
	}

	#[test]
	fn toast_is_drawn_over_the_list() {
		let mut app = loaded_app(vec![Contact::new("alice")]);
		app.toasts.show("Network request failed");
		let view = render(&mut app);
		assert!(view.contains("Network request failed"));
	}
}
