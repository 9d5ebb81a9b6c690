//! Core state container for the terminal front-end.
//!
//! [`App`] owns the query runtime, the mounted contact screen, the route
//! stack and the UI affordances (selection, input, toasts, throbber). Every
//! change to contacts, search text or loading state goes through the screen
//! model so the rendered list can never drift from it.

use std::sync::Arc;
use std::time::Duration;

use contacts_api::{Contact, ContactSource, Denylist};
use ratatui::widgets::TableState;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use crate::i18n::{self, Translations};
use crate::navigation::{Navigator, Route};
use crate::query::{QueryRuntime, QueryUpdate};
use crate::screen::{ContactDetail, ContactsScreen, FocusAction};
use crate::toast::{DEFAULT_TOAST_LIFETIME, Toasts};
use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

/// Everything the UI needs besides the data source.
#[derive(Debug, Clone)]
pub struct AppOptions {
	pub denylist: Denylist,
	pub initial_query: String,
	pub strings: Translations,
	pub toast_lifetime: Duration,
}

impl Default for AppOptions {
	fn default() -> Self {
		Self {
			denylist: Denylist::default(),
			initial_query: String::new(),
			strings: Translations::default(),
			toast_lifetime: DEFAULT_TOAST_LIFETIME,
		}
	}
}

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseOutcome {
	/// Search text when the user left.
	pub query: String,
	/// Last contact opened on the detail screen, if any.
	pub contact: Option<Contact>,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) navigator: Navigator,
	pub(crate) screen: ContactsScreen,
	pub(crate) query: QueryRuntime,
	pub search_input: SearchInput<'a>,
	pub table_state: TableState,
	pub(crate) toasts: Toasts,
	pub(crate) strings: Translations,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	denylist: Denylist,
	initial_query: String,
	last_opened: Option<Contact>,
	mounts: u32,
}

impl<'a> App<'a> {
	/// Build the app and mount the contact screen, which issues the initial
	/// fetch and delivers its first focus event.
	pub fn new(source: Arc<dyn ContactSource>, options: AppOptions) -> Self {
		let AppOptions {
			denylist,
			initial_query,
			strings,
			toast_lifetime,
		} = options;
		let mut app = Self {
			navigator: Navigator::new(),
			screen: ContactsScreen::new(denylist.clone()),
			query: QueryRuntime::new(source),
			search_input: SearchInput::new(String::new()),
			table_state: TableState::default(),
			toasts: Toasts::new(toast_lifetime),
			strings,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			denylist,
			initial_query,
			last_opened: None,
			mounts: 0,
		};
		app.mount_contacts();
		app
	}

	/// Tear down the contact screen and mount a fresh instance. Search text
	/// and the focus-refetch flag start over; the query runtime survives.
	pub fn remount(&mut self) {
		log::info!("remounting contacts screen");
		self.navigator = Navigator::new();
		self.mount_contacts();
	}

	fn mount_contacts(&mut self) {
		self.mounts += 1;
		self.screen = ContactsScreen::new(self.denylist.clone())
			.with_search_text(self.initial_query.clone());
		self.search_input = SearchInput::new(self.initial_query.clone());
		self.search_input.set_placeholder(
			self.strings.translate(i18n::SEARCH_PLACEHOLDER),
			self.theme.empty,
		);
		self.screen.apply_snapshot(self.query.contacts());
		self.query.fetch();
		self.screen.set_loading(self.query.is_loading());
		self.table_state = TableState::default();
		self.ensure_selection();
		self.dispatch_focus();
	}

	/// Deliver a focus event to whichever route is on top.
	pub(crate) fn dispatch_focus(&mut self) {
		match self.navigator.current() {
			Route::Contacts => {
				if self.screen.on_focus() == FocusAction::Refetch {
					self.query.refetch();
					self.screen.set_loading(true);
				}
			}
			Route::ContactDetail { .. } => {}
		}
	}

	/// Apply finished fetches and expire toasts. Called once per frame.
	pub(crate) fn tick(&mut self) {
		for update in self.query.pump() {
			match update {
				QueryUpdate::Loaded { .. } => {
					self.screen.apply_snapshot(self.query.contacts());
				}
				QueryUpdate::Failed(error) => self.toasts.show(error.to_string()),
			}
		}
		self.screen.set_loading(self.query.is_loading());
		self.ensure_selection();
		self.toasts.prune();
	}

	/// Recompute matches after the search input changed.
	pub(crate) fn search_changed(&mut self) {
		let text = self.search_input.text().to_string();
		self.screen.set_search_text(text);
		self.table_state.select(Some(0));
		self.ensure_selection();
	}

	/// Keep the row selection inside the matching list.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.screen.matching_len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Navigate to the detail screen for the selected row.
	pub(crate) fn open_selected(&mut self) -> bool {
		let Some(position) = self.table_state.selected() else {
			return false;
		};
		let Some(route) = self.screen.select(position) else {
			return false;
		};
		if let Route::ContactDetail { contact } = &route {
			self.last_opened = Some(contact.clone());
		}
		self.navigator.navigate(route);
		self.dispatch_focus();
		true
	}

	/// Pop back to the previous route.
	pub(crate) fn go_back(&mut self) -> bool {
		if self.navigator.go_back().is_none() {
			return false;
		}
		self.dispatch_focus();
		true
	}

	/// Detail model for the focused route, if it is a detail screen.
	pub(crate) fn current_detail(&self) -> Option<ContactDetail> {
		match self.navigator.current() {
			Route::ContactDetail { contact } => Some(ContactDetail::new(contact.clone())),
			Route::Contacts => None,
		}
	}

	pub(crate) fn outcome(&self) -> BrowseOutcome {
		BrowseOutcome {
			query: self.screen.search_text().to_string(),
			contact: self.last_opened.clone(),
		}
	}

	/// Number of times the contact screen has been mounted.
	#[must_use]
	pub fn mounts(&self) -> u32 {
		self.mounts
	}

	/// Fetches issued by this app so far.
	#[must_use]
	pub fn fetches_issued(&self) -> u64 {
		self.query.issued()
	}
}

#[cfg(test)]
mod tests {
	use std::thread;
	use std::time::Instant;

	use contacts_api::StaticSource;

	use super::*;

	fn sample() -> Vec<Contact> {
		vec![
			Contact::new("alice").with_alias("Alice A"),
			Contact::new("bob"),
			Contact::new("BitcoinBeachMarketing").with_alias("BBM"),
		]
	}

	fn wait_for_idle(app: &mut App) {
		let deadline = Instant::now() + Duration::from_secs(1);
		app.tick();
		while app.query.is_loading() && Instant::now() < deadline {
			thread::sleep(Duration::from_millis(5));
			app.tick();
		}
	}

	#[test]
	fn mount_fetches_then_refetches_on_first_focus() {
		let mut app = App::new(Arc::new(StaticSource::new(sample())), AppOptions::default());
		assert_eq!(app.fetches_issued(), 2);

		app.dispatch_focus();
		app.dispatch_focus();
		assert_eq!(app.fetches_issued(), 2);

		app.remount();
		assert_eq!(app.mounts(), 2);
		assert_eq!(app.fetches_issued(), 4);
		app.dispatch_focus();
		assert_eq!(app.fetches_issued(), 4);
	}

	#[test]
	fn returning_from_detail_does_not_refetch() {
		let mut app = App::new(Arc::new(StaticSource::new(sample())), AppOptions::default());
		wait_for_idle(&mut app);
		let before = app.fetches_issued();

		assert!(app.open_selected());
		assert!(app.current_detail().is_some());
		assert!(app.go_back());
		assert!(app.current_detail().is_none());
		assert_eq!(app.fetches_issued(), before);
	}

	#[test]
	fn fetched_contacts_exclude_denied_accounts() {
		let mut app = App::new(Arc::new(StaticSource::new(sample())), AppOptions::default());
		wait_for_idle(&mut app);
		let names: Vec<&str> = app.screen.matching().map(|c| c.username.as_str()).collect();
		assert_eq!(names, ["alice", "bob"]);
		assert_eq!(app.table_state.selected(), Some(0));
	}

	#[test]
	fn opening_a_contact_records_it_in_the_outcome() {
		let mut app = App::new(Arc::new(StaticSource::new(sample())), AppOptions::default());
		wait_for_idle(&mut app);
		app.table_state.select(Some(1));
		assert!(app.open_selected());

		let outcome = app.outcome();
		assert_eq!(outcome.contact.map(|c| c.username), Some("bob".to_string()));
	}

	#[test]
	fn fetch_error_becomes_a_toast() {
		let source = StaticSource::scripted(vec![
			Err(contacts_api::QueryError::server("Not authorized")),
			Err(contacts_api::QueryError::server("Not authorized")),
		]);
		let mut app = App::new(Arc::new(source), AppOptions::default());
		wait_for_idle(&mut app);

		assert_eq!(
			app.toasts.current().map(|t| t.message.as_str()),
			Some("Not authorized")
		);
		assert!(app.screen.contacts().is_empty());
		assert!(!app.screen.is_loading());
	}

	#[test]
	fn initial_query_filters_from_the_start() {
		let options = AppOptions {
			initial_query: "ali".into(),
			..AppOptions::default()
		};
		let mut app = App::new(Arc::new(StaticSource::new(sample())), options);
		wait_for_idle(&mut app);
		assert_eq!(app.search_input.text(), "ali");
		assert_eq!(app.screen.matching_len(), 1);
	}
}
