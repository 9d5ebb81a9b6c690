use contacts_api::{Contact, Denylist, matching_indices};

use super::focus::{FocusAction, FocusRefresh};
use crate::navigation::Route;

/// Placeholder shown instead of list rows when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
	/// Contacts exist but none match the search text.
	NoMatchingContacts,
	/// A fetch is running and there is nothing to show yet.
	Loading,
	/// The user has no (visible) contacts.
	NoContactsYet,
}

/// State of one mounted contact-list screen.
///
/// `contacts` is the last fetched snapshot with denied accounts removed and
/// `matching` is always recomputed from it and the search text, never edited
/// on its own.
#[derive(Debug, Clone)]
pub struct ContactsScreen {
	denylist: Denylist,
	contacts: Vec<Contact>,
	search_text: String,
	matching: Vec<usize>,
	focus: FocusRefresh,
	loading: bool,
}

impl ContactsScreen {
	/// Mount a screen with no data yet.
	#[must_use]
	pub fn new(denylist: Denylist) -> Self {
		Self {
			denylist,
			contacts: Vec::new(),
			search_text: String::new(),
			matching: Vec::new(),
			focus: FocusRefresh::default(),
			loading: false,
		}
	}

	/// Mount a screen with an initial search text.
	#[must_use]
	pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
		self.search_text = text.into();
		self.recompute();
		self
	}

	/// Replace the contact snapshot with a freshly fetched list.
	pub fn apply_snapshot(&mut self, fetched: &[Contact]) {
		self.contacts = self.denylist.exclude(fetched);
		self.recompute();
	}

	/// Record whether a fetch is in flight.
	pub fn set_loading(&mut self, loading: bool) {
		self.loading = loading;
	}

	/// Handle the screen gaining focus.
	pub fn on_focus(&mut self) -> FocusAction {
		let action = self.focus.on_focus();
		if action == FocusAction::Refetch {
			log::debug!("contacts screen focused for the first time; refetching");
		}
		action
	}

	/// Current state of the one-shot focus refetch.
	#[must_use]
	pub fn focus_state(&self) -> FocusRefresh {
		self.focus
	}

	/// Update the search text and the derived matches.
	pub fn set_search_text(&mut self, text: impl Into<String>) {
		let text = text.into();
		if text != self.search_text {
			self.search_text = text;
			self.recompute();
		}
	}

	fn recompute(&mut self) {
		self.matching = matching_indices(&self.contacts, &self.search_text);
	}

	#[must_use]
	pub fn search_text(&self) -> &str {
		&self.search_text
	}

	/// Visible contacts after the denylist, before searching.
	#[must_use]
	pub fn contacts(&self) -> &[Contact] {
		&self.contacts
	}

	/// Contacts matching the search text, in fetch order.
	pub fn matching(&self) -> impl Iterator<Item = &Contact> + '_ {
		self.matching.iter().map(|&index| &self.contacts[index])
	}

	/// Number of contacts matching the search text.
	#[must_use]
	pub fn matching_len(&self) -> usize {
		self.matching.len()
	}

	/// Contact at `position` in the matching list.
	#[must_use]
	pub fn matching_at(&self, position: usize) -> Option<&Contact> {
		self.matching
			.get(position)
			.and_then(|&index| self.contacts.get(index))
	}

	/// The search input is pointless without contacts to search.
	#[must_use]
	pub fn show_search_bar(&self) -> bool {
		!self.contacts.is_empty()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Which placeholder to render, or `None` when rows are visible.
	#[must_use]
	pub fn empty_state(&self) -> Option<EmptyState> {
		if !self.matching.is_empty() {
			return None;
		}
		let state = if !self.contacts.is_empty() {
			EmptyState::NoMatchingContacts
		} else if self.loading {
			EmptyState::Loading
		} else {
			EmptyState::NoContactsYet
		};
		Some(state)
	}

	/// Navigation request for selecting the row at `position`.
	#[must_use]
	pub fn select(&self, position: usize) -> Option<Route> {
		self.matching_at(position).map(|contact| Route::ContactDetail {
			contact: contact.clone(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fetched() -> Vec<Contact> {
		vec![
			Contact::new("alice").with_alias("Alice A"),
			Contact::new("bob"),
			Contact::new("BitcoinBeachMarketing").with_alias("BBM"),
		]
	}

	fn mounted() -> ContactsScreen {
		let mut screen = ContactsScreen::new(Denylist::default());
		screen.apply_snapshot(&fetched());
		screen
	}

	fn visible(screen: &ContactsScreen) -> Vec<&str> {
		screen.matching().map(|c| c.username.as_str()).collect()
	}

	#[test]
	fn empty_search_shows_everything_but_denied() {
		let screen = mounted();
		assert_eq!(visible(&screen), ["alice", "bob"]);
		assert_eq!(screen.empty_state(), None);
	}

	#[test]
	fn search_by_alias() {
		let mut screen = mounted();
		screen.set_search_text("ali");
		assert_eq!(visible(&screen), ["alice"]);
	}

	#[test]
	fn any_word_of_search_matches() {
		let mut screen = mounted();
		screen.set_search_text("bob smith");
		assert_eq!(visible(&screen), ["bob"]);
	}

	#[test]
	fn clearing_search_restores_list() {
		let mut screen = mounted();
		screen.set_search_text("zzz999");
		assert_eq!(screen.matching_len(), 0);
		screen.set_search_text("");
		assert_eq!(screen.matching_len(), 2);
	}

	#[test]
	fn no_match_shows_no_matching_message() {
		let mut screen = mounted();
		screen.set_loading(true);
		screen.set_search_text("zzz999");
		assert_eq!(screen.empty_state(), Some(EmptyState::NoMatchingContacts));
		assert!(screen.show_search_bar());
	}

	#[test]
	fn empty_list_hides_search_and_says_no_contacts() {
		let mut screen = ContactsScreen::new(Denylist::default());
		screen.apply_snapshot(&[Contact::new("BitcoinBeachMarketing")]);
		assert!(!screen.show_search_bar());
		assert_eq!(screen.empty_state(), Some(EmptyState::NoContactsYet));
	}

	#[test]
	fn loading_without_contacts_shows_indicator() {
		let mut screen = ContactsScreen::new(Denylist::default());
		screen.set_loading(true);
		assert_eq!(screen.empty_state(), Some(EmptyState::Loading));
	}

	#[test]
	fn new_snapshot_reapplies_search() {
		let mut screen = mounted().with_search_text("carol");
		assert_eq!(screen.matching_len(), 0);
		let mut refreshed = fetched();
		refreshed.push(Contact::new("carol"));
		screen.apply_snapshot(&refreshed);
		assert_eq!(visible(&screen), ["carol"]);
	}

	#[test]
	fn selection_carries_full_record() {
		let mut screen = ContactsScreen::new(Denylist::default());
		screen.apply_snapshot(&[Contact::new("dave").with_alias("Dave").with_transactions(4)]);
		let route = screen.select(0).expect("route");
		assert_eq!(
			route,
			Route::ContactDetail {
				contact: Contact::new("dave").with_alias("Dave").with_transactions(4),
			}
		);
		assert_eq!(screen.select(1), None);
	}

	#[test]
	fn focus_refetches_once_per_mount() {
		let mut screen = mounted();
		assert_eq!(screen.on_focus(), FocusAction::Refetch);
		assert_eq!(screen.on_focus(), FocusAction::Nothing);

		let mut remounted = ContactsScreen::new(Denylist::default());
		assert_eq!(remounted.on_focus(), FocusAction::Refetch);
		assert_eq!(remounted.on_focus(), FocusAction::Nothing);
	}
}
