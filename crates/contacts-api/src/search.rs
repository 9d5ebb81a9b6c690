//! Live search over an in-memory contact list.
//!
//! A search string is split into words on single spaces and a contact is kept
//! when *any* word is a case-insensitive substring of its username or alias.
//! Matches keep their original order; there is no scoring.

use crate::contact::Contact;

/// A parsed search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
	/// The search box is empty: every contact is shown.
	All,
	/// Lowercased search words. May be empty when the input only held spaces,
	/// in which case nothing matches.
	Words(Vec<String>),
}

impl SearchQuery {
	/// Parse raw search input.
	#[must_use]
	pub fn parse(input: &str) -> Self {
		if input.is_empty() {
			return Self::All;
		}
		let words = input
			.split(' ')
			.filter(|word| !word.trim().is_empty())
			.map(str::to_lowercase)
			.collect();
		Self::Words(words)
	}

	/// Whether `contact` should be visible for this query.
	#[must_use]
	pub fn matches(&self, contact: &Contact) -> bool {
		match self {
			Self::All => true,
			Self::Words(words) => words.iter().any(|word| word_matches(word, contact)),
		}
	}
}

/// `word` must already be lowercase.
fn word_matches(word: &str, contact: &Contact) -> bool {
	if contact.username.to_lowercase().contains(word) {
		return true;
	}
	match &contact.alias {
		Some(alias) => alias.to_lowercase().contains(word),
		None => false,
	}
}

/// Return the positions in `contacts` that match `search`, in order.
#[must_use]
pub fn matching_indices(contacts: &[Contact], search: &str) -> Vec<usize> {
	let query = SearchQuery::parse(search);
	contacts
		.iter()
		.enumerate()
		.filter(|(_, contact)| query.matches(contact))
		.map(|(index, _)| index)
		.collect()
}

/// Return the contacts that match `search`, preserving their order.
#[must_use]
pub fn filter_contacts(contacts: &[Contact], search: &str) -> Vec<Contact> {
	let query = SearchQuery::parse(search);
	contacts
		.iter()
		.filter(|contact| query.matches(contact))
		.cloned()
		.collect()
}
