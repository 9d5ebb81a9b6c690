use std::collections::HashSet;

use crate::contact::Contact;

/// Accounts that are never shown in the contact list.
pub const DEFAULT_DENYLIST: &[&str] = &["BitcoinBeachMarketing"];

/// Fixed set of usernames hidden from the contact list.
///
/// Exclusion runs before search filtering, so a denied contact can never be
/// surfaced by typing its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
	usernames: HashSet<String>,
}

impl Default for Denylist {
	fn default() -> Self {
		Self::new(DEFAULT_DENYLIST.iter().copied())
	}
}

impl Denylist {
	/// Build a denylist from exactly the given usernames.
	pub fn new<I, S>(usernames: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			usernames: usernames.into_iter().map(Into::into).collect(),
		}
	}

	/// Build the default denylist extended with additional usernames.
	pub fn with_additional<I, S>(extra: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut denylist = Self::default();
		denylist
			.usernames
			.extend(extra.into_iter().map(Into::into));
		denylist
	}

	/// Whether `username` is denied. Comparison is exact.
	#[must_use]
	pub fn contains(&self, username: &str) -> bool {
		self.usernames.contains(username)
	}

	/// Return `contacts` without denied accounts, keeping order.
	#[must_use]
	pub fn exclude(&self, contacts: &[Contact]) -> Vec<Contact> {
		contacts
			.iter()
			.filter(|contact| !self.contains(&contact.username))
			.cloned()
			.collect()
	}

	/// Sorted usernames, for display.
	#[must_use]
	pub fn usernames(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.usernames.iter().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}
