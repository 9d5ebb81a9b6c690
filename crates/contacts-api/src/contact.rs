use serde::{Deserialize, Serialize};

/// A single entry in the signed-in user's contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
	/// Unique handle of the contact within a fetch result.
	pub username: String,
	/// Optional display name chosen by the user.
	#[serde(default)]
	pub alias: Option<String>,
	/// Number of transactions exchanged with this contact.
	#[serde(default)]
	pub transactions_count: u64,
}

impl Contact {
	/// Construct a contact without an alias.
	#[must_use]
	pub fn new(username: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			alias: None,
			transactions_count: 0,
		}
	}

	/// Attach a display alias.
	#[must_use]
	pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
		self.alias = Some(alias.into());
		self
	}

	/// Set the transaction count.
	#[must_use]
	pub fn with_transactions(mut self, count: u64) -> Self {
		self.transactions_count = count;
		self
	}

	/// Name shown in list rows: the alias when present, otherwise the username.
	#[must_use]
	pub fn display_name(&self) -> &str {
		self.alias.as_deref().unwrap_or(&self.username)
	}
}

/// Payload of the contacts query: `{ "me": { "contacts": [...] } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsResponse {
	/// The signed-in account, absent when there is no session.
	#[serde(default)]
	pub me: Option<Me>,
}

/// The signed-in account as seen by the contacts query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
	#[serde(default)]
	pub contacts: Vec<Contact>,
}

impl ContactsResponse {
	/// Wrap a list of contacts in the query envelope.
	#[must_use]
	pub fn from_contacts(contacts: Vec<Contact>) -> Self {
		Self {
			me: Some(Me { contacts }),
		}
	}

	/// Borrow the fetched contacts, empty when `me` is missing.
	#[must_use]
	pub fn contacts(&self) -> &[Contact] {
		self.me
			.as_ref()
			.map(|me| me.contacts.as_slice())
			.unwrap_or(&[])
	}

	/// Consume the response and return the fetched contacts.
	#[must_use]
	pub fn into_contacts(self) -> Vec<Contact> {
		self.me.map(|me| me.contacts).unwrap_or_default()
	}
}
