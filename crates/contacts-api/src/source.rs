use std::sync::Mutex;

use crate::contact::{Contact, ContactsResponse};
use crate::error::QueryError;

/// Query text sent to GraphQL backends.
pub const CONTACTS_QUERY: &str =
	"query contacts { me { contacts { username alias transactionsCount } } }";

/// Something that can answer the contacts query.
///
/// Implementations are called from a background worker thread and may block.
pub trait ContactSource: Send + Sync {
	/// Fetch a full snapshot of the contact list.
	fn fetch(&self) -> Result<ContactsResponse, QueryError>;

	/// Short label used in logs.
	fn describe(&self) -> String {
		"contacts".to_string()
	}
}

/// In-memory source returning a fixed snapshot, or a queued sequence of
/// outcomes when built with [`StaticSource::scripted`].
#[derive(Debug)]
pub struct StaticSource {
	snapshot: ContactsResponse,
	script: Mutex<Vec<Result<ContactsResponse, QueryError>>>,
}

impl StaticSource {
	/// Always answer with `contacts`.
	#[must_use]
	pub fn new(contacts: Vec<Contact>) -> Self {
		Self {
			snapshot: ContactsResponse::from_contacts(contacts),
			script: Mutex::new(Vec::new()),
		}
	}

	/// Answer with each outcome in turn, then fall back to an empty list.
	#[must_use]
	pub fn scripted(outcomes: Vec<Result<ContactsResponse, QueryError>>) -> Self {
		let mut script = outcomes;
		script.reverse();
		Self {
			snapshot: ContactsResponse::from_contacts(Vec::new()),
			script: Mutex::new(script),
		}
	}

	/// A small address book for demos.
	#[must_use]
	pub fn demo() -> Self {
		Self::new(vec![
			Contact::new("alice").with_alias("Alice A").with_transactions(12),
			Contact::new("bob").with_transactions(3),
			Contact::new("carol").with_alias("Carol Smith").with_transactions(7),
			Contact::new("dave_s").with_alias("Dave").with_transactions(1),
			Contact::new("BitcoinBeachMarketing").with_alias("BBM"),
			Contact::new("erin").with_alias("Erin (work)").with_transactions(21),
		])
	}
}

impl ContactSource for StaticSource {
	fn fetch(&self) -> Result<ContactsResponse, QueryError> {
		let next = match self.script.lock() {
			Ok(mut script) => script.pop(),
			Err(poisoned) => poisoned.into_inner().pop(),
		};
		next.unwrap_or_else(|| Ok(self.snapshot.clone()))
	}

	fn describe(&self) -> String {
		"static".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scripted_outcomes_play_in_order() {
		let source = StaticSource::scripted(vec![
			Err(QueryError::server("boom")),
			Ok(ContactsResponse::from_contacts(vec![Contact::new("alice")])),
		]);

		assert_eq!(source.fetch(), Err(QueryError::server("boom")));
		assert_eq!(source.fetch().expect("second").contacts().len(), 1);
		assert!(source.fetch().expect("fallback").contacts().is_empty());
	}

	#[test]
	fn error_display_is_the_raw_message() {
		assert_eq!(QueryError::server("not authorized").to_string(), "not authorized");
		assert_eq!(
			QueryError::decode("expected value").to_string(),
			"invalid contacts response: expected value"
		);
	}
}
