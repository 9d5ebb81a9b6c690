use contacts_api::Contact;

use crate::i18n::{self, Translations};

/// Label/value pair rendered on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
	pub label: String,
	pub value: String,
}

/// Contact-detail screen, built from the record passed through navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetail {
	contact: Contact,
}

impl ContactDetail {
	#[must_use]
	pub fn new(contact: Contact) -> Self {
		Self { contact }
	}

	#[must_use]
	pub fn contact(&self) -> &Contact {
		&self.contact
	}

	/// Heading for the screen.
	#[must_use]
	pub fn title(&self) -> &str {
		self.contact.display_name()
	}

	/// Rows shown below the heading. A missing alias renders as a dash.
	#[must_use]
	pub fn fields(&self, strings: &Translations) -> Vec<DetailField> {
		vec![
			DetailField {
				label: strings.translate(i18n::DETAIL_USERNAME).to_string(),
				value: self.contact.username.clone(),
			},
			DetailField {
				label: strings.translate(i18n::DETAIL_ALIAS).to_string(),
				value: self
					.contact
					.alias
					.clone()
					.unwrap_or_else(|| "-".to_string()),
			},
			DetailField {
				label: strings.translate(i18n::DETAIL_TRANSACTIONS).to_string(),
				value: self.contact.transactions_count.to_string(),
			},
		]
	}
}
