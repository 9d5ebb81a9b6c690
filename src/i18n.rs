//! Keyed lookup of user-facing strings.

use std::collections::HashMap;

pub const SEARCH_PLACEHOLDER: &str = "common.search";
pub const LOADING: &str = "common.loading";
pub const NO_MATCHING_CONTACTS: &str = "ContactsScreen.noMatchingContacts";
pub const NO_CONTACTS_YET: &str = "ContactsScreen.noContactsYet";
pub const CONTACTS_TITLE: &str = "ContactsScreen.title";
pub const DETAIL_TITLE: &str = "ContactDetailScreen.title";
pub const DETAIL_USERNAME: &str = "ContactDetailScreen.username";
pub const DETAIL_ALIAS: &str = "ContactDetailScreen.alias";
pub const DETAIL_TRANSACTIONS: &str = "ContactDetailScreen.transactions";

pub const DEFAULT_LOCALE: &str = "en";

const EN: &[(&str, &str)] = &[
	(SEARCH_PLACEHOLDER, "Search"),
	(LOADING, "Loading"),
	(NO_MATCHING_CONTACTS, "No contact found for this search"),
	(
		NO_CONTACTS_YET,
		"No contacts yet. Send or receive a payment to add one.",
	),
	(CONTACTS_TITLE, "Contacts"),
	(DETAIL_TITLE, "Contact"),
	(DETAIL_USERNAME, "Username"),
	(DETAIL_ALIAS, "Alias"),
	(DETAIL_TRANSACTIONS, "Transactions"),
];

const ES: &[(&str, &str)] = &[
	(SEARCH_PLACEHOLDER, "Buscar"),
	(LOADING, "Cargando"),
	(NO_MATCHING_CONTACTS, "No se encontró ningún contacto"),
	(
		NO_CONTACTS_YET,
		"Aún no tienes contactos. Envía o recibe un pago para agregar uno.",
	),
	(CONTACTS_TITLE, "Contactos"),
	(DETAIL_TITLE, "Contacto"),
	(DETAIL_USERNAME, "Usuario"),
	(DETAIL_ALIAS, "Alias"),
	(DETAIL_TRANSACTIONS, "Transacciones"),
];

/// Locales bundled with the binary.
#[must_use]
pub fn locales() -> &'static [&'static str] {
	&["en", "es"]
}

fn table(locale: &str) -> Option<&'static [(&'static str, &'static str)]> {
	// "es-SV" and "es_SV" resolve to "es".
	let language = locale
		.split(['-', '_'])
		.next()
		.unwrap_or(locale)
		.to_ascii_lowercase();
	match language.as_str() {
		"en" => Some(EN),
		"es" => Some(ES),
		_ => None,
	}
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
	table
		.iter()
		.find(|(candidate, _)| *candidate == key)
		.map(|(_, text)| *text)
}

/// Translation table for one locale plus user overrides.
///
/// Resolution order: override, locale string, English string, the key itself.
#[derive(Debug, Clone)]
pub struct Translations {
	locale: String,
	strings: &'static [(&'static str, &'static str)],
	overrides: HashMap<String, String>,
}

impl Default for Translations {
	fn default() -> Self {
		Self::new(DEFAULT_LOCALE)
	}
}

impl Translations {
	/// Load the bundled strings for `locale`, falling back to English.
	#[must_use]
	pub fn new(locale: &str) -> Self {
		let (locale, strings) = match table(locale) {
			Some(strings) => (locale.to_string(), strings),
			None => {
				log::warn!("unknown locale '{locale}', using '{DEFAULT_LOCALE}'");
				(DEFAULT_LOCALE.to_string(), EN)
			}
		};
		Self {
			locale,
			strings,
			overrides: HashMap::new(),
		}
	}

	/// Replace individual strings. Override keys are matched without regard
	/// to case, since configuration layers may lowercase them.
	#[must_use]
	pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
		self.overrides.extend(
			overrides
				.into_iter()
				.map(|(key, text)| (key.to_lowercase(), text)),
		);
		self
	}

	/// The locale actually in use.
	#[must_use]
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Look up `key`.
	#[must_use]
	pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
		if !self.overrides.is_empty()
			&& let Some(text) = self.overrides.get(&key.to_lowercase())
		{
			return text;
		}
		lookup(self.strings, key)
			.or_else(|| lookup(EN, key))
			.unwrap_or(key)
	}
}
