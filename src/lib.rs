//! Terminal contact list with live search and a contact-detail screen.
//!
//! The root module re-exports the pieces an embedder needs: the data model
//! from `contacts-api`, the headless screen models, the contact sources and
//! the interactive UI entry point.

pub mod app_dirs;
pub mod i18n;
pub mod logging;
pub mod navigation;
pub mod query;
pub mod screen;
pub mod sources;
pub mod toast;
pub mod ui;

pub use contacts_api::{
	Contact, ContactSource, ContactsResponse, Denylist, QueryError, StaticSource, filter_contacts,
};
pub use i18n::Translations;
pub use navigation::{Navigator, Route};
pub use screen::{ContactsScreen, EmptyState};
pub use sources::{FileSource, GraphqlSource, SourceSpec};
pub use ui::{App, AppOptions, BrowseOutcome, run};
