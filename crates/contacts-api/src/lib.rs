//! Shared data model and search logic for the contacts browser.
//!
//! The terminal front-end in the root crate consumes these types; nothing in
//! here knows about rendering or threads.

pub mod contact;
pub mod denylist;
pub mod error;
pub mod search;
pub mod source;

pub use contact::{Contact, ContactsResponse, Me};
pub use denylist::{DEFAULT_DENYLIST, Denylist};
pub use error::QueryError;
pub use search::{SearchQuery, filter_contacts, matching_indices};
pub use source::{CONTACTS_QUERY, ContactSource, StaticSource};
