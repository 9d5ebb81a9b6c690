//! Headless screen models.
//!
//! These types hold everything the contact screens decide (which contacts are
//! visible, which empty state applies, when to refetch, where a selection
//! leads) so the terminal layer only has to draw them.

mod contacts;
mod detail;
mod focus;

pub use contacts::{ContactsScreen, EmptyState};
pub use detail::{ContactDetail, DetailField};
pub use focus::{FocusAction, FocusRefresh};
