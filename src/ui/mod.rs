//! Interactive terminal UI for browsing contacts.
//!
//! [`App`] holds the state, `actions` maps keys onto it, `render` draws it and
//! `runtime` drives the event loop. Widgets live in `components`.

mod actions;
mod components;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use runtime::run;
pub use state::{App, AppOptions, BrowseOutcome};
