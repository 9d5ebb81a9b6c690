//! Widgets composed by the renderer.

mod detail;
mod empty;
mod list;
mod search_bar;
mod toast;

pub(crate) use detail::render_detail;
pub(crate) use empty::render_empty_state;
pub(crate) use list::{ListPane, render_contact_list};
pub(crate) use search_bar::render_search_bar;
pub(crate) use toast::render_toast;
