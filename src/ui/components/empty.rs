use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{self, Translations};
use crate::screen::EmptyState;
use crate::ui::theme::Theme;

pub(crate) fn render_empty_state(
	frame: &mut Frame,
	area: Rect,
	state: EmptyState,
	strings: &Translations,
	throbber_state: &mut ThrobberState,
	theme: &Theme,
) {
	match state {
		EmptyState::Loading => {
			let [_, middle, _] = Layout::vertical([
				Constraint::Fill(1),
				Constraint::Length(1),
				Constraint::Fill(1),
			])
			.areas(area);
			let label = strings.translate(i18n::LOADING);
			let width = throbber_width(label, middle.width);
			let [centered] = Layout::horizontal([Constraint::Length(width)])
				.flex(ratatui::layout::Flex::Center)
				.areas(middle);
			let throbber = Throbber::default().label(label).style(theme.empty);
			frame.render_stateful_widget(throbber, centered, throbber_state);
		}
		EmptyState::NoMatchingContacts | EmptyState::NoContactsYet => {
			let key = if state == EmptyState::NoMatchingContacts {
				i18n::NO_MATCHING_CONTACTS
			} else {
				i18n::NO_CONTACTS_YET
			};
			let message = Paragraph::new(strings.translate(key))
				.alignment(Alignment::Center)
				.wrap(Wrap { trim: true })
				.style(theme.empty);
			let [_, message_area] =
				Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
			frame.render_widget(message, message_area);
		}
	}
}

/// Columns for the spinner, a space and `label`, capped at `available`.
fn throbber_width(label: &str, available: u16) -> u16 {
	u16::try_from(label.width())
		.unwrap_or(u16::MAX)
		.saturating_add(2)
		.min(available)
}
