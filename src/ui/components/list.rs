use contacts_api::Contact;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, HighlightSpacing, Row, Table, TableState};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const CONTACT_ICON: &str = "◉ ";
const COUNT_COLUMN_WIDTH: u16 = 6;

/// Rows to draw, already filtered.
pub(crate) struct ListPane<'a> {
	pub contacts: Vec<&'a Contact>,
}

pub(crate) fn render_contact_list(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	pane: ListPane<'_>,
	theme: &Theme,
) {
	let name_width = area
		.width
		.saturating_sub(COUNT_COLUMN_WIDTH)
		.saturating_sub(HIGHLIGHT_SYMBOL.width() as u16)
		.saturating_sub(1);
	let rows: Vec<Row> = pane
		.contacts
		.iter()
		.map(|contact| contact_row(contact, name_width as usize, theme))
		.collect();

	let table = Table::new(rows, [
		Constraint::Min(1),
		Constraint::Length(COUNT_COLUMN_WIDTH),
	])
	.column_spacing(1)
	.highlight_spacing(HighlightSpacing::WhenSelected)
	.highlight_symbol(HIGHLIGHT_SYMBOL)
	.row_highlight_style(theme.row_highlight);

	frame.render_stateful_widget(table, area, table_state);
}

fn contact_row<'a>(contact: &'a Contact, width: usize, theme: &Theme) -> Row<'a> {
	let mut spans = vec![
		Span::styled(CONTACT_ICON, theme.icon),
		Span::raw(truncate(contact.display_name(), width)),
	];
	if contact.alias.is_some() {
		let used = CONTACT_ICON.width() + contact.display_name().width();
		let handle = format!(" @{}", contact.username);
		if used + handle.width() <= width {
			spans.push(Span::styled(handle, theme.muted));
		}
	}
	let count = Cell::from(
		Line::from(Span::styled(contact.transactions_count.to_string(), theme.muted))
			.right_aligned(),
	);
	Row::new(vec![Cell::from(Line::from(spans)), count])
}

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		out.push(ch);
		used += ch_width;
	}
	out.push('…');
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncate_respects_display_width() {
		assert_eq!(truncate("alice", 10), "alice");
		assert_eq!(truncate("alexandria", 5), "alex…");
		assert_eq!(truncate("日本語テキスト", 5), "日本…");
		assert_eq!(truncate("abc", 0), "");
	}
}
