use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::i18n::{self, Translations};
use crate::screen::ContactDetail;
use crate::ui::theme::Theme;

pub(crate) fn render_detail(
	frame: &mut Frame,
	area: Rect,
	detail: &ContactDetail,
	strings: &Translations,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.title(Span::styled(strings.translate(i18n::DETAIL_TITLE), theme.header));

	let fields = detail.fields(strings);
	let label_width = fields
		.iter()
		.map(|field| field.label.chars().count())
		.max()
		.unwrap_or(0);

	let mut lines = vec![
		Line::from(Span::styled(detail.title().to_string(), theme.header)),
		Line::default(),
	];
	lines.extend(fields.into_iter().map(|field| {
		Line::from(vec![
			Span::styled(format!("{:<label_width$}  ", field.label), theme.muted),
			Span::raw(field.value),
		])
	}));

	frame.render_widget(Paragraph::new(lines).block(block), area);
}
