use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;

use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

const PROMPT: &str = "> ";

pub(crate) fn render_search_bar(frame: &mut Frame, area: Rect, input: &SearchInput<'_>, theme: &Theme) {
	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(PROMPT.len() as u16), Constraint::Min(1)])
			.areas(area);
	frame.render_widget(Span::styled(PROMPT, theme.prompt), prompt_area);
	frame.render_widget(input.textarea(), input_area);
}
