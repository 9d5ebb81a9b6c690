use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::toast::Toast;
use crate::ui::theme::Theme;

const TOAST_HEIGHT: u16 = 3;

/// Draw `toast` over the bottom of `area`.
pub(crate) fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
	if area.height < TOAST_HEIGHT || area.width < 4 {
		return;
	}
	let toast_area = Rect {
		x: area.x,
		y: area.y + area.height - TOAST_HEIGHT,
		width: area.width,
		height: TOAST_HEIGHT,
	};
	let body = Paragraph::new(toast.message.as_str())
		.wrap(Wrap { trim: true })
		.style(theme.toast)
		.block(Block::default().borders(Borders::ALL).style(theme.toast));
	frame.render_widget(Clear, toast_area);
	frame.render_widget(body, toast_area);
}
