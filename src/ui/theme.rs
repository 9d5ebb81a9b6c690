use ratatui::style::{Color, Modifier, Style};

/// Styles used across the contact screens.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Screen titles and table headers.
	pub header: Style,
	/// Selected row.
	pub row_highlight: Style,
	/// Search prompt marker.
	pub prompt: Style,
	/// Placeholder and empty-state text.
	pub empty: Style,
	/// Secondary text such as usernames under an alias.
	pub muted: Style,
	/// Contact icon.
	pub icon: Style,
	/// Toast body and border.
	pub toast: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			header: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
			row_highlight: Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
			prompt: Style::new().fg(Color::Cyan),
			empty: Style::new().fg(Color::Gray),
			muted: Style::new().fg(Color::DarkGray),
			icon: Style::new().fg(Color::Green),
			toast: Style::new().fg(Color::White).bg(Color::Red),
		}
	}
}
