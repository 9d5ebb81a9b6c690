//! Transient notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(4);

const MAX_TOASTS: usize = 8;

/// A message shown briefly over the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub message: String,
	expires_at: Instant,
}

/// Queue of live toasts. Only the newest is drawn.
#[derive(Debug, Clone)]
pub struct Toasts {
	lifetime: Duration,
	queue: VecDeque<Toast>,
}

impl Default for Toasts {
	fn default() -> Self {
		Self::new(DEFAULT_TOAST_LIFETIME)
	}
}

impl Toasts {
	#[must_use]
	pub fn new(lifetime: Duration) -> Self {
		Self {
			lifetime,
			queue: VecDeque::new(),
		}
	}

	/// Post `message`, timed from `now`.
	pub fn show_at(&mut self, message: impl Into<String>, now: Instant) {
		let message = message.into();
		log::info!("toast: {message}");
		if self.queue.len() == MAX_TOASTS {
			self.queue.pop_front();
		}
		self.queue.push_back(Toast {
			message,
			expires_at: now + self.lifetime,
		});
	}

	pub fn show(&mut self, message: impl Into<String>) {
		self.show_at(message, Instant::now());
	}

	/// Drop expired toasts.
	pub fn prune_at(&mut self, now: Instant) {
		self.queue.retain(|toast| toast.expires_at > now);
	}

	pub fn prune(&mut self) {
		self.prune_at(Instant::now());
	}

	/// Dismiss the visible toast. Returns `false` if there was none.
	pub fn dismiss(&mut self) -> bool {
		self.queue.pop_back().is_some()
	}

	/// The toast to draw.
	#[must_use]
	pub fn current(&self) -> Option<&Toast> {
		self.queue.back()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.queue.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toasts_expire_after_lifetime() {
		let start = Instant::now();
		let mut toasts = Toasts::new(Duration::from_secs(2));
		toasts.show_at("network error", start);

		toasts.prune_at(start + Duration::from_secs(1));
		assert_eq!(
			toasts.current().map(|t| t.message.as_str()),
			Some("network error")
		);

		toasts.prune_at(start + Duration::from_secs(2));
		assert!(toasts.is_empty());
	}

	#[test]
	fn newest_toast_is_visible_and_dismissible() {
		let start = Instant::now();
		let mut toasts = Toasts::default();
		toasts.show_at("first", start);
		toasts.show_at("second", start);

		assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("second"));
		assert!(toasts.dismiss());
		assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("first"));
		assert!(toasts.dismiss());
		assert!(!toasts.dismiss());
	}

	#[test]
	fn queue_is_bounded() {
		let start = Instant::now();
		let mut toasts = Toasts::default();
		for i in 0..20 {
			toasts.show_at(format!("error {i}"), start);
		}
		let mut seen = 0;
		while toasts.dismiss() {
			seen += 1;
		}
		assert_eq!(seen, MAX_TOASTS);
	}
}
