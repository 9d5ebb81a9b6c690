/// One-shot refetch triggered by the first focus event of a screen instance.
///
/// A new value is created for every mount, so the flag never outlives the
/// screen that owns it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusRefresh {
	#[default]
	NotYetRefreshed,
	Refreshed,
}

/// What the owner should do in response to a focus event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAction {
	Refetch,
	Nothing,
}

impl FocusRefresh {
	/// Advance on a focus event.
	pub fn on_focus(&mut self) -> FocusAction {
		match self {
			Self::NotYetRefreshed => {
				*self = Self::Refreshed;
				FocusAction::Refetch
			}
			Self::Refreshed => FocusAction::Nothing,
		}
	}
}
