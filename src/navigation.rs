//! Minimal route stack for the two screens.

use contacts_api::Contact;

/// A screen in the stack, with its navigation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	Contacts,
	ContactDetail { contact: Contact },
}

/// Stack of routes rooted at the contact list.
///
/// Every transition returns the route that gained focus so callers can
/// forward a focus event to it. Pushing a detail route does not unmount the
/// list underneath.
#[derive(Debug, Clone)]
pub struct Navigator {
	stack: Vec<Route>,
}

impl Default for Navigator {
	fn default() -> Self {
		Self {
			stack: vec![Route::Contacts],
		}
	}
}

impl Navigator {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Route on top of the stack.
	#[must_use]
	pub fn current(&self) -> &Route {
		// The root is never popped.
		&self.stack[self.stack.len() - 1]
	}

	/// Push `route` and return it as the focused route.
	pub fn navigate(&mut self, route: Route) -> &Route {
		log::debug!("navigate to {}", route_name(&route));
		self.stack.push(route);
		self.current()
	}

	/// Pop the top route. Returns the newly focused route, or `None` when
	/// already at the root.
	pub fn go_back(&mut self) -> Option<&Route> {
		if self.stack.len() <= 1 {
			return None;
		}
		self.stack.pop();
		log::debug!("back to {}", route_name(self.current()));
		Some(self.current())
	}

	/// Number of routes on the stack.
	#[must_use]
	pub fn depth(&self) -> usize {
		self.stack.len()
	}
}

fn route_name(route: &Route) -> &'static str {
	match route {
		Route::Contacts => "contacts",
		Route::ContactDetail { .. } => "contactDetail",
	}
}
