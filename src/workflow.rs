use std::sync::Arc;

use anyhow::{Context, Result};
use contacts::{AppOptions, BrowseOutcome, Contact, ContactSource, ContactsScreen};

use crate::settings::ResolvedConfig;

/// Coordinates building the contact source and running one of the modes.
pub(crate) struct ContactsWorkflow {
	source: Arc<dyn ContactSource>,
	options: AppOptions,
}

impl ContactsWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			source,
			initial_query,
			strings,
			denylist,
			toast_lifetime,
			..
		} = config;

		let source = source.build()?;
		log::info!("using contact source: {}", source.describe());

		Ok(Self {
			source,
			options: AppOptions {
				denylist,
				initial_query,
				strings,
				toast_lifetime,
			},
		})
	}

	/// Run the interactive UI.
	pub(crate) fn run(self) -> Result<BrowseOutcome> {
		contacts::run(self.source, self.options)
	}

	/// Fetch once and return the contacts the list screen would show for the
	/// initial query.
	pub(crate) fn list(self) -> Result<Vec<Contact>> {
		let response = self
			.source
			.fetch()
			.with_context(|| format!("failed to fetch contacts from {}", self.source.describe()))?;
		let mut screen = ContactsScreen::new(self.options.denylist)
			.with_search_text(self.options.initial_query);
		screen.apply_snapshot(response.contacts());
		Ok(screen.matching().cloned().collect())
	}
}
