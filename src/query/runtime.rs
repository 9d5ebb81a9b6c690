use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use contacts_api::{Contact, ContactSource, ContactsResponse, QueryError};

use super::commands::{QueryCommand, QueryResult};
use super::worker;

/// Something the UI should react to after a pump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryUpdate {
	/// Fresh data replaced the previous snapshot.
	Loaded { contacts: usize },
	/// A fetch failed; previous data, if any, is kept.
	Failed(QueryError),
}

/// Client-side view of the contacts query: loading flag, last data, last
/// error, and a way to refetch.
pub struct QueryRuntime {
	tx: Sender<QueryCommand>,
	rx: Receiver<QueryResult>,
	next_id: u64,
	latest_id: Option<u64>,
	applied_id: u64,
	loading: bool,
	data: Option<ContactsResponse>,
	error: Option<QueryError>,
	disconnected: bool,
}

impl Drop for QueryRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}

impl QueryRuntime {
	/// Spawn a worker for `source`. No fetch is issued until [`Self::fetch`].
	pub fn new(source: Arc<dyn ContactSource>) -> Self {
		let (tx, rx) = worker::spawn(source);
		Self {
			tx,
			rx,
			next_id: 0,
			latest_id: None,
			applied_id: 0,
			loading: false,
			data: None,
			error: None,
			disconnected: false,
		}
	}

	/// Issue a fetch and return its id.
	pub fn fetch(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		self.latest_id = Some(id);
		self.loading = true;
		if self.tx.send(QueryCommand::Fetch { id }).is_err() {
			log::warn!("fetch worker is gone; fetch {id} dropped");
			self.loading = false;
			self.error = Some(QueryError::transport("contact fetch worker stopped"));
		} else {
			log::debug!("issued fetch {id}");
		}
		id
	}

	/// Fetch again, replacing the current snapshot when it completes.
	pub fn refetch(&mut self) -> u64 {
		self.fetch()
	}

	/// Drain finished fetches.
	///
	/// Results older than one already applied are dropped. The loading flag
	/// stays set until the most recently issued fetch has answered.
	pub fn pump(&mut self) -> Vec<QueryUpdate> {
		let mut updates = Vec::new();
		loop {
			match self.rx.try_recv() {
				Ok(result) => {
					if let Some(update) = self.apply(result) {
						updates.push(update);
					}
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					if !self.disconnected {
						self.disconnected = true;
						self.loading = false;
						let error = QueryError::transport("contact fetch worker stopped");
						self.error = Some(error.clone());
						updates.push(QueryUpdate::Failed(error));
					}
					break;
				}
			}
		}
		updates
	}

	fn apply(&mut self, result: QueryResult) -> Option<QueryUpdate> {
		if Some(result.id) == self.latest_id {
			self.loading = false;
		}
		if result.id <= self.applied_id {
			log::debug!("discarding stale fetch {}", result.id);
			return None;
		}
		self.applied_id = result.id;
		match result.outcome {
			Ok(response) => {
				let contacts = response.contacts().len();
				log::info!("fetch {} returned {contacts} contacts", result.id);
				self.data = Some(response);
				self.error = None;
				Some(QueryUpdate::Loaded { contacts })
			}
			Err(error) => {
				log::warn!("fetch {} failed: {error}", result.id);
				self.error = Some(error.clone());
				Some(QueryUpdate::Failed(error))
			}
		}
	}

	/// Whether the most recent fetch is still outstanding.
	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Last successful response.
	#[must_use]
	pub fn data(&self) -> Option<&ContactsResponse> {
		self.data.as_ref()
	}

	/// Contacts from the last successful response.
	#[must_use]
	pub fn contacts(&self) -> &[Contact] {
		self.data
			.as_ref()
			.map(ContactsResponse::contacts)
			.unwrap_or(&[])
	}

	/// Error from the last applied fetch, cleared by the next success.
	#[must_use]
	pub fn error(&self) -> Option<&QueryError> {
		self.error.as_ref()
	}

	/// Number of fetches issued so far.
	#[must_use]
	pub fn issued(&self) -> u64 {
		self.next_id
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(QueryCommand::Shutdown);
	}
}
