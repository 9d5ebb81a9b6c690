use contacts_api::{ContactsResponse, QueryError};

/// Requests sent to the fetch worker.
#[derive(Debug)]
pub(crate) enum QueryCommand {
	Fetch { id: u64 },
	Shutdown,
}

/// Completed fetch reported back to the UI thread.
#[derive(Debug)]
pub(crate) struct QueryResult {
	pub id: u64,
	pub outcome: Result<ContactsResponse, QueryError>,
}
