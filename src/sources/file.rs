use std::fs;
use std::path::PathBuf;

use contacts_api::{ContactSource, ContactsResponse, QueryError};

use super::envelope;

/// Reads the contacts query result from a JSON document on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
	path: PathBuf,
}

impl FileSource {
	#[must_use]
	pub fn new(path: PathBuf) -> Self {
		Self { path }
	}
}

impl ContactSource for FileSource {
	fn fetch(&self) -> Result<ContactsResponse, QueryError> {
		let text = fs::read_to_string(&self.path).map_err(|err| {
			QueryError::io(format!("failed to read {}: {err}", self.path.display()))
		})?;
		let value = serde_json::from_str(&text).map_err(|err| QueryError::decode(err.to_string()))?;
		envelope::decode(value)
	}

	fn describe(&self) -> String {
		format!("file {}", self.path.display())
	}
}
