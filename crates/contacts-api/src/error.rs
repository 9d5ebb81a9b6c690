use thiserror::Error;

/// Failure to obtain the contact list from a [`ContactSource`](crate::ContactSource).
///
/// The `Display` output is shown to the user verbatim, so variants carry the
/// message they were created with rather than wrapping source errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
	/// The backing document could not be read.
	#[error("{0}")]
	Io(String),

	/// The payload was not a valid contacts response.
	#[error("invalid contacts response: {0}")]
	Decode(String),

	/// The request never produced a response.
	#[error("{0}")]
	Transport(String),

	/// The server answered with an error message.
	#[error("{0}")]
	Server(String),
}

impl QueryError {
	pub fn io(message: impl Into<String>) -> Self {
		Self::Io(message.into())
	}

	pub fn decode(message: impl Into<String>) -> Self {
		Self::Decode(message.into())
	}

	pub fn transport(message: impl Into<String>) -> Self {
		Self::Transport(message.into())
	}

	pub fn server(message: impl Into<String>) -> Self {
		Self::Server(message.into())
	}
}
