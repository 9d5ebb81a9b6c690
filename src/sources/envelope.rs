use contacts_api::{ContactsResponse, QueryError};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
	#[serde(default)]
	data: Option<ContactsResponse>,
	#[serde(default)]
	errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
	message: String,
}

/// Decode either a GraphQL envelope (`{ "data": ..., "errors": [...] }`) or
/// a bare `{ "me": ... }` payload.
///
/// The first GraphQL error wins over any partial data.
pub(super) fn decode(value: Value) -> Result<ContactsResponse, QueryError> {
	let is_envelope = value
		.as_object()
		.is_some_and(|object| object.contains_key("data") || object.contains_key("errors"));

	if !is_envelope {
		return serde_json::from_value(value).map_err(|err| QueryError::decode(err.to_string()));
	}

	let envelope: GraphqlEnvelope =
		serde_json::from_value(value).map_err(|err| QueryError::decode(err.to_string()))?;
	if let Some(error) = envelope.errors.into_iter().next() {
		return Err(QueryError::server(error.message));
	}
	Ok(envelope.data.unwrap_or_default())
}
