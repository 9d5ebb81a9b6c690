use std::time::Duration;

use anyhow::{Context, Result};
use contacts_api::{CONTACTS_QUERY, ContactSource, ContactsResponse, QueryError};
use reqwest::blocking::Client;
use serde_json::{Value, json};

use super::envelope;

/// Runs the contacts query against a GraphQL endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct GraphqlSource {
	client: Client,
	endpoint: String,
	token: Option<String>,
}

impl GraphqlSource {
	pub fn new(endpoint: String, token: Option<String>, timeout: Duration) -> Result<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("contacts/", env!("CARGO_PKG_VERSION")))
			.build()
			.context("failed to build HTTP client")?;
		Ok(Self {
			client,
			endpoint,
			token,
		})
	}

	fn request_body() -> Value {
		json!({
			"operationName": "contacts",
			"query": CONTACTS_QUERY,
			"variables": {},
		})
	}
}

impl ContactSource for GraphqlSource {
	fn fetch(&self) -> Result<ContactsResponse, QueryError> {
		let mut request = self.client.post(&self.endpoint).json(&Self::request_body());
		if let Some(token) = &self.token {
			request = request.bearer_auth(token);
		}

		let response = request
			.send()
			.map_err(|err| QueryError::transport(err.to_string()))?;
		let status = response.status();
		let body: Value = match response.json() {
			Ok(body) => body,
			Err(_) if !status.is_success() => {
				return Err(QueryError::server(format!("server responded with {status}")));
			}
			Err(err) => return Err(QueryError::decode(err.to_string())),
		};

		// GraphQL servers report errors in the body, often with a non-2xx status.
		match envelope::decode(body) {
			Ok(_) if !status.is_success() => {
				Err(QueryError::server(format!("server responded with {status}")))
			}
			outcome => outcome,
		}
	}

	fn describe(&self) -> String {
		format!("graphql {}", self.endpoint)
	}
}
