//! Concrete [`ContactSource`] implementations and selection between them.

mod envelope;
mod file;
mod graphql;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use contacts_api::{ContactSource, StaticSource};
use thiserror::Error;

pub use file::FileSource;
pub use graphql::GraphqlSource;

/// Where contacts come from, as resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
	Demo,
	File(PathBuf),
	Graphql {
		endpoint: String,
		token: Option<String>,
		timeout: Duration,
	},
}

/// Configuration that cannot be turned into a source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceConfigError {
	#[error("both a contacts file and a GraphQL endpoint are configured; pick one")]
	Conflicting,

	#[error("no contact source configured (use --source, --endpoint or --demo)")]
	Missing,

	#[error("endpoint '{0}' must start with http:// or https://")]
	InvalidEndpoint(String),
}

impl SourceSpec {
	/// Resolve the source from the optional settings.
	pub fn resolve(
		demo: bool,
		file: Option<PathBuf>,
		endpoint: Option<String>,
		token: Option<String>,
		timeout: Duration,
	) -> Result<Self, SourceConfigError> {
		match (file, endpoint) {
			(Some(_), Some(_)) => Err(SourceConfigError::Conflicting),
			(Some(path), None) => Ok(Self::File(path)),
			(None, Some(endpoint)) => {
				if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
					return Err(SourceConfigError::InvalidEndpoint(endpoint));
				}
				Ok(Self::Graphql {
					endpoint,
					token,
					timeout,
				})
			}
			(None, None) if demo => Ok(Self::Demo),
			(None, None) => Err(SourceConfigError::Missing),
		}
	}

	/// Instantiate the source.
	pub fn build(&self) -> anyhow::Result<Arc<dyn ContactSource>> {
		let source: Arc<dyn ContactSource> = match self {
			Self::Demo => Arc::new(StaticSource::demo()),
			Self::File(path) => Arc::new(FileSource::new(path.clone())),
			Self::Graphql {
				endpoint,
				token,
				timeout,
			} => Arc::new(GraphqlSource::new(endpoint.clone(), token.clone(), *timeout)?),
		};
		Ok(source)
	}

	/// Short description for `--print-config`.
	#[must_use]
	pub fn summary(&self) -> String {
		match self {
			Self::Demo => "built-in demo contacts".to_string(),
			Self::File(path) => format!("file {}", path.display()),
			Self::Graphql { endpoint, token, .. } => format!(
				"GraphQL {endpoint}{}",
				if token.is_some() { " (authenticated)" } else { "" }
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TIMEOUT: Duration = Duration::from_secs(5);

	#[test]
	fn file_and_endpoint_conflict() {
		let result = SourceSpec::resolve(
			false,
			Some(PathBuf::from("contacts.json")),
			Some("https://api.example".into()),
			None,
			TIMEOUT,
		);
		assert_eq!(result, Err(SourceConfigError::Conflicting));
	}

	#[test]
	fn explicit_source_beats_demo() {
		let resolved = SourceSpec::resolve(true, Some(PathBuf::from("c.json")), None, None, TIMEOUT)
			.expect("resolved source");
		assert_eq!(resolved, SourceSpec::File(PathBuf::from("c.json")));
	}

	#[test]
	fn endpoint_needs_http_scheme() {
		let result = SourceSpec::resolve(false, None, Some("api.example".into()), None, TIMEOUT);
		assert_eq!(
			result,
			Err(SourceConfigError::InvalidEndpoint("api.example".into()))
		);
	}

	#[test]
	fn nothing_configured_is_an_error() {
		assert_eq!(
			SourceSpec::resolve(false, None, None, None, TIMEOUT),
			Err(SourceConfigError::Missing)
		);
		assert_eq!(
			SourceSpec::resolve(true, None, None, None, TIMEOUT),
			Ok(SourceSpec::Demo)
		);
	}
}
