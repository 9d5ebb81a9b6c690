use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use contacts::sources::SourceSpec;
use contacts::toast::DEFAULT_TOAST_LIFETIME;
use contacts::{Denylist, Translations, app_dirs, i18n, logging};

use crate::cli::CliArgs;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	source: SourceSection,
	ui: UiSection,
	contacts: ContactsSection,
	strings: HashMap<String, StringOverride>,
	logging: LoggingSection,
}

/// A `[strings]` entry: either `"common.search" = "Find"` or a
/// `[strings.common]` table of `search = "Find"` pairs.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StringOverride {
	Text(String),
	Group(HashMap<String, String>),
}

impl StringOverride {
	fn into_pairs(self, key: String) -> Vec<(String, String)> {
		match self {
			Self::Text(text) => vec![(key, text)],
			Self::Group(entries) => entries
				.into_iter()
				.map(|(name, text)| (format!("{key}.{name}"), text))
				.collect(),
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
	file: Option<PathBuf>,
	endpoint: Option<String>,
	token: Option<String>,
	timeout_secs: Option<u64>,
	demo: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	locale: Option<String>,
	initial_query: Option<String>,
	toast_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ContactsSection {
	deny: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

/// Configuration after merging files, environment and command line.
pub struct ResolvedConfig {
	pub source: SourceSpec,
	pub initial_query: String,
	pub strings: Translations,
	pub denylist: Denylist,
	pub toast_lifetime: Duration,
	pub log_level: String,
	pub log_file: PathBuf,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Source: {}", self.source.summary());
		println!("  Locale: {}", self.strings.locale());
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Hidden usernames: {}", self.denylist.usernames().join(", "));
		println!("  Toast lifetime: {}s", self.toast_lifetime.as_secs());
		println!("  Log: {} ({})", self.log_file.display(), self.log_level);
	}

	/// Install the file logger described by this configuration.
	pub fn init_logging(&self) -> Result<()> {
		logging::initialize(&self.log_level, &self.log_file)
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli, default_config_files())?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs, defaults: Vec<PathBuf>) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in defaults {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("contacts")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("contacts.deny"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".contacts.toml"));
		files.push(current_dir.join("contacts.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		// A source given on the command line replaces any configured one.
		if cli.source.is_some() || cli.endpoint.is_some() {
			self.source.file = cli.source.clone();
			self.source.endpoint = cli.endpoint.clone();
		}
		if let Some(token) = cli.token.clone() {
			self.source.token = Some(token);
		}
		if cli.demo {
			self.source.demo = Some(true);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(locale) = cli.locale.clone() {
			self.ui.locale = Some(locale);
		}
		if !cli.deny.is_empty() {
			self.contacts
				.deny
				.get_or_insert_with(Vec::new)
				.extend(cli.deny.iter().cloned());
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let RawConfig {
			source,
			ui,
			contacts,
			strings,
			logging: logging_section,
		} = self;

		let timeout = Duration::from_secs(source.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
		let source = SourceSpec::resolve(
			source.demo.unwrap_or(false),
			source.file,
			source.endpoint.filter(|endpoint| !endpoint.trim().is_empty()),
			source.token.filter(|token| !token.is_empty()),
			timeout,
		)
		.context("invalid contact source configuration")?;

		let overrides: HashMap<String, String> = strings
			.into_iter()
			.flat_map(|(key, entry)| entry.into_pairs(key))
			.collect();
		let locale = ui.locale.unwrap_or_else(|| i18n::DEFAULT_LOCALE.to_string());
		let strings = Translations::new(&locale).with_overrides(overrides);

		let toast_lifetime = ui
			.toast_secs
			.map(Duration::from_secs)
			.unwrap_or(DEFAULT_TOAST_LIFETIME);

		let log_file = match logging_section.file {
			Some(file) => file,
			None => logging::default_log_file()?,
		};

		Ok(ResolvedConfig {
			source,
			initial_query: ui.initial_query.unwrap_or_default(),
			strings,
			denylist: Denylist::with_additional(contacts.deny.unwrap_or_default()),
			toast_lifetime,
			log_level: logging_section
				.level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			log_file,
		})
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::TempDir;

	use super::*;

	fn parse(args: &[&str]) -> CliArgs {
		let mut argv = vec!["contacts"];
		argv.extend_from_slice(args);
		CliArgs::try_parse_from(argv).expect("parse")
	}

	fn load_with(cli: &CliArgs, defaults: Vec<PathBuf>) -> Result<ResolvedConfig> {
		let mut raw: RawConfig = build_config(cli, defaults)?.try_deserialize()?;
		raw.apply_cli_overrides(cli);
		raw.resolve()
	}

	fn write_config(dir: &TempDir, name: &str, body: &str) -> PathBuf {
		let path = dir.path().join(name);
		fs::write(&path, body).expect("write config");
		path
	}

	const FULL_CONFIG: &str = r#"
[source]
file = "contacts.json"

[ui]
locale = "es"
toast_secs = 9

[contacts]
deny = ["spam"]

[strings.ContactsScreen]
noContactsYet = "Nobody here"

[logging]
file = "/tmp/contacts-test.log"
"#;

	#[test]
	fn default_config_file_supplies_settings() {
		let dir = TempDir::new().expect("tempdir");
		let config = write_config(&dir, "config.toml", FULL_CONFIG);
		let resolved = load_with(&parse(&[]), vec![config]).expect("load");

		assert_eq!(resolved.source, SourceSpec::File(PathBuf::from("contacts.json")));
		assert_eq!(resolved.strings.locale(), "es");
		assert_eq!(resolved.strings.translate(i18n::NO_CONTACTS_YET), "Nobody here");
		assert_eq!(resolved.toast_lifetime, Duration::from_secs(9));
		assert!(resolved.denylist.contains("spam"));
		assert!(resolved.denylist.contains("BitcoinBeachMarketing"));
		assert_eq!(resolved.log_file, PathBuf::from("/tmp/contacts-test.log"));
	}

	#[test]
	fn no_config_skips_default_files() {
		let dir = TempDir::new().expect("tempdir");
		let config = write_config(&dir, "config.toml", FULL_CONFIG);
		let resolved = load_with(&parse(&["--no-config", "--demo"]), vec![config]).expect("load");

		assert_eq!(resolved.source, SourceSpec::Demo);
		assert_eq!(resolved.strings.locale(), "en");
		assert!(!resolved.denylist.contains("spam"));
		assert_eq!(resolved.denylist.usernames(), ["BitcoinBeachMarketing"]);
	}

	#[test]
	fn flat_and_grouped_string_overrides_mix() {
		let dir = TempDir::new().expect("tempdir");
		let config = write_config(
			&dir,
			"strings.toml",
			r#"
[strings]
"common.search" = "Find"

[strings.ContactsScreen]
title = "People"
"#,
		);
		let path = config.to_string_lossy().into_owned();
		let resolved = load_with(&parse(&["--demo", "-c", &path]), Vec::new()).expect("load");

		assert_eq!(resolved.strings.translate(i18n::SEARCH_PLACEHOLDER), "Find");
		assert_eq!(resolved.strings.translate(i18n::CONTACTS_TITLE), "People");
		assert_eq!(resolved.strings.translate(i18n::LOADING), "Loading");
	}

	#[test]
	fn cli_source_replaces_configured_one() {
		let dir = TempDir::new().expect("tempdir");
		let config = write_config(
			&dir,
			"config.toml",
			"[source]\nfile = \"contacts.json\"\n",
		);
		let cli = parse(&["--endpoint", "https://api.example/graphql"]);
		let resolved = load_with(&cli, vec![config]).expect("load");
		assert!(matches!(
			resolved.source,
			SourceSpec::Graphql { ref endpoint, .. } if endpoint == "https://api.example/graphql"
		));
	}

	#[test]
	fn explicit_config_file_must_exist() {
		let cli = parse(&["-c", "/definitely/not/here.toml"]);
		assert!(load_with(&cli, Vec::new()).is_err());
	}

	#[test]
	fn demo_flag_without_source() {
		let cli = parse(&["--demo", "-q", "ali", "--deny", "bob"]);
		let resolved = load_with(&cli, Vec::new()).expect("load");
		assert_eq!(resolved.source, SourceSpec::Demo);
		assert_eq!(resolved.initial_query, "ali");
		assert!(resolved.denylist.contains("bob"));
	}

	#[test]
	fn missing_source_is_reported() {
		let cli = parse(&[]);
		let err = load_with(&cli, Vec::new())
			.err()
			.expect("missing source should fail");
		assert!(format!("{err:#}").contains("no contact source configured"));
	}
}
