//! Where `contacts` keeps its config file and its log.
//!
//! `CONTACTS_CONFIG_DIR` and `CONTACTS_DATA_DIR` point either location
//! somewhere else, e.g. for tests or a portable install.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
	Config,
	Data,
}

impl AppDir {
	fn env_var(self) -> &'static str {
		match self {
			Self::Config => "CONTACTS_CONFIG_DIR",
			Self::Data => "CONTACTS_DATA_DIR",
		}
	}

	fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = non_empty(env::var_os(self.env_var())) {
			return Ok(dir);
		}

		let dirs = ProjectDirs::from("io", "albo", "contacts")
			.ok_or_else(|| anyhow!("no home directory to place contacts files in"))?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

// An exported-but-empty variable counts as unset.
fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory searched for `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve()
}

/// Directory holding `contacts.log`.
pub fn get_data_dir() -> Result<PathBuf> {
	AppDir::Data.resolve()
}
