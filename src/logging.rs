//! File-backed logging.
//!
//! The terminal belongs to the UI while it runs, so log records go to a file
//! instead of stderr. `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::app_dirs;

const LOG_FILE_NAME: &str = "contacts.log";

/// Default log location inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global logger, appending to `file`.
///
/// Calling this more than once keeps the first logger.
pub fn initialize(level: &str, file: &Path) -> Result<()> {
	if let Some(parent) = file.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let sink = OpenOptions::new()
		.create(true)
		.append(true)
		.open(file)
		.with_context(|| format!("failed to open log file {}", file.display()))?;

	let installed = Builder::from_env(Env::default().default_filter_or(level))
		.target(Target::Pipe(Box::new(sink)))
		.format_timestamp_millis()
		.try_init();
	if installed.is_ok() {
		log::debug!("logging to {}", file.display());
	}
	Ok(())
}
