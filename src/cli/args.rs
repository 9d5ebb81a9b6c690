use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use contacts::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("contacts {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "contacts",
	version,
	long_version = long_version(),
	about = "Browse and search your contact list",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `contacts` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CONTACTS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 's',
		long = "source",
		value_name = "FILE",
		help = "Read the contacts query result from a JSON file"
	)]
	pub(crate) source: Option<PathBuf>,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Fetch contacts from a GraphQL endpoint"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long,
		value_name = "TOKEN",
		env = "CONTACTS_TOKEN",
		hide_env_values = true,
		help = "Bearer token sent to the GraphQL endpoint"
	)]
	pub(crate) token: Option<String>,
	#[arg(long, help = "Use built-in sample contacts when no source is configured")]
	pub(crate) demo: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "TEXT",
		help = "Initial search text (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 'l',
		long,
		value_name = "LANG",
		help = "Locale for user-facing text (default: en)"
	)]
	pub(crate) locale: Option<String>,
	#[arg(
		long = "deny",
		value_name = "USERNAME",
		action = ArgAction::Append,
		help = "Hide an additional username from the list"
	)]
	pub(crate) deny: Vec<String>,
	#[arg(long, help = "Print matching contacts and exit without starting the UI")]
	pub(crate) list: bool,
	#[arg(long = "print-config", help = "Print the effective configuration before running")]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for the result"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
