mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_contacts, print_json, print_plain};
use workflow::ContactsWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	let resolved = settings::load(&cli)?;
	resolved.init_logging()?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = ContactsWorkflow::from_config(resolved)?;

	if cli.list {
		let contacts = workflow.list()?;
		return print_contacts(&contacts, cli.output == OutputFormat::Json);
	}

	let outcome = workflow.run()?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
