use anyhow::Result;
use contacts::{BrowseOutcome, Contact};
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
	match &outcome.contact {
		Some(contact) => println!("{}", contact.username),
		None => println!("No contact opened (query: '{}')", outcome.query),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.contact.is_some(),
		"query": outcome.query,
		"contact": outcome.contact,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

fn format_contact_line(contact: &Contact) -> String {
	match &contact.alias {
		Some(alias) => format!("{}\t{}\t{}", contact.username, alias, contact.transactions_count),
		None => format!("{}\t\t{}", contact.username, contact.transactions_count),
	}
}

/// Print a contact listing, one contact per line or as a JSON array.
pub(crate) fn print_contacts(contacts: &[Contact], json: bool) -> Result<()> {
	if json {
		println!("{}", serde_json::to_string_pretty(contacts)?);
	} else {
		for contact in contacts {
			println!("{}", format_contact_line(contact));
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_contact_record() {
		let outcome = BrowseOutcome {
			query: "ali".into(),
			contact: Some(Contact::new("alice").with_alias("Alice A").with_transactions(3)),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["contact"]["username"], "alice");
		assert_eq!(value["contact"]["transactionsCount"], 3);
	}

	#[test]
	fn json_format_without_contact_is_null() {
		let outcome = BrowseOutcome {
			query: String::new(),
			contact: None,
		};
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["contact"].is_null());
	}

	#[test]
	fn plain_line_leaves_alias_column_empty() {
		assert_eq!(format_contact_line(&Contact::new("bob")), "bob\t\t0");
		assert_eq!(
			format_contact_line(&Contact::new("al").with_alias("Al").with_transactions(2)),
			"al\tAl\t2"
		);
	}
}
