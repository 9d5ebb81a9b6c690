use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use contacts_api::ContactSource;

use super::commands::{QueryCommand, QueryResult};

/// Launch the fetch worker and return its channels.
pub(crate) fn spawn(
	source: Arc<dyn ContactSource>,
) -> (Sender<QueryCommand>, Receiver<QueryResult>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(source.as_ref(), command_rx, result_tx));

	(command_tx, result_rx)
}

fn worker_loop(
	source: &dyn ContactSource,
	command_rx: Receiver<QueryCommand>,
	result_tx: Sender<QueryResult>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(source, &result_tx, command) {
			break;
		}
	}
}

fn handle_command(
	source: &dyn ContactSource,
	result_tx: &Sender<QueryResult>,
	command: QueryCommand,
) -> bool {
	match command {
		QueryCommand::Fetch { id } => {
			log::debug!("fetch {id} from {}", source.describe());
			let outcome = source.fetch();
			result_tx.send(QueryResult { id, outcome }).is_ok()
		}
		QueryCommand::Shutdown => false,
	}
}
