//! Delete flow

use cfdns_provider::DnsProvider;

use super::{read_line, refresh};
use crate::message::DeleteSelection;
use crate::model::{App, State};
use crate::util::Console;
use crate::view;

const DELETE_PROMPT: &str =
    "Enter the numbers of the records to delete (e.g. 1 3 4, blank or b to go back): ";

pub(super) async fn run(
    app: &mut App,
    provider: &dyn DnsProvider,
    console: &mut dyn Console,
) -> State {
    // Indices typed below must match what was just printed.
    if !refresh(app, provider, console).await || app.snapshot.is_empty() {
        return State::MenuPrompt;
    }

    let Some(line) = read_line(console, DELETE_PROMPT) else {
        return State::Exited;
    };

    let (indices, not_numbers) = match DeleteSelection::parse(&line) {
        DeleteSelection::Back => return State::MenuPrompt,
        DeleteSelection::Indices { indices, rejected } => (indices, rejected),
    };

    let resolution = app.snapshot.resolve(&indices);
    for e in not_numbers.iter().chain(&resolution.rejected) {
        view::render_input_error(console, e);
    }

    let ids: Vec<String> = resolution.records.iter().map(|r| r.id.clone()).collect();
    for id in ids {
        tracing::debug!(record_id = %id, "Deleting record");
        match provider.delete_record(&id).await {
            Ok(deleted) => view::render_deleted(console, &deleted.id),
            Err(e) => view::render_provider_error(console, &e),
        }
    }

    app.snapshot.clear();
    State::Listing
}
