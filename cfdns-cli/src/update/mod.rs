//! Update layer
//!
//! [`step`] runs the current [`State`] once and moves the session to the next
//! one. Remote failures are printed and never end the session; only an exit
//! choice or the end of input reaches [`State::Exited`].

mod add;
mod delete;

use cfdns_provider::DnsProvider;

use crate::error::InputError;
use crate::message::MenuChoice;
use crate::model::{App, State};
use crate::util::Console;
use crate::view;

/// Run the current state once.
pub async fn step(app: &mut App, provider: &dyn DnsProvider, console: &mut dyn Console) {
    app.state = match app.state {
        State::Listing | State::Viewing => {
            refresh(app, provider, console).await;
            State::MenuPrompt
        }
        State::MenuPrompt => prompt_menu(console),
        State::Adding => add::run(app, provider, console).await,
        State::Deleting => delete::run(app, provider, console).await,
        State::Exited => State::Exited,
    };
}

/// Fetch the zone's records into the snapshot and print them.
///
/// On failure the error is printed, the snapshot emptied and `false` returned.
pub(crate) async fn refresh(
    app: &mut App,
    provider: &dyn DnsProvider,
    console: &mut dyn Console,
) -> bool {
    match provider.list_records().await {
        Ok(records) => {
            app.snapshot.replace(records);
            tracing::debug!(count = app.snapshot.len(), "Fetched records");
            view::render_records(console, &app.snapshot);
            true
        }
        Err(e) => {
            app.snapshot.clear();
            view::render_provider_error(console, &e);
            false
        }
    }
}

fn prompt_menu(console: &mut dyn Console) -> State {
    view::render_menu(console);

    let Some(line) = read_line(console, view::MENU_PROMPT) else {
        return State::Exited;
    };

    match MenuChoice::parse(&line) {
        Ok(MenuChoice::View) => State::Viewing,
        Ok(MenuChoice::Add) => State::Adding,
        Ok(MenuChoice::Delete) => State::Deleting,
        Ok(MenuChoice::Exit) => State::Exited,
        Err(e) => {
            view::render_input_error(console, &e);
            State::MenuPrompt
        }
    }
}

/// Read one line; a read failure counts as end of input.
pub(crate) fn read_line(console: &mut dyn Console, prompt: &str) -> Option<String> {
    match console.prompt(prompt) {
        Ok(line) => line,
        Err(e) => {
            tracing::warn!("Failed to read input: {e}");
            None
        }
    }
}

/// Ask until `parse` accepts the line. `None` at end of input.
pub(crate) fn ask<T>(
    console: &mut dyn Console,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> Option<T> {
    loop {
        let line = read_line(console, prompt)?;
        match parse(&line) {
            Ok(value) => return Some(value),
            Err(e) => view::render_input_error(console, &e),
        }
    }
}
