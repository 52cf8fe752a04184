//! Add flow

use cfdns_provider::{CreateDnsRecordRequest, DnsProvider};

use super::ask;
use crate::message::form;
use crate::model::{App, State};
use crate::util::Console;
use crate::view;

enum FormOutcome {
    Submit(CreateDnsRecordRequest),
    Back,
    EndOfInput,
}

pub(super) async fn run(
    app: &mut App,
    provider: &dyn DnsProvider,
    console: &mut dyn Console,
) -> State {
    let request = match fill_form(console, app.default_ttl) {
        FormOutcome::Submit(request) => request,
        FormOutcome::Back => return State::MenuPrompt,
        FormOutcome::EndOfInput => return State::Exited,
    };

    tracing::debug!(
        record_type = %request.record_type,
        name = %request.name,
        "Creating record"
    );

    match provider.create_record(&request).await {
        Ok(record) => {
            view::render_created(console, &record);
            app.snapshot.clear();
            State::Listing
        }
        Err(e) => {
            view::render_provider_error(console, &e);
            State::MenuPrompt
        }
    }
}

fn fill_form(console: &mut dyn Console, default_ttl: u32) -> FormOutcome {
    view::render_record_types(console);

    let Some(record_type) = ask(
        console,
        "Enter record type (number or name, b to go back): ",
        form::parse_record_type,
    ) else {
        return FormOutcome::EndOfInput;
    };
    let Some(record_type) = record_type else {
        return FormOutcome::Back;
    };

    let Some(name) = ask(console, "Enter record name: ", |s| {
        form::parse_required(s, "record name")
    }) else {
        return FormOutcome::EndOfInput;
    };

    let Some(content) = ask(console, "Enter record content: ", |s| {
        form::parse_required(s, "record content")
    }) else {
        return FormOutcome::EndOfInput;
    };

    let ttl_prompt = format!("Enter TTL in seconds (blank for {default_ttl}, 1 for auto): ");
    let Some(ttl) = ask(console, &ttl_prompt, |s| form::parse_ttl(s, default_ttl)) else {
        return FormOutcome::EndOfInput;
    };

    let mut priority = None;
    if record_type.has_priority() {
        let Some(value) = ask(console, "Enter priority (blank for none): ", form::parse_priority)
        else {
            return FormOutcome::EndOfInput;
        };
        priority = value;
    }

    let mut proxied = false;
    if record_type.is_proxiable() {
        let Some(value) = ask(console, "Proxy through Cloudflare? (y/N): ", form::parse_yes_no)
        else {
            return FormOutcome::EndOfInput;
        };
        proxied = value;
    }

    FormOutcome::Submit(
        CreateDnsRecordRequest::new(record_type, name, content)
            .with_ttl(ttl)
            .with_proxied(proxied)
            .with_priority(priority),
    )
}
