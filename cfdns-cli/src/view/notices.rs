//! Menu, prompts and error notices

use cfdns_provider::{DnsRecordType, ProviderError};

use crate::error::InputError;
use crate::message::MenuChoice;
use crate::util::Console;

pub const MENU_PROMPT: &str = "Enter your choice (1/2/3/4): ";

const AUTH_HINT: &str =
    "Hint: check that the API token is valid and allowed to edit DNS in this zone.";

pub fn render_menu(console: &mut dyn Console) {
    console.println("");
    console.println("What would you like to do?");
    for choice in MenuChoice::ALL {
        console.println(&format!("{}. {}", choice.key(), choice.label()));
    }
}

/// Numbered list of the record types the add form accepts.
pub fn render_record_types(console: &mut dyn Console) {
    console.println("Record types:");
    for (i, record_type) in DnsRecordType::ALL.iter().enumerate() {
        console.println(&format!("  {}. {record_type}", i + 1));
    }
}

pub fn render_provider_error(console: &mut dyn Console, error: &ProviderError) {
    console.println(&format!("Error: {error}"));
    if error.is_auth() {
        console.println(AUTH_HINT);
    }
}

pub fn render_input_error(console: &mut dyn Console, error: &InputError) {
    console.println(&format!("Invalid input: {error}"));
}
