//! Credential service
//!
//! Fills in whatever the config layers left out by asking on the console:
//! the API token first, then the zone id.

use std::io;

use super::config_service::AppConfig;
use crate::util::Console;

/// Token and zone a session is bound to.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_token: String,
    pub zone_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_token", &cfdns_provider::mask_secret(&self.api_token))
            .field("zone_id", &self.zone_id)
            .finish()
    }
}

/// Take the token and zone id from `config`, prompting for any that are missing.
///
/// Returns `Ok(None)` if input ends before both are known.
pub fn resolve_credentials(
    config: &AppConfig,
    console: &mut dyn Console,
) -> io::Result<Option<Credentials>> {
    let Some(api_token) = known_or_prompt(
        config.api_token.as_deref(),
        console,
        "Enter your Cloudflare API token: ",
        "API token",
    )?
    else {
        return Ok(None);
    };

    let Some(zone_id) = known_or_prompt(
        config.zone_id.as_deref(),
        console,
        "Enter the zone ID: ",
        "Zone ID",
    )?
    else {
        return Ok(None);
    };

    Ok(Some(Credentials { api_token, zone_id }))
}

fn known_or_prompt(
    known: Option<&str>,
    console: &mut dyn Console,
    prompt: &str,
    what: &str,
) -> io::Result<Option<String>> {
    if let Some(value) = known {
        return Ok(Some(value.to_string()));
    }

    loop {
        let Some(line) = console.prompt(prompt)? else {
            return Ok(None);
        };
        let value = line.trim();
        if value.is_empty() {
            console.println(&format!("{what} must not be empty."));
            continue;
        }
        return Ok(Some(value.to_string()));
    }
}
