//! cfdns: list, add and delete the DNS records of one Cloudflare zone
//!
//! Layout follows a small Elm-style loop:
//! - **Model**: session state and the last fetched record list (`model/`)
//! - **Message**: parsing what the user typed (`message/`)
//! - **Update**: one state step, including the remote calls (`update/`)
//! - **View**: printing records, menus and errors (`view/`)
//! - **Backend**: configuration and credentials (`backend/`)
//!
//! Startup: logging → config → credentials → Cloudflare client → `app::run`.
//! Only a failure before the loop starts gives a non-zero exit code.

mod app;
mod backend;
mod error;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod test_utils;

use std::process::ExitCode;

use anyhow::{Context, Result};
use cfdns_provider::CloudflareProvider;

use backend::{resolve_credentials, ConfigService, LocalConfigService};
use util::{init_logging, Console, StdConsole};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<()> {
    let config = LocalConfigService::new()
        .load()
        .context("failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let mut console = StdConsole::new();

    let Some(credentials) =
        resolve_credentials(&config, &mut console).context("failed to read credentials")?
    else {
        console.println("Exiting...");
        return Ok(());
    };

    let provider = CloudflareProvider::with_base_url(
        credentials.api_token,
        credentials.zone_id,
        &config.api_base_url,
    )
    .context("failed to create the Cloudflare client")?;

    let mut app = model::App::new(config.default_ttl);
    app::run(&mut app, &provider, &mut console).await;

    Ok(())
}
