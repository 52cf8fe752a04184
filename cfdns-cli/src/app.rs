//! Menu loop
//!
//! ```text
//! authenticate()                      // report-only token check
//! loop {
//!     if app.should_quit() { break }
//!     update::step(&mut app, ..)      // run one state, pick the next
//! }
//! "Exiting..."
//! ```

use cfdns_provider::DnsProvider;

use crate::model::App;
use crate::update;
use crate::util::Console;
use crate::view;

/// Run the session until the user exits or input ends.
pub async fn run(app: &mut App, provider: &dyn DnsProvider, console: &mut dyn Console) {
    authenticate(provider, console).await;

    while !app.should_quit() {
        update::step(app, provider, console).await;
    }

    console.println("Exiting...");
}

/// Check the token once before the first listing. Failures are reported, not fatal.
async fn authenticate(provider: &dyn DnsProvider, console: &mut dyn Console) {
    match provider.verify_token().await {
        Ok(true) => tracing::debug!(zone_id = provider.zone_id(), "API token verified"),
        Ok(false) => {
            console.println("Warning: the API token is not active; requests will likely fail.");
        }
        Err(e) => view::render_provider_error(console, &e),
    }
}
