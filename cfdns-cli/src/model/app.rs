//! Session state
//!
//! ```text
//!            ┌──────────────────────────────────────────────┐
//!            ▼                                              │
//!   Listing ───▶ MenuPrompt ──1──▶ Viewing ─────────────────┤
//!                    │     ──2──▶ Adding ──(created)────────▶ Listing
//!                    │     ──3──▶ Deleting ──(selection)────▶ Listing
//!                    └─────4/EOF──▶ Exited
//! ```
//!
//! A failed remote call or a back-out lands on `MenuPrompt` again.

use cfdns_provider::DEFAULT_TTL;

use super::records::RecordSnapshot;

/// Where the menu loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Fetch and print the zone's records.
    #[default]
    Listing,
    /// Show the main menu and wait for a choice.
    MenuPrompt,
    /// Re-fetch and print on request.
    Viewing,
    /// Collect the fields of a new record and create it.
    Adding,
    /// Re-fetch, then delete records by their displayed index.
    Deleting,
    Exited,
}

#[derive(Debug)]
pub struct App {
    pub state: State,
    /// Records as last fetched; indices the user types resolve against this.
    pub snapshot: RecordSnapshot,
    /// TTL applied when the add form's TTL prompt is left blank.
    pub default_ttl: u32,
}

impl App {
    pub fn new(default_ttl: u32) -> Self {
        Self {
            state: State::default(),
            snapshot: RecordSnapshot::default(),
            default_ttl,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state == State::Exited
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
