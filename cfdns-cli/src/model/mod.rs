//! Model layer: session state and the fetched record list

mod app;
mod records;

pub use app::{App, State};
pub use records::RecordSnapshot;
