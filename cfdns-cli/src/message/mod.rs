//! Message layer
//!
//! Turns a raw console line into something the update layer can act on. Parsing
//! never touches the network or the session state; a bad line becomes an
//! [`InputError`](crate::error::InputError) and the caller asks again.

pub mod form;
mod menu;
mod selection;

pub use menu::MenuChoice;
pub use selection::DeleteSelection;
