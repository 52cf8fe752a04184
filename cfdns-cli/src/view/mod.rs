//! View layer: everything the session prints
//!
//! Views only read the model and write lines to a [`Console`](crate::util::Console).

mod notices;
mod records;

pub use notices::{
    render_input_error, render_menu, render_provider_error, render_record_types, MENU_PROMPT,
};
pub use records::{render_created, render_deleted, render_records};
