//! Util layer: console I/O and logging bootstrap
//!
//! Nothing here knows about DNS records. `console` wraps stdin/stdout behind the
//! [`Console`] trait the menu loop is written against; `logging` installs the
//! stderr subscriber so diagnostics never interleave with the interactive prompts.

mod console;
mod logging;

pub use console::{Console, StdConsole};
pub use logging::init_logging;
