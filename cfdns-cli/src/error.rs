//! User input errors
//!
//! Raised while parsing what the user typed at a prompt. They are reported on the
//! console and the prompt or menu is shown again; none of them ends the session.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{}", out_of_range(.index, .len))]
    OutOfRange { index: usize, len: usize },

    #[error("invalid choice '{0}', please enter 1, 2, 3 or 4")]
    UnknownMenuChoice(String),

    #[error("unsupported record type '{0}'")]
    UnknownRecordType(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("invalid TTL '{0}', expected a whole number of seconds")]
    InvalidTtl(String),

    #[error("invalid priority '{0}', expected a number between 0 and 65535")]
    InvalidPriority(String),

    #[error("please answer y or n (got '{0}')")]
    InvalidYesNo(String),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn out_of_range(index: &usize, len: &usize) -> String {
    if *len == 0 {
        format!("index {index} is out of range (the list is empty)")
    } else {
        format!("index {index} is out of range (1-{len})")
    }
}
