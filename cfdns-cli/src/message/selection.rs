//! Delete selection

use super::form::is_back;
use crate::error::InputError;

/// What the user typed at the delete prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteSelection {
    /// Blank line or `b`/`back`.
    Back,
    /// Whitespace-separated 1-based indices, not yet checked against the list.
    Indices {
        indices: Vec<usize>,
        /// Tokens that are not numbers.
        rejected: Vec<InputError>,
    },
}

impl DeleteSelection {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || is_back(input) {
            return Self::Back;
        }

        let mut indices = Vec::new();
        let mut rejected = Vec::new();
        for token in input.split_whitespace() {
            match token.parse::<usize>() {
                Ok(index) => indices.push(index),
                Err(_) => rejected.push(InputError::NotANumber(token.to_string())),
            }
        }

        Self::Indices { indices, rejected }
    }
}
