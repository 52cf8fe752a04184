//! Main menu choices

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Add,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 4] = [Self::View, Self::Add, Self::Delete, Self::Exit];

    pub fn key(self) -> u8 {
        match self {
            Self::View => 1,
            Self::Add => 2,
            Self::Delete => 3,
            Self::Exit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::View => "View DNS records",
            Self::Add => "Add a new DNS record",
            Self::Delete => "Delete existing DNS records",
            Self::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Result<Self, InputError> {
        match input.trim() {
            "1" => Ok(Self::View),
            "2" => Ok(Self::Add),
            "3" => Ok(Self::Delete),
            "4" => Ok(Self::Exit),
            other => Err(InputError::UnknownMenuChoice(other.to_string())),
        }
    }
}
