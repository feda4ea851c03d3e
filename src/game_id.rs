//! Typed access to the game id carried by a trigger element.

#[cfg(test)]
#[path = "game_id_test.rs"]
mod game_id_test;

use std::fmt;

use crate::error::ModalError;

/// A non-empty game identifier read from a trigger's data attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    /// Build an id from a raw attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::MissingIdentifier`] when the attribute is absent
    /// or blank.
    pub fn from_attribute(raw: Option<String>) -> Result<Self, ModalError> {
        match raw {
            Some(value) if !value.trim().is_empty() => Ok(Self(value)),
            _ => Err(ModalError::MissingIdentifier),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
