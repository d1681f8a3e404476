//! Entity definitions for the cast.

mod character;

pub use character::*;

use serde::{Deserialize, Serialize};

/// Stable identifier of a character inside one [`CastGraph`](crate::CastGraph).
///
/// Identifiers are arena indices assigned in input order. They are only
/// meaningful for the graph that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub usize);

impl CharacterId {
    /// Create an identifier from an arena index.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of the character in graph order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
