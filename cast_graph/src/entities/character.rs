//! Character definitions.

use serde::{Deserialize, Serialize};

use super::CharacterId;

/// One member of the cast.
///
/// Relation fields hold identifiers into the owning graph; a character never
/// owns the characters it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub first_name: String,
    /// Absent for characters outside any family (monsters, loners).
    pub last_name: Option<String>,
    pub is_monster: bool,

    nemesis: Option<CharacterId>,
    children: Vec<CharacterId>,
}

impl Character {
    /// Create a character with the given first name and no relations.
    pub fn new(id: CharacterId, first_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: None,
            is_monster: false,
            nemesis: None,
            children: Vec::new(),
        }
    }

    /// Set the last name. An empty name leaves the character without one.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        let last_name = last_name.into();
        self.last_name = (!last_name.is_empty()).then_some(last_name);
        self
    }

    /// Set the monster flag.
    pub fn with_monster(mut self, is_monster: bool) -> Self {
        self.is_monster = is_monster;
        self
    }

    /// The character's nemesis, if one was declared and resolved.
    pub fn nemesis(&self) -> Option<CharacterId> {
        self.nemesis
    }

    /// Declared children, in declaration order.
    pub fn children(&self) -> &[CharacterId] {
        &self.children
    }

    /// Check whether this character belongs to the family with the given last name.
    pub fn is_in_family(&self, last_name: &str) -> bool {
        self.last_name.as_deref() == Some(last_name)
    }

    pub(crate) fn set_nemesis(&mut self, nemesis: CharacterId) {
        self.nemesis = Some(nemesis);
    }

    pub(crate) fn add_child(&mut self, child: CharacterId) {
        self.children.push(child);
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.last_name {
            Some(last_name) => write!(f, "{} {}", self.first_name, last_name),
            None => write!(f, "{}", self.first_name),
        }
    }
}
