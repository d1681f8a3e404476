//! Relation modifiers applied to an anchor character.

use cast_graph::{CastGraph, Character};
use serde::{Deserialize, Serialize};

/// Relations a path can follow from its anchor character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// The anchor's declared nemesis.
    Nemesis,
}

impl Relation {
    /// Look up a relation by its path keyword. Keywords are case-sensitive.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Nemesis" => Some(Relation::Nemesis),
            _ => None,
        }
    }

    /// The keyword used inside `{}` in a path.
    pub fn keyword(&self) -> &'static str {
        match self {
            Relation::Nemesis => "Nemesis",
        }
    }

    /// Follow this relation from `anchor`.
    pub fn follow<'g>(&self, graph: &'g CastGraph, anchor: &'g Character) -> Option<&'g Character> {
        match self {
            Relation::Nemesis => graph.nemesis_of(anchor),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
